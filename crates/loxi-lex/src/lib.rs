//! loxi-lex - Lexical Analyzer for the Lox Scripting Language
//!
//! This crate is the scanning stage of the loxi front end. It transforms raw
//! source text into an ordered sequence of classified tokens for the parser,
//! eliding whitespace and comments, decoding string and number literals,
//! tracking line numbers, and reporting malformed input to an external
//! [`loxi_util::Handler`] without ever failing fatally.
//!
//! # Example Usage
//!
//! ```
//! use loxi_lex::{Lexer, TokenKind};
//! use loxi_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = Lexer::new("var x = 10;", &handler).scan_tokens();
//!
//! assert_eq!(tokens.first().map(|t| t.kind), Some(TokenKind::Var));
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token model and the reserved-word table
//! - [`lexer`] - The dispatch loop and its sub-lexers
//! - [`cursor`] - Character cursor for source traversal
//!
//! A scan is single-threaded and synchronous: one uninterrupted pass over an
//! in-memory buffer. Scans over different inputs may run in parallel with no
//! coordination; the only shared state is the keyword table, which is
//! read-only after initialization.

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword, Literal, Token, TokenKind};
