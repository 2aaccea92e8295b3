//! loxi-drv - Driver for the loxi front end.
//!
//! The driver owns everything outside the scanner's boundary: reading script
//! files, running the interactive prompt, choosing how the token stream is
//! printed, and deciding what reported diagnostics mean for the process exit
//! status. The scanner itself knows none of this; it only emits tokens and
//! reports into the handler the driver passes in.

#![warn(missing_docs)]

pub mod error;

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::debug;

use loxi_lex::{Lexer, Token};
use loxi_util::Handler;

pub use error::{DriverError, Result};

/// Output format for the scanned token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EmitFormat {
    /// One `Kind "lexeme" literal` line per token.
    Text,
    /// The token vector as a JSON array.
    Json,
}

impl fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitFormat::Text => write!(f, "text"),
            EmitFormat::Json => write!(f, "json"),
        }
    }
}

/// Scans a script file and prints its token stream to stdout.
///
/// Diagnostics reported during the scan are rendered to stderr afterwards.
/// Returns true if any lexical errors were reported; what that means for the
/// process is the caller's decision.
pub fn run_file(path: &Path, emit: EmitFormat) -> Result<bool> {
    let source = fs::read_to_string(path).map_err(|source| DriverError::Script {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "scanning script");

    let handler = Handler::new();
    let tokens = Lexer::new(&source, &handler).scan_tokens();
    debug!(
        tokens = tokens.len(),
        errors = handler.error_count(),
        "scan finished"
    );

    emit_tokens(&tokens, emit)?;
    Ok(report(&handler))
}

/// Runs the interactive prompt, scanning one line at a time.
///
/// Each line gets a fresh diagnostics handler: errors are reported and the
/// session keeps accepting input. The session ends at end of input.
pub fn run_repl(emit: EmitFormat) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let handler = Handler::new();
        let tokens = Lexer::new(&line, &handler).scan_tokens();
        emit_tokens(&tokens, emit)?;
        report(&handler);
    }
}

/// Prints the token stream in the requested format.
fn emit_tokens(tokens: &[Token], emit: EmitFormat) -> Result<()> {
    match emit {
        EmitFormat::Text => {
            for token in tokens {
                println!("{token}");
            }
        },
        EmitFormat::Json => {
            println!("{}", serde_json::to_string_pretty(tokens)?);
        },
    }
    Ok(())
}

/// Renders collected diagnostics to stderr; returns true if any were errors.
fn report(handler: &Handler) -> bool {
    for diagnostic in handler.diagnostics() {
        eprintln!("{diagnostic}");
    }
    handler.has_errors()
}
