//! loxi-util - Foundation Types for the Loxi Front End
//!
//! This crate provides the types shared between the scanner and the driver:
//! source location spans and the diagnostics handler that every stage reports
//! malformed input through.
//!
//! # Example Usage
//!
//! ```
//! use loxi_util::{Handler, Span};
//!
//! let handler = Handler::new();
//! handler.error("Unexpected character.", Span::new(4, 5, 1, 5));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
