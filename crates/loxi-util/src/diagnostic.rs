//! Error and warning reporting infrastructure.
//!
//! The scanner never fails fatally: malformed input is reported to a
//! [`Handler`] passed in by the caller, and scanning continues. The handler
//! collects [`Diagnostic`]s; whether they abort the run, and how they are
//! displayed, is the driver's decision.
//!
//! # Examples
//!
//! ```
//! use loxi_util::{Handler, Span};
//!
//! let handler = Handler::new();
//! handler.error("Unterminated string.", Span::new(0, 4, 1, 1));
//!
//! for diagnostic in handler.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A malformed-input error.
    Error,
    /// Suspicious but scannable input.
    Warning,
}

impl Level {
    /// Returns true if this level represents an error.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the canonical name for this level.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A diagnostic message with severity and source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source location the message refers to.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {}: {}",
            self.span.line, self.level, self.message
        )
    }
}

/// Collects diagnostics reported during a scan.
///
/// The handler is shared by reference with the scanner, so reporting goes
/// through interior mutability. Reporting never returns a value to the
/// reporter and never halts it.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Reports an error at the given location.
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit_diagnostic(Diagnostic::error(message, span));
    }

    /// Reports a warning at the given location.
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.emit_diagnostic(Diagnostic::warning(message, span));
    }

    /// Records a pre-built diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any errors have been reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Number of reported errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Returns a copy of everything reported so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Discards all collected diagnostics.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
