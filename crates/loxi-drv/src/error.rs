//! Error types for the driver.

use std::path::PathBuf;

use thiserror::Error;

/// Errors the driver itself can hit.
///
/// Lexical errors in the scanned source are not represented here: those go
/// through the diagnostics handler and only influence the exit status.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The script file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Script {
        /// Path the driver was asked to scan.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// Terminal or pipe IO failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Token stream serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`DriverError`].
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_error_names_the_path() {
        let err = DriverError::Script {
            path: PathBuf::from("missing.lox"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("missing.lox"));
        assert!(rendered.contains("not found"));
    }
}
