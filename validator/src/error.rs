//! Error types for the validator CLI.
//!
//! Load and schema problems are reported as findings, not as process
//! errors, so the only hard failure left is being unable to write the
//! report itself.

use thiserror::Error;

/// Errors that can occur while running the validator.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Failed to write the validation report.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`ValidatorError`].
pub type Result<T> = std::result::Result<T, ValidatorError>;
