//! Load and schema error types for the question bank file.
//!
//! These errors are fatal by design: the validator aborts before running
//! any checks when the bank cannot be loaded, and the form generator
//! refuses to build from an unloadable bank.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the question bank file.
#[derive(Debug, Error)]
pub enum BankError {
    /// The bank file does not exist at the given path.
    #[error("File not found: {path}")]
    NotFound {
        /// Path where the bank file was expected.
        path: Utf8PathBuf,
    },

    /// The bank file could not be read.
    #[error("I/O error reading bank: {0}")]
    Io(#[from] std::io::Error),

    /// The bank file is not valid JSON, or a field has the wrong shape.
    #[error("JSON parse error: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },

    /// The document parsed but lacks the top-level `questions` field.
    #[error("Root level missing 'questions' field")]
    MissingQuestions,
}

/// Result type alias using [`BankError`].
pub type Result<T> = std::result::Result<T, BankError>;
