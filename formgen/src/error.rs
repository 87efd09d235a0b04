//! Error types for the form generator.
//!
//! Every variant here is a hard failure that aborts the run with a
//! non-zero exit. Branching setup and the final publish nudge are the
//! only soft spots, and those are downgraded to warnings in
//! [`crate::run`] rather than surfacing as errors.

use camino::Utf8PathBuf;
use placement_bank::BankError;
use thiserror::Error;

/// Errors that can occur during form generation.
#[derive(Debug, Error)]
pub enum FormgenError {
    /// The question bank could not be loaded.
    #[error(transparent)]
    Bank(#[from] BankError),

    /// The OAuth client-secret file was not found.
    #[error("credentials file not found at {path}")]
    CredentialsNotFound {
        /// Path where the client-secret file was expected.
        path: Utf8PathBuf,
    },

    /// The cached token file was not found.
    #[error(
        "token file not found at {path}; provision an authorized token before running"
    )]
    TokenMissing {
        /// Path where the token file was expected.
        path: Utf8PathBuf,
    },

    /// Authentication failed (bad secrets, expired token without a
    /// refresh token, or a failed refresh grant).
    #[error("authentication failed: {reason}")]
    Auth {
        /// Description of the authentication failure.
        reason: String,
    },

    /// A Forms API call failed.
    #[error("forms API {operation} failed: {reason}")]
    Api {
        /// The API operation that failed (create, batchUpdate, get).
        operation: &'static str,
        /// Description of the failure.
        reason: String,
    },

    /// A bank question has no option marked correct, so it cannot be
    /// rendered as a graded item.
    #[error("question {id} has no option marked correct")]
    MissingCorrectAnswer {
        /// Id of the offending question.
        id: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed outside the bank loader.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`FormgenError`].
pub type Result<T> = std::result::Result<T, FormgenError>;
