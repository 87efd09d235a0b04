//! Two-stage loading of the question bank file.
//!
//! The file is first parsed into a generic JSON value so that malformed
//! JSON and a missing top-level `questions` field produce distinct
//! errors, then deserialized into the lenient [`QuestionBank`] model.
//! Per-question problems never fail the load; they are the validator's
//! job to report.

use crate::error::{BankError, Result};
use crate::model::QuestionBank;
use camino::Utf8Path;

/// Load and parse a question bank file.
///
/// # Errors
///
/// Returns [`BankError::NotFound`] when the file does not exist,
/// [`BankError::Io`] when it cannot be read, [`BankError::Parse`] when
/// the JSON is malformed, and [`BankError::MissingQuestions`] when the
/// document lacks the top-level `questions` field.
pub fn load_bank(path: &Utf8Path) -> Result<QuestionBank> {
    if !path.exists() {
        return Err(BankError::NotFound {
            path: path.to_owned(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    parse_bank(&text)
}

/// Parse question bank JSON text.
///
/// # Errors
///
/// Returns [`BankError::Parse`] for malformed JSON or wrongly shaped
/// fields, and [`BankError::MissingQuestions`] when the top-level
/// `questions` field is absent.
pub fn parse_bank(text: &str) -> Result<QuestionBank> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| BankError::Parse {
        reason: e.to_string(),
    })?;

    if value.get("questions").is_none() {
        return Err(BankError::MissingQuestions);
    }

    serde_json::from_value(value).map_err(|e| BankError::Parse {
        reason: e.to_string(),
    })
}
