//! Shared question-bank infrastructure for the placement exam tooling.
//!
//! This crate provides the data model, lenient JSON loading, and the
//! error/warning report aggregate consumed by both the validator and the
//! form generator CLIs. The bank file is read-only input: nothing here
//! ever mutates or rewrites it.
//!
//! # Modules
//!
//! - [`error`] - Load and schema error types
//! - [`load`] - Two-stage bank file loading
//! - [`model`] - Question bank data model and fixed enumerations
//! - [`report`] - Error/warning aggregate with verdict rendering

pub mod error;
pub mod load;
pub mod model;
pub mod report;

pub use error::{BankError, Result};
pub use load::load_bank;
pub use model::{
    Anchor, AnswerOption, Band, Question, QuestionBank, QuestionType, Status, option_letter,
};
pub use report::{RULE, Report, Verdict};
