//! Question bank validator library.
//!
//! Loads a placement-exam question bank and runs a fixed set of
//! independent checks, accumulating blocking errors and non-blocking
//! warnings into a single [`placement_bank::Report`]. The `placement-validator`
//! binary is a thin wrapper over [`run::run`].
//!
//! # Modules
//!
//! - [`checks`] - The independent, order-insensitive validation checks
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Validator error types
//! - [`run`] - Load-check-report pipeline orchestration

pub mod checks;
pub mod cli;
pub mod error;
pub mod run;

pub use error::{Result, ValidatorError};
pub use run::run;
