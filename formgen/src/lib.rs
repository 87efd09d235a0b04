//! Placement-test form generator library.
//!
//! Drives the Google Forms API v1 through a linear build sequence:
//! authenticate, create the form, enable quiz mode, build the bilingual
//! three-section structure from the question bank, wire the branching
//! paths, and print the resulting URLs. The Forms service is an opaque
//! external collaborator reached through the [`forms::FormsApi`] trait.
//!
//! # Modules
//!
//! - [`auth`] - OAuth client-secret and cached-token handling
//! - [`branching`] - Second-pass section routing requests
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Generator error types with the hard/soft failure split
//! - [`forms`] - Forms API client boundary
//! - [`items`] - Form item request builders and prompt splitting
//! - [`output`] - Success URLs and the manual follow-up checklist
//! - [`plan`] - Bilingual copy and the full structure batch
//! - [`run`] - Build pipeline orchestration
//! - [`wire`] - Serde types for the Forms API payloads

pub mod auth;
pub mod branching;
pub mod cli;
pub mod error;
pub mod forms;
pub mod items;
pub mod output;
pub mod plan;
pub mod run;
pub mod wire;

pub use error::{FormgenError, Result};
pub use run::run;
