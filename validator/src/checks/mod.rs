//! The validator's independent checks.
//!
//! Each check takes the loaded bank and the shared [`Report`], appends any
//! findings, and writes its progress lines to the supplied output handle.
//! Checks never depend on each other and may run in any order; the only
//! shared state is the report aggregate.
//!
//! [`Report`]: placement_bank::Report

use std::io::Write;

pub mod anchors;
pub mod distribution;
pub mod fields;
pub mod identity;
pub mod metadata;
pub mod options;
pub mod version;

/// Write one progress line, ignoring write failures.
///
/// Progress output is decoration; a broken pipe must not abort the checks
/// or distort the verdict.
pub(crate) fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort progress output; ignore write failures.
    }
}
