//! Version presence check.
//!
//! A bank without a `version` tag is usable but harder to trace back to a
//! review cycle, so absence is a warning only.

use crate::checks::write_line;
use placement_bank::{QuestionBank, Report};
use std::io::Write;

/// Warn when the bank carries no `version` tag.
pub fn check(bank: &QuestionBank, report: &mut Report, out: &mut dyn Write) {
    match bank.version_label() {
        Some(version) => write_line(out, format!("✓ Version: {version}")),
        None => report.warning("No 'version' field in question bank"),
    }
}
