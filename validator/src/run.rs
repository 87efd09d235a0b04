//! Load-check-report pipeline orchestration.
//!
//! Loads the bank, runs every check against the shared report, and prints
//! the results block. Load and schema failures abort before any check
//! runs: the report then carries only the load error.

use crate::checks::{
    anchors, distribution, fields, identity, metadata, options, version, write_line,
};
use crate::cli::Cli;
use crate::error::{Result, ValidatorError};
use placement_bank::report::RULE;
use placement_bank::{Report, Verdict, load_bank};
use std::io::Write;

/// Run the full validation pipeline, writing human-readable output.
///
/// Returns the overall [`Verdict`]; warnings never block. The caller maps
/// the verdict to a process exit code.
///
/// # Errors
///
/// Returns [`ValidatorError::WriteFailed`] when the results block cannot
/// be written. Progress lines are best-effort and never fail the run.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<Verdict> {
    write_line(out, RULE);
    write_line(out, "QUESTION BANK VALIDATOR");
    write_line(out, RULE);
    write_line(out, "");
    write_line(out, format!("Validating: {}", cli.bank));
    write_line(out, "");

    let mut report = Report::new();

    let bank = match load_bank(&cli.bank) {
        Ok(bank) => bank,
        Err(err) => {
            log::debug!("bank load failed: {err}");
            report.error(err.to_string());
            return finish(&report, out);
        }
    };
    write_line(out, format!("✓ Loaded {} questions", bank.questions.len()));

    version::check(&bank, &mut report, out);
    fields::check(&bank, &mut report, out);
    identity::check(&bank, &mut report, out);
    distribution::check(&bank, &mut report, out);
    options::check(&bank, &mut report, out);
    anchors::check(&bank, &mut report, out);
    metadata::check(&bank, &mut report, out);

    finish(&report, out)
}

/// Print the results block and return the verdict.
fn finish(report: &Report, out: &mut dyn Write) -> Result<Verdict> {
    writeln!(out, "{}", report.display_text())
        .map_err(|source| ValidatorError::WriteFailed { source })?;
    Ok(report.verdict())
}
