//! Duplicate-id and id-convention checks.
//!
//! Duplicate ids are a blocking error (listed once each, in first-seen
//! order); ids that stray from the `B{band}_{TYPE}_{number}` naming
//! convention are a warning only.

use crate::checks::write_line;
use placement_bank::{QuestionBank, Report};
use std::io::Write;

/// Report duplicate question ids and naming-convention strays.
pub fn check(bank: &QuestionBank, report: &mut Report, out: &mut dyn Write) {
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicates: Vec<&str> = Vec::new();

    for question in &bank.questions {
        let Some(id) = question.id.as_deref() else {
            // Already caught by the required-fields check.
            continue;
        };
        if id.is_empty() {
            continue;
        }

        if seen.contains(&id) {
            if !duplicates.contains(&id) {
                duplicates.push(id);
            }
        } else {
            seen.push(id);
        }

        if !id.starts_with('B') {
            report.warning(format!(
                "Question {id}: ID doesn't follow convention 'B{{band}}_{{TYPE}}_{{number}}'"
            ));
        }
    }

    if duplicates.is_empty() {
        write_line(
            out,
            format!("✓ No duplicate IDs ({} unique questions)", seen.len()),
        );
    } else {
        report.error(format!(
            "Duplicate question IDs found: {}",
            duplicates.join(", ")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::support::{bank_of, well_formed};

    #[test]
    fn unique_ids_produce_no_findings() {
        let bank = bank_of(vec![
            well_formed("B1_VOCAB_01", 1),
            well_formed("B1_VOCAB_02", 1),
        ]);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn duplicates_are_listed_once_each() {
        let bank = bank_of(vec![
            well_formed("B1_VOCAB_01", 1),
            well_formed("B1_VOCAB_01", 1),
            well_formed("B1_VOCAB_01", 1),
            well_formed("B2_GRAM_01", 2),
            well_formed("B2_GRAM_01", 2),
        ]);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert_eq!(
            report.errors(),
            ["Duplicate question IDs found: B1_VOCAB_01, B2_GRAM_01"]
        );
    }

    #[test]
    fn convention_stray_is_a_warning_not_an_error() {
        let bank = bank_of(vec![well_formed("Q1_VOCAB_01", 1)]);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert!(report.errors().is_empty());
        assert_eq!(
            report.warnings(),
            ["Question Q1_VOCAB_01: ID doesn't follow convention 'B{band}_{TYPE}_{number}'"]
        );
    }

    #[test]
    fn absent_ids_are_left_to_the_fields_check() {
        let bank = bank_of(vec![serde_json::json!({"status": "active"})]);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
    }
}
