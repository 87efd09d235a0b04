//! Band distribution check over active questions.
//!
//! The test blueprint needs 10/8/7 active questions in bands 1/2/3. A
//! shortfall blocks form generation; a surplus is rotation stock and only
//! warrants a warning. The asymmetry is deliberate.

use crate::checks::write_line;
use placement_bank::{Band, QuestionBank, Report};
use std::io::Write;

/// Compare active-question counts per band against the fixed quotas.
pub fn check(bank: &QuestionBank, report: &mut Report, out: &mut dyn Write) {
    write_line(out, "");
    write_line(out, "📊 Band distribution (active questions only):");

    let mut all_met = true;

    for band in Band::ALL {
        let quota = band.quota();
        let count = bank
            .active_questions()
            .filter(|q| q.parsed_band() == Some(band))
            .count();
        log::debug!("band {band} ({}): {count} active of {quota}", band.label());

        let marker = if count >= quota { "✓" } else { "✗" };
        write_line(
            out,
            format!("   {marker} Band {band}: {count} questions (need {quota})"),
        );

        if count < quota {
            report.error(format!(
                "Band {band}: only {count} active questions, need {quota}"
            ));
            all_met = false;
        } else if count > quota {
            report.warning(format!(
                "Band {band}: {count} active questions, only {quota} needed for test. \
                 Extra questions available for rotation."
            ));
        }
    }

    if all_met {
        write_line(out, "✓ Band distribution correct for test generation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::support::{bank_of, well_formed};

    fn bank_with_counts(band1: usize, band2: usize, band3: usize) -> placement_bank::QuestionBank {
        let mut questions = Vec::new();
        for (band, count) in [(1, band1), (2, band2), (3, band3)] {
            for index in 0..count {
                questions.push(well_formed(&format!("B{band}_VOCAB_{index:02}"), band));
            }
        }
        bank_of(questions)
    }

    #[test]
    fn exact_quotas_produce_no_findings() {
        let bank = bank_with_counts(10, 8, 7);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn shortfall_is_an_error_naming_both_counts() {
        let bank = bank_with_counts(10, 6, 7);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert_eq!(
            report.errors(),
            ["Band 2: only 6 active questions, need 8"]
        );
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn surplus_is_a_warning_naming_both_counts() {
        let bank = bank_with_counts(10, 8, 9);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert!(report.errors().is_empty());
        assert_eq!(report.warnings().len(), 1);
        let Some(warning) = report.warnings().first() else {
            panic!("a surplus warning was expected");
        };
        assert!(warning.contains("Band 3: 9 active questions, only 7 needed"));
        assert!(warning.contains("rotation"));
    }

    #[test]
    fn retired_and_draft_questions_do_not_count() {
        let mut questions: Vec<serde_json::Value> =
            (0..10).map(|i| well_formed(&format!("B1_V_{i:02}"), 1)).collect();
        questions.extend((0..8).map(|i| well_formed(&format!("B2_V_{i:02}"), 2)));
        questions.extend((0..7).map(|i| well_formed(&format!("B3_V_{i:02}"), 3)));

        // A retired band-1 question must not create a surplus warning.
        let mut retired = well_formed("B1_V_RETIRED", 1);
        if let Some(object) = retired.as_object_mut() {
            object.insert("status".to_owned(), serde_json::json!("retired"));
        }
        questions.push(retired);

        let bank = bank_of(questions);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
    }
}
