//! Required-field presence and enumeration checks.
//!
//! Every question must carry the full set of required fields; each
//! absence is its own error naming the question (1-based position and id)
//! and the field. Fields that are present are additionally validated
//! against the fixed vocabularies: band 1..=3, the type enumeration, the
//! status lifecycle, and the anchor designations.

use crate::checks::write_line;
use placement_bank::{Anchor, Band, QuestionBank, QuestionType, Report, Status};
use std::io::Write;

/// Report missing required fields and out-of-vocabulary values.
pub fn check(bank: &QuestionBank, report: &mut Report, out: &mut dyn Write) {
    for (position, question) in bank.questions.iter().enumerate() {
        let number = position + 1;
        let qid = question.display_id();

        for field in question.missing_fields() {
            report.error(format!(
                "Question {number} ({qid}): missing required field '{field}'"
            ));
        }

        if let Some(kind) = question.kind.as_deref()
            && QuestionType::parse(kind).is_none()
        {
            report.error(format!(
                "Question {number} ({qid}): invalid type '{kind}'. Must be one of: {}",
                QuestionType::ALL.join(", ")
            ));
        }

        if let Some(status) = question.status.as_deref()
            && Status::parse(status).is_none()
        {
            report.error(format!(
                "Question {number} ({qid}): invalid status '{status}'. Must be one of: {}",
                Status::ALL.join(", ")
            ));
        }

        if let Some(band) = question.band
            && Band::from_number(band).is_none()
        {
            report.error(format!(
                "Question {number} ({qid}): invalid band {band}. Must be 1, 2, or 3"
            ));
        }

        if let Some(anchor) = question.anchor.as_deref()
            && Anchor::parse(anchor).is_none()
        {
            report.error(format!(
                "Question {number} ({qid}): invalid anchor '{anchor}'. Must be 'easy', 'hard', or null"
            ));
        }
    }

    write_line(out, "✓ Required fields check complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::support::{bank_of, well_formed};
    use rstest::rstest;

    #[test]
    fn well_formed_question_produces_no_findings() {
        let bank = bank_of(vec![well_formed("B1_VOCAB_01", 1)]);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn each_missing_field_is_a_separate_error() {
        let mut value = well_formed("B1_VOCAB_01", 1);
        let Some(object) = value.as_object_mut() else {
            panic!("fixture should be an object");
        };
        object.remove("rationale");
        object.remove("cognate");

        let bank = bank_of(vec![value]);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert_eq!(
            report.errors(),
            [
                "Question 1 (B1_VOCAB_01): missing required field 'cognate'",
                "Question 1 (B1_VOCAB_01): missing required field 'rationale'",
            ]
        );
    }

    #[rstest]
    #[case::bad_type("type", serde_json::json!("essay"), "invalid type 'essay'")]
    #[case::bad_status("status", serde_json::json!("archived"), "invalid status 'archived'")]
    #[case::bad_band("band", serde_json::json!(5), "invalid band 5. Must be 1, 2, or 3")]
    #[case::bad_anchor("anchor", serde_json::json!("medium"), "invalid anchor 'medium'")]
    fn out_of_vocabulary_values_are_errors(
        #[case] field: &str,
        #[case] value: serde_json::Value,
        #[case] expected: &str,
    ) {
        let mut question = well_formed("B1_VOCAB_01", 1);
        let Some(object) = question.as_object_mut() else {
            panic!("fixture should be an object");
        };
        object.insert(field.to_owned(), value);

        let bank = bank_of(vec![question]);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert_eq!(report.errors().len(), 1);
        assert!(
            report.errors().iter().any(|e| e.contains(expected)),
            "missing {expected:?} in {:?}",
            report.errors()
        );
    }

    #[test]
    fn absent_anchor_is_not_flagged() {
        let bank = bank_of(vec![well_formed("B1_VOCAB_01", 1)]);
        let mut report = Report::new();
        check(&bank, &mut report, &mut std::io::sink());
        assert!(report.errors().is_empty());
    }
}
