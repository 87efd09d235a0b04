//! Metadata completeness check over active questions.
//!
//! Active questions need a substantive rationale (at least 10 characters
//! after trimming) and a non-empty distractor rationale for every
//! incorrect option, keyed by its positional letter. Findings aggregate
//! into a single warning capped at five examples.

use crate::checks::write_line;
use placement_bank::{QuestionBank, Report, option_letter};
use std::collections::BTreeMap;
use std::io::Write;

/// Examples listed in the aggregated warning before the remainder count.
const EXAMPLE_LIMIT: usize = 5;

/// Minimum trimmed rationale length considered substantive.
const MIN_RATIONALE_LEN: usize = 10;

/// Warn about thin rationales and missing distractor rationales.
pub fn check(bank: &QuestionBank, report: &mut Report, out: &mut dyn Write) {
    let mut incomplete: Vec<String> = Vec::new();
    let empty_map = BTreeMap::new();

    for question in bank.active_questions() {
        let qid = question.display_id();

        let substantive = question
            .rationale
            .as_deref()
            .is_some_and(|rationale| rationale.trim().len() >= MIN_RATIONALE_LEN);
        if !substantive {
            incomplete.push(format!("{qid}: rationale too short or missing"));
        }

        let rationales = question.distractor_rationale.as_ref().unwrap_or(&empty_map);
        let options = question.options.as_deref().unwrap_or(&[]);
        for (index, option) in options.iter().enumerate() {
            if option.is_correct == Some(true) {
                continue;
            }
            let Some(letter) = option_letter(index) else {
                continue;
            };
            let present = rationales
                .get(&letter.to_string())
                .is_some_and(|entry| !entry.trim().is_empty());
            if !present {
                incomplete.push(format!(
                    "{qid}: missing distractor rationale for incorrect option '{letter}'"
                ));
            }
        }
    }

    if incomplete.is_empty() {
        write_line(out, "✓ Metadata complete for all active questions");
        return;
    }

    let examples: Vec<&str> = incomplete
        .iter()
        .take(EXAMPLE_LIMIT)
        .map(String::as_str)
        .collect();
    let mut message = format!(
        "Metadata incomplete for {} questions:\n   {}",
        incomplete.len(),
        examples.join("\n   ")
    );
    let remaining = incomplete.len().saturating_sub(EXAMPLE_LIMIT);
    if remaining > 0 {
        message.push_str(&format!("\n   ... and {remaining} more"));
    }
    report.warning(message);
}
