//! Anchor designation check over active questions.
//!
//! One anchor-easy (opening the test) and one anchor-hard (closing it)
//! calibrate difficulty perception. Missing or duplicated anchors do not
//! block usage, so every finding here is a warning.

use crate::checks::write_line;
use placement_bank::{Anchor, QuestionBank, Report};
use std::io::Write;

/// Warn when anchor-easy or anchor-hard is absent or duplicated.
pub fn check(bank: &QuestionBank, report: &mut Report, out: &mut dyn Write) {
    let mut easy: Vec<&str> = Vec::new();
    let mut hard: Vec<&str> = Vec::new();

    for question in bank.active_questions() {
        match question.parsed_anchor() {
            Some(Anchor::Easy) => easy.push(question.display_id()),
            Some(Anchor::Hard) => hard.push(question.display_id()),
            None => {}
        }
    }

    for (kind, ids, slot) in [("easy", easy, "Q1"), ("hard", hard, "Q25")] {
        match ids.as_slice() {
            [] => report.warning(format!(
                "No anchor-{kind} question found (should be {slot})"
            )),
            [only] => write_line(out, format!("✓ Anchor-{kind}: {only}")),
            many => report.warning(format!(
                "Multiple anchor-{kind} questions: {} (should be only {slot})",
                many.join(", ")
            )),
        }
    }
}
