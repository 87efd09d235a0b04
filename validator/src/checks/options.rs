//! Option integrity check.
//!
//! Every question needs exactly four options; a question failing the
//! count check is skipped for the per-option sub-checks. Each option must
//! carry `text` and `is_correct`, and exactly one option across the four
//! must be marked correct.

use crate::checks::write_line;
use placement_bank::{QuestionBank, Report};
use std::io::Write;

/// Report option-count, option-field, and correct-answer problems.
pub fn check(bank: &QuestionBank, report: &mut Report, out: &mut dyn Write) {
    for question in &bank.questions {
        let qid = question.display_id();
        let options = question.options.as_deref().unwrap_or(&[]);

        if options.len() != 4 {
            report.error(format!(
                "Question {qid}: has {} options, must have exactly 4",
                options.len()
            ));
            continue;
        }

        let mut correct_count = 0_usize;
        for (index, option) in options.iter().enumerate() {
            if option.text.is_none() {
                report.error(format!(
                    "Question {qid}, option {}: missing 'text' field",
                    index + 1
                ));
            }
            match option.is_correct {
                None => report.error(format!(
                    "Question {qid}, option {}: missing 'is_correct' field",
                    index + 1
                )),
                Some(true) => correct_count += 1,
                Some(false) => {}
            }
        }

        match correct_count {
            1 => {}
            0 => report.error(format!("Question {qid}: no correct answer marked")),
            count => report.error(format!(
                "Question {qid}: {count} correct answers (must be exactly 1)"
            )),
        }
    }

    write_line(out, "✓ Options validation complete");
}
