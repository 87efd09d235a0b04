//! Form item request builders and prompt splitting.
//!
//! The Forms API rejects line breaks in item titles, so every builder
//! here splits multi-line content into a single-line title plus a
//! free-form description. Reading-comprehension prompts carry their
//! passage before a blank line; the passage lands in the description and
//! the question itself becomes the title.

use placement_bank::Question;

use crate::error::{FormgenError, Result};
use crate::wire::{
    AnswerValue, ChoiceOption, ChoiceQuestion, CorrectAnswers, CreateItemRequest, FormQuestion,
    Grading, Item, Location, PageBreakItem, QuestionItem, Request, TextItem, RADIO,
};

/// Title length above which text-item content moves to the description.
const LONG_TEXT_THRESHOLD: usize = 100;

/// Split a prompt into an optional description and a single-line title.
///
/// Content before the first blank line (a passage or context block)
/// becomes the description; the remainder becomes the title with any
/// leftover line breaks flattened to spaces.
#[must_use]
pub fn split_prompt(text: &str) -> (Option<String>, String) {
    let (description, title) = match text.split_once("\n\n") {
        Some((passage, rest)) => (Some(passage.to_owned()), rest),
        None => (None, text),
    };
    (description, title.replace('\n', " "))
}

/// Build a text (instructional) item at the given position.
#[must_use]
pub fn text_item(text: &str, index: usize) -> Request {
    let item = if text.len() > LONG_TEXT_THRESHOLD || text.contains('\n') {
        Item {
            title: Some(String::new()),
            description: Some(text.to_owned()),
            text_item: Some(TextItem {}),
            ..Item::default()
        }
    } else {
        Item {
            title: Some(text.to_owned()),
            text_item: Some(TextItem {}),
            ..Item::default()
        }
    };
    Request::CreateItem(CreateItemRequest {
        item,
        location: Location { index },
    })
}

/// Build a page break (section header) at the given position.
///
/// The first line becomes the section title and any remaining lines go
/// into the description.
#[must_use]
pub fn page_break(header: &str, index: usize) -> Request {
    let (title, description) = match header.split_once('\n') {
        Some((first, rest)) => {
            let rest = rest.trim();
            let description = (!rest.is_empty()).then(|| rest.to_owned());
            (first.to_owned(), description)
        }
        None => (header.to_owned(), None),
    };
    Request::CreateItem(CreateItemRequest {
        item: Item {
            title: Some(title),
            description,
            page_break_item: Some(PageBreakItem {}),
            ..Item::default()
        },
        location: Location { index },
    })
}

/// Build an ungraded required multiple-choice question at the given
/// position.
#[must_use]
pub fn choice_question(prompt: &str, options: &[&str], index: usize) -> Request {
    let (description, title) = split_prompt(prompt);
    Request::CreateItem(CreateItemRequest {
        item: Item {
            title: Some(title),
            description,
            question_item: Some(QuestionItem {
                question: FormQuestion {
                    required: true,
                    grading: None,
                    choice_question: ChoiceQuestion {
                        kind: RADIO.to_owned(),
                        options: options.iter().copied().map(ChoiceOption::plain).collect(),
                        shuffle: false,
                    },
                },
            }),
            ..Item::default()
        },
        location: Location { index },
    })
}

/// Build a graded multiple-choice question from a bank question.
///
/// # Errors
///
/// Returns [`FormgenError::MissingCorrectAnswer`] when no option is
/// marked correct.
pub fn graded_question(question: &Question, index: usize) -> Result<Request> {
    let correct_answer =
        question
            .correct_answer_text()
            .ok_or_else(|| FormgenError::MissingCorrectAnswer {
                id: question.display_id().to_owned(),
            })?;
    let prompt = question.question_text.as_deref().unwrap_or_default();
    let (description, title) = split_prompt(prompt);
    let point_value = question
        .point_value
        .clone()
        .unwrap_or_else(|| serde_json::Number::from(1));
    let options = question
        .options
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|opt| ChoiceOption::plain(opt.text.clone().unwrap_or_default()))
        .collect();
    Ok(Request::CreateItem(CreateItemRequest {
        item: Item {
            title: Some(title),
            description,
            question_item: Some(QuestionItem {
                question: FormQuestion {
                    required: true,
                    grading: Some(Grading {
                        point_value,
                        correct_answers: CorrectAnswers {
                            answers: vec![AnswerValue {
                                value: correct_answer.to_owned(),
                            }],
                        },
                    }),
                    choice_question: ChoiceQuestion {
                        kind: RADIO.to_owned(),
                        options,
                        shuffle: false,
                    },
                },
            }),
            ..Item::default()
        },
        location: Location { index },
    }))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn created_item(request: Request) -> (Item, usize) {
        match request {
            Request::CreateItem(create) => (create.item, create.location.index),
            other => panic!("expected createItem, got {other:?}"),
        }
    }

    #[rstest]
    #[case::plain("What does \"book\" mean?", None, "What does \"book\" mean?")]
    #[case::passage(
        "Maria goes to the library.\n\nWhere does Maria go?",
        Some("Maria goes to the library."),
        "Where does Maria go?"
    )]
    #[case::residual_newlines_flattened(
        "Passage line.\n\nFirst part\nsecond part",
        Some("Passage line."),
        "First part second part"
    )]
    fn prompts_split_into_description_and_single_line_title(
        #[case] prompt: &str,
        #[case] description: Option<&str>,
        #[case] title: &str,
    ) {
        let (got_description, got_title) = split_prompt(prompt);
        assert_eq!(got_description.as_deref(), description);
        assert_eq!(got_title, title);
    }

    #[test]
    fn long_text_moves_to_the_description() {
        let text = "PT: instruções.\n\nEN: instructions.";
        let (item, index) = created_item(text_item(text, 0));
        assert_eq!(index, 0);
        assert_eq!(item.title.as_deref(), Some(""));
        assert_eq!(item.description.as_deref(), Some(text));
        assert!(item.text_item.is_some());
    }

    #[test]
    fn short_text_stays_in_the_title() {
        let (item, _) = created_item(text_item("Boa sorte!", 3));
        assert_eq!(item.title.as_deref(), Some("Boa sorte!"));
        assert!(item.description.is_none());
    }

    #[test]
    fn page_break_title_is_the_first_line_only() {
        let header = "Parte 2: Leitura Intermediária / Part 2: Intermediate Reading\n\nTempo estimado / Estimated time: ~6 minutos / ~6 minutes";
        let (item, _) = created_item(page_break(header, 14));
        assert_eq!(
            item.title.as_deref(),
            Some("Parte 2: Leitura Intermediária / Part 2: Intermediate Reading")
        );
        let Some(description) = item.description.as_deref() else {
            panic!("description expected");
        };
        assert!(description.starts_with("Tempo estimado"));
        assert!(item.page_break_item.is_some());
    }

    #[test]
    fn choice_question_is_required_radio_without_grading() {
        let (item, _) = created_item(choice_question("Pick one:", &["a", "b", "c"], 1));
        let Some(question_item) = item.question_item else {
            panic!("question item expected");
        };
        let question = question_item.question;
        assert!(question.required);
        assert!(question.grading.is_none());
        assert_eq!(question.choice_question.kind, RADIO);
        assert_eq!(question.choice_question.options.len(), 3);
        assert!(!question.choice_question.shuffle);
    }

    fn bank_question(text: &str) -> Question {
        serde_json::from_value(serde_json::json!({
            "id": "B1_VOCAB_01",
            "band": 1,
            "question_text": text,
            "point_value": 1,
            "options": [
                {"text": "Universidade", "is_correct": true},
                {"text": "Uniforme", "is_correct": false},
                {"text": "Universal", "is_correct": false},
                {"text": "Único", "is_correct": false}
            ]
        }))
        .unwrap_or_else(|error| panic!("question should parse: {error}"))
    }

    #[test]
    fn graded_question_carries_the_correct_answer_and_points() {
        let question = bank_question("What does \"university\" mean?");
        let request = graded_question(&question, 4)
            .unwrap_or_else(|error| panic!("request should build: {error}"));
        let (item, index) = created_item(request);
        assert_eq!(index, 4);
        let Some(question_item) = item.question_item else {
            panic!("question item expected");
        };
        let Some(grading) = question_item.question.grading else {
            panic!("grading expected");
        };
        assert_eq!(grading.point_value, serde_json::Number::from(1));
        assert_eq!(
            grading.correct_answers.answers.first().map(|a| a.value.as_str()),
            Some("Universidade")
        );
        assert_eq!(question_item.question.choice_question.options.len(), 4);
    }

    #[test]
    fn graded_question_splits_reading_passages() {
        let question = bank_question("Ana works at a hospital.\n\nWhere does Ana work?");
        let request = graded_question(&question, 7)
            .unwrap_or_else(|error| panic!("request should build: {error}"));
        let (item, _) = created_item(request);
        assert_eq!(item.description.as_deref(), Some("Ana works at a hospital."));
        assert_eq!(item.title.as_deref(), Some("Where does Ana work?"));
    }

    #[test]
    fn graded_question_without_a_correct_option_is_rejected() {
        let question: Question = serde_json::from_value(serde_json::json!({
            "id": "B2_VOCAB_03",
            "band": 2,
            "question_text": "Pick one:",
            "options": [
                {"text": "a", "is_correct": false},
                {"text": "b", "is_correct": false}
            ]
        }))
        .unwrap_or_else(|error| panic!("question should parse: {error}"));
        let result = graded_question(&question, 0);
        assert!(matches!(
            result,
            Err(FormgenError::MissingCorrectAnswer { ref id }) if id == "B2_VOCAB_03"
        ));
    }
}
