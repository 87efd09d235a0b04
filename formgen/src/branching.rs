//! Second-pass section routing requests.
//!
//! Section ids only exist after the structure batch lands, so routing is
//! attached by reading the form back, locating the gate question, the
//! routing question, and the section page breaks by title, and patching
//! the two questions' option lists in place. Option texts are carried
//! over from the readback so the patch adds navigation without erasing
//! the labels.

use crate::items::split_prompt;
use crate::plan::{GATE_QUESTION, ROUTING_QUESTION};
use crate::wire::{
    ChoiceOption, ChoiceQuestion, FormDocument, FormQuestion, Item, Location, QuestionItem,
    Request, UpdateItemRequest, OPTIONS_MASK, RADIO,
};

/// A question located in the readback, with enough context to patch it.
struct LocatedQuestion {
    item_id: String,
    index: usize,
    option_values: Vec<String>,
}

/// Build the routing patch for a created form.
///
/// The gate question's three options all jump to section 1, so every
/// respondent sees the foundation questions. The routing question sends
/// path A straight to submission and paths B and C on to section 2.
/// Returns an empty batch when the expected items cannot be found; the
/// caller treats that as a soft failure.
#[must_use]
pub fn branching_requests(form: &FormDocument) -> Vec<Request> {
    let band1_section = section_id(form, "Parte 1");
    let band2_section = section_id(form, "Parte 2");
    let gate = locate_question(form, GATE_QUESTION);
    let routing = locate_question(form, ROUTING_QUESTION);

    let mut requests = Vec::new();
    if let (Some(gate), Some(band1)) = (gate, band1_section) {
        let options = gate
            .option_values
            .iter()
            .map(|value| ChoiceOption::to_section(value, band1))
            .collect();
        requests.push(patch_options(&gate, options));
    }
    if let (Some(routing), Some(band2)) = (routing, band2_section) {
        let options = routing
            .option_values
            .iter()
            .enumerate()
            .map(|(position, value)| {
                if position == 0 {
                    ChoiceOption::submitting(value)
                } else {
                    ChoiceOption::to_section(value, band2)
                }
            })
            .collect();
        requests.push(patch_options(&routing, options));
    }
    requests
}

/// Find the item id of the page break whose title starts with `prefix`.
fn section_id<'a>(form: &'a FormDocument, prefix: &str) -> Option<&'a str> {
    form.items.iter().find_map(|item| {
        if item.page_break_item.is_some()
            && item.title.as_deref().is_some_and(|t| t.starts_with(prefix))
        {
            item.item_id.as_deref()
        } else {
            None
        }
    })
}

/// Find a question item by the title its prompt was split into.
fn locate_question(form: &FormDocument, prompt: &str) -> Option<LocatedQuestion> {
    let (_, title) = split_prompt(prompt);
    form.items.iter().enumerate().find_map(|(index, item)| {
        let question_item = item.question_item.as_ref()?;
        if item.title.as_deref() != Some(title.as_str()) {
            return None;
        }
        let option_values = question_item
            .question
            .choice_question
            .options
            .iter()
            .map(|opt| opt.value.clone().unwrap_or_default())
            .collect();
        Some(LocatedQuestion {
            item_id: item.item_id.clone()?,
            index,
            option_values,
        })
    })
}

/// Build the update request replacing a question's option list.
fn patch_options(target: &LocatedQuestion, options: Vec<ChoiceOption>) -> Request {
    Request::UpdateItem(UpdateItemRequest {
        item: Item {
            item_id: Some(target.item_id.clone()),
            question_item: Some(QuestionItem {
                question: FormQuestion {
                    required: true,
                    grading: None,
                    choice_question: ChoiceQuestion {
                        kind: RADIO.to_owned(),
                        options,
                        shuffle: false,
                    },
                },
            }),
            ..Item::default()
        },
        location: Location {
            index: target.index,
        },
        update_mask: OPTIONS_MASK.to_owned(),
    })
}
