//! Serde types for the Google Forms API v1 payloads.
//!
//! Only the slice of the API surface this generator touches is modelled:
//! batch-update requests (create item, update item, update settings) and
//! the form readback used to discover generated item ids. Deserialized
//! types default every field so partial readbacks never fail the run.

use serde::{Deserialize, Serialize};

/// Choice rendering used for every question in the test.
pub const RADIO: &str = "RADIO";

/// Branching action that submits the form immediately.
pub const SUBMIT_FORM: &str = "SUBMIT_FORM";

/// Update mask targeting a choice question's option list.
pub const OPTIONS_MASK: &str = "questionItem.question.choiceQuestion.options";

/// Update mask targeting the quiz-mode toggle.
pub const QUIZ_MASK: &str = "quizSettings.isQuiz";

/// One request in a `batchUpdate` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    /// Append or insert a new item.
    CreateItem(CreateItemRequest),
    /// Patch an existing item.
    UpdateItem(UpdateItemRequest),
    /// Patch form-level settings.
    UpdateSettings(UpdateSettingsRequest),
}

/// Payload of a `createItem` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// The item to create.
    pub item: Item,
    /// Where to insert it.
    pub location: Location,
}

/// Payload of an `updateItem` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    /// The replacement item content.
    pub item: Item,
    /// The location of the item being patched.
    pub location: Location,
    /// Field mask naming the parts to replace.
    pub update_mask: String,
}

/// Payload of an `updateSettings` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    /// The replacement settings content.
    pub settings: FormSettings,
    /// Field mask naming the parts to replace.
    pub update_mask: String,
}

/// Form-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    /// Quiz-mode configuration.
    pub quiz_settings: QuizSettings,
}

/// Quiz-mode configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizSettings {
    /// Whether automatic grading is enabled.
    pub is_quiz: bool,
}

/// Zero-based position of an item within the form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Location {
    /// The item index.
    pub index: usize,
}

/// One form item: a text block, a page break, or a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Server-assigned item id (readback only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Single-line item title; the API rejects embedded line breaks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Multi-line supporting text shown under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Present when the item is an instructional text block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_item: Option<TextItem>,
    /// Present when the item starts a new section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_break_item: Option<PageBreakItem>,
    /// Present when the item is a question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_item: Option<QuestionItem>,
}

/// Marker payload of an instructional text block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextItem {}

/// Marker payload of a section break.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageBreakItem {}

/// Question payload of an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionItem {
    /// The question definition.
    pub question: FormQuestion,
}

/// A single question definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormQuestion {
    /// Whether the respondent must answer.
    pub required: bool,
    /// Grading configuration, present on scored questions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grading: Option<Grading>,
    /// The multiple-choice definition.
    pub choice_question: ChoiceQuestion,
}

/// A multiple-choice question body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceQuestion {
    /// Rendering style; always [`RADIO`] here.
    #[serde(rename = "type")]
    pub kind: String,
    /// The selectable options in display order.
    pub options: Vec<ChoiceOption>,
    /// Whether options are shuffled per respondent.
    pub shuffle: bool,
}

/// One selectable option, optionally carrying branching behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceOption {
    /// The option text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Section to jump to when this option is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_to_section_id: Option<String>,
    /// Navigation action (e.g. [`SUBMIT_FORM`]) when this option is
    /// selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_to_action: Option<String>,
}

impl ChoiceOption {
    /// A plain option with no branching behaviour.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// An option that jumps to the given section.
    #[must_use]
    pub fn to_section(value: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            go_to_section_id: Some(section_id.into()),
            go_to_action: None,
        }
    }

    /// An option that submits the form immediately.
    #[must_use]
    pub fn submitting(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            go_to_section_id: None,
            go_to_action: Some(SUBMIT_FORM.to_owned()),
        }
    }
}

/// Grading configuration of a scored question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grading {
    /// Points awarded for a correct answer.
    pub point_value: serde_json::Number,
    /// The designated correct answers.
    pub correct_answers: CorrectAnswers,
}

/// Wrapper for the designated correct answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectAnswers {
    /// The correct answer values.
    pub answers: Vec<AnswerValue>,
}

/// One correct answer value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerValue {
    /// The option text that counts as correct.
    pub value: String,
}

/// Form metadata used on creation and returned on readback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInfo {
    /// Display title shown to respondents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Drive document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    /// Form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The form document as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormDocument {
    /// Server-assigned form id.
    pub form_id: String,
    /// Form metadata.
    pub info: FormInfo,
    /// Items in display order.
    pub items: Vec<Item>,
    /// Public URL respondents use to fill the form.
    pub responder_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(value: &impl serde::Serialize) -> serde_json::Value {
        serde_json::to_value(value)
            .unwrap_or_else(|error| panic!("wire type should serialize: {error}"))
    }

    #[test]
    fn requests_are_externally_tagged_in_camel_case() {
        let request = Request::UpdateSettings(UpdateSettingsRequest {
            settings: FormSettings {
                quiz_settings: QuizSettings { is_quiz: true },
            },
            update_mask: QUIZ_MASK.to_owned(),
        });
        let json = to_json(&request);
        assert_eq!(
            json,
            serde_json::json!({
                "updateSettings": {
                    "settings": {"quizSettings": {"isQuiz": true}},
                    "updateMask": "quizSettings.isQuiz"
                }
            })
        );
    }

    #[test]
    fn absent_item_fields_are_omitted() {
        let item = Item {
            title: Some("Parte 1".to_owned()),
            page_break_item: Some(PageBreakItem {}),
            ..Item::default()
        };
        let json = to_json(&item);
        assert_eq!(
            json,
            serde_json::json!({"title": "Parte 1", "pageBreakItem": {}})
        );
    }

    #[test]
    fn choice_question_uses_the_reserved_type_key() {
        let question = ChoiceQuestion {
            kind: RADIO.to_owned(),
            options: vec![ChoiceOption::plain("Sim")],
            shuffle: false,
        };
        let json = to_json(&question);
        assert_eq!(json.get("type"), Some(&serde_json::json!("RADIO")));
    }

    #[test]
    fn branching_options_carry_only_their_own_behaviour() {
        let jump = to_json(&ChoiceOption::to_section("b", "section-2"));
        assert_eq!(jump.get("goToSectionId"), Some(&serde_json::json!("section-2")));
        assert!(jump.get("goToAction").is_none());

        let submit = to_json(&ChoiceOption::submitting("a"));
        assert_eq!(submit.get("goToAction"), Some(&serde_json::json!("SUBMIT_FORM")));
        assert!(submit.get("goToSectionId").is_none());
    }

    #[test]
    fn partial_readback_deserializes_with_defaults() {
        let form: FormDocument = serde_json::from_str(
            r#"{"formId": "abc123", "items": [{"itemId": "i1", "pageBreakItem": {}}]}"#,
        )
        .unwrap_or_else(|error| panic!("readback should deserialize: {error}"));
        assert_eq!(form.form_id, "abc123");
        assert_eq!(form.items.len(), 1);
        assert!(form.responder_uri.is_none());
        let Some(item) = form.items.first() else {
            panic!("one item expected");
        };
        assert_eq!(item.item_id.as_deref(), Some("i1"));
        assert!(item.page_break_item.is_some());
    }
}
