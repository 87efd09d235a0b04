//! Question bank data model and fixed enumerations.
//!
//! The [`Question`] type is deliberately lenient: every field is optional
//! so that a structurally valid JSON document always loads, and missing or
//! out-of-range fields surface as accumulated validator findings rather
//! than as a single opaque deserialization failure. The enumerations
//! ([`Band`], [`QuestionType`], [`Status`], [`Anchor`]) carry the fixed
//! vocabularies the validator checks against and the quota table used for
//! band distribution.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A parsed question bank file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBank {
    /// Optional version tag; absence is a validator warning, not an error.
    #[serde(default)]
    pub version: Option<serde_json::Value>,
    /// The questions in source order.
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Render the version tag for display, unquoting plain strings.
    #[must_use]
    pub fn version_label(&self) -> Option<String> {
        self.version.as_ref().map(|value| match value {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// Iterate over active questions in source order.
    pub fn active_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_active())
    }
}

/// A single question record.
///
/// Field presence is validated by the validator's required-fields check;
/// `None` means the key was absent (or JSON `null`) in the source file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Question {
    /// Unique identifier, conventionally `B{band}_{TYPE}_{number}`.
    #[serde(default)]
    pub id: Option<String>,
    /// Difficulty band, expected in 1..=3.
    #[serde(default)]
    pub band: Option<i64>,
    /// Question type token from the fixed enumeration.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Prompt text; a leading passage may precede the prompt, separated
    /// by a blank line.
    #[serde(default)]
    pub question_text: Option<String>,
    /// The answer options, expected to be exactly four.
    #[serde(default)]
    pub options: Option<Vec<AnswerOption>>,
    /// Points awarded for a correct answer.
    #[serde(default)]
    pub point_value: Option<serde_json::Number>,
    /// Cognate flag/metadata recorded by the test authors.
    #[serde(default)]
    pub cognate: Option<serde_json::Value>,
    /// Explanation of the correct answer.
    #[serde(default)]
    pub rationale: Option<String>,
    /// Explanations for incorrect options, keyed by option letter (a-d).
    #[serde(default)]
    pub distractor_rationale: Option<BTreeMap<String, String>>,
    /// Lifecycle status token (`active`, `retired`, or `draft`).
    #[serde(default)]
    pub status: Option<String>,
    /// Anchor designation token (`easy` or `hard`), absent for most
    /// questions.
    #[serde(default)]
    pub anchor: Option<String>,
}

/// Required field names in canonical reporting order.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "id",
    "band",
    "type",
    "question_text",
    "options",
    "point_value",
    "cognate",
    "rationale",
    "distractor_rationale",
    "status",
];

impl Question {
    /// The question id for display, or `NO_ID` when absent.
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("NO_ID")
    }

    /// Whether the question has `status = active`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.parsed_status() == Some(Status::Active)
    }

    /// The band parsed against the fixed 1..=3 range.
    #[must_use]
    pub fn parsed_band(&self) -> Option<Band> {
        self.band.and_then(Band::from_number)
    }

    /// The question type parsed against the fixed enumeration.
    #[must_use]
    pub fn parsed_kind(&self) -> Option<QuestionType> {
        self.kind.as_deref().and_then(QuestionType::parse)
    }

    /// The status parsed against the fixed enumeration.
    #[must_use]
    pub fn parsed_status(&self) -> Option<Status> {
        self.status.as_deref().and_then(Status::parse)
    }

    /// The anchor designation parsed against the fixed enumeration.
    #[must_use]
    pub fn parsed_anchor(&self) -> Option<Anchor> {
        self.anchor.as_deref().and_then(Anchor::parse)
    }

    /// Names of required fields absent from this question, in canonical
    /// reporting order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present: [bool; 10] = [
            self.id.is_some(),
            self.band.is_some(),
            self.kind.is_some(),
            self.question_text.is_some(),
            self.options.is_some(),
            self.point_value.is_some(),
            self.cognate.is_some(),
            self.rationale.is_some(),
            self.distractor_rationale.is_some(),
            self.status.is_some(),
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter_map(|(field, is_present)| (!is_present).then_some(*field))
            .collect()
    }

    /// The text of the single correct option, when exactly marked.
    #[must_use]
    pub fn correct_answer_text(&self) -> Option<&str> {
        self.options.as_deref().and_then(|options| {
            options
                .iter()
                .find(|opt| opt.is_correct == Some(true))
                .and_then(|opt| opt.text.as_deref())
        })
    }
}

/// One answer option of a question.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerOption {
    /// The option text shown to the respondent.
    #[serde(default)]
    pub text: Option<String>,
    /// Whether this option is the correct answer.
    #[serde(default)]
    pub is_correct: Option<bool>,
}

/// Positional option letter (a-d) for a zero-based option index.
#[must_use]
pub const fn option_letter(index: usize) -> Option<char> {
    match index {
        0 => Some('a'),
        1 => Some('b'),
        2 => Some('c'),
        3 => Some('d'),
        _ => None,
    }
}

/// Difficulty band: partitions questions into the three test sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Band 1: Foundation.
    Foundation,
    /// Band 2: Developing.
    Developing,
    /// Band 3: Expanding.
    Expanding,
}

impl Band {
    /// All bands in ascending difficulty order.
    pub const ALL: [Band; 3] = [Band::Foundation, Band::Developing, Band::Expanding];

    /// Parse a band from its 1..=3 numeric form.
    #[must_use]
    pub const fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Band::Foundation),
            2 => Some(Band::Developing),
            3 => Some(Band::Expanding),
            _ => None,
        }
    }

    /// The 1..=3 numeric form used in the bank file.
    #[must_use]
    pub const fn number(self) -> i64 {
        match self {
            Band::Foundation => 1,
            Band::Developing => 2,
            Band::Expanding => 3,
        }
    }

    /// Active questions required in this band for a complete test.
    #[must_use]
    pub const fn quota(self) -> usize {
        match self {
            Band::Foundation => 10,
            Band::Developing => 8,
            Band::Expanding => 7,
        }
    }

    /// Human-readable tier label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Band::Foundation => "Foundation",
            Band::Developing => "Developing",
            Band::Expanding => "Expanding",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Question type from the fixed enumeration in the bank schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    /// Match an English word to its meaning.
    VocabularyMatching,
    /// Complete a sentence with the fitting word or phrase.
    SentenceCompletion,
    /// Answer a question about a short passage.
    ReadingComprehension,
    /// Identify the grammatically correct form.
    GrammarRecognition,
}

impl QuestionType {
    /// All valid type tokens, in schema order.
    pub const ALL: [&'static str; 4] = [
        "vocabulary_matching",
        "sentence_completion",
        "reading_comprehension",
        "grammar_recognition",
    ];

    /// Parse a type token from the bank file.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "vocabulary_matching" => Some(QuestionType::VocabularyMatching),
            "sentence_completion" => Some(QuestionType::SentenceCompletion),
            "reading_comprehension" => Some(QuestionType::ReadingComprehension),
            "grammar_recognition" => Some(QuestionType::GrammarRecognition),
            _ => None,
        }
    }

    /// The token used in the bank file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionType::VocabularyMatching => "vocabulary_matching",
            QuestionType::SentenceCompletion => "sentence_completion",
            QuestionType::ReadingComprehension => "reading_comprehension",
            QuestionType::GrammarRecognition => "grammar_recognition",
        }
    }
}

/// Question lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Eligible for inclusion in a generated test.
    Active,
    /// Removed from rotation.
    Retired,
    /// Not yet finalized by the authors.
    Draft,
}

impl Status {
    /// All valid status tokens.
    pub const ALL: [&'static str; 3] = ["active", "retired", "draft"];

    /// Parse a status token from the bank file.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "active" => Some(Status::Active),
            "retired" => Some(Status::Retired),
            "draft" => Some(Status::Draft),
            _ => None,
        }
    }
}

/// Anchor designation for difficulty calibration.
///
/// At most one of each kind is expected among active questions; absence
/// is the norm and is modelled as `None` on the question itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The designated easy reference question.
    Easy,
    /// The designated hard reference question.
    Hard,
}

impl Anchor {
    /// All valid anchor tokens.
    pub const ALL: [&'static str; 2] = ["easy", "hard"];

    /// Parse an anchor token from the bank file.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "easy" => Some(Anchor::Easy),
            "hard" => Some(Anchor::Hard),
            _ => None,
        }
    }
}
