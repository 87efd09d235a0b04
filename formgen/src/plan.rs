//! Bilingual form copy and the full structure batch.
//!
//! Assembles the ordered item sequence of the placement test: the
//! instruction block and self-assessment gate, then three banded
//! sections separated by page breaks, with a routing question closing
//! section 1. Branching behaviour is attached afterwards by
//! [`crate::branching`], once the server has assigned item ids.

use placement_bank::{Band, Question, QuestionBank};

use crate::error::Result;
use crate::items::{choice_question, graded_question, page_break, text_item};
use crate::wire::Request;

/// Bilingual purpose-and-stakes instruction block shown first.
pub const INSTRUCTIONS_TEXT: &str = "**Objetivo do teste / Test purpose:**\n\n\
    PT: Este teste avalia seu nível atual de leitura em inglês. \
    Ele nos ajudará a indicar materiais de leitura adequados ao seu nível.\n\n\
    EN: This test assesses your current English reading level. \
    It will help us assign reading materials that match your level.\n\n\
    **Nota importante / Important note:**\n\n\
    PT: Este teste NÃO conta como nota. Ele é usado apenas para nos \
    ajudar a escolher os materiais certos para você.\n\n\
    EN: This test does NOT count as a grade. It is only used to help us \
    choose the right materials for you.";

/// Self-assessment gate question asked before any scored content.
pub const GATE_QUESTION: &str = "Como você descreveria sua experiência com o idioma inglês?\n\n\
    (How would you describe your experience with the English language?)";

/// The three self-assessment levels.
pub const GATE_OPTIONS: [&str; 3] = [
    "Nunca estudei inglês e não tenho contato com o idioma. \
     (I have never studied English and I have no contact with the language.)",
    "Estudei inglês no ensino médio (escola pública ou particular), \
     mas não me considero fluente. \
     (I studied English in high school, but I don't consider myself fluent.)",
    "Já fiz curso de inglês ou me considero intermediário/avançado. \
     (I have taken English courses or I consider myself intermediate/advanced.)",
];

/// Worked answering example shown at the top of section 1.
pub const WORKED_EXAMPLE_TEXT: &str =
    "**Antes de começar, veja este exemplo de como responder as questões:**\n\
    **Before you start, look at this example of how to answer the questions:**\n\n\
    ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\
    **Exemplo / Example:**\n\n\
    What does \"university\" mean?\n\n\
    a) Universidade ← ✅ Resposta correta!\n\
    b) Uniforme\n\
    c) Universal\n\
    d) Único\n\n\
    A pergunta \"What does X mean?\" significa \"O que X significa?\"\n\
    Escolha a opção que melhor traduz ou define a palavra em inglês.\n\
    ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Routing question closing section 1; its options carry the branching.
pub const ROUTING_QUESTION: &str = "Selecione a mesma opção que você escolheu na primeira página:\n\n\
    (Select the same option you chose on the first page:)";

/// The three routing choices mirroring the gate levels.
pub const ROUTING_OPTIONS: [&str; 3] = [
    "Nunca estudei inglês (Path A)",
    "Estudei inglês no ensino médio (Path B)",
    "Já fiz curso de inglês (Path C)",
];

/// Section 1 header.
pub const BAND1_HEADER: &str =
    "Parte 1: Vocabulário Básico e Frases / Part 1: Basic Vocabulary and Sentences\n\n\
    Tempo estimado / Estimated time: ~5 minutos / ~5 minutes";

/// Section 2 header.
pub const BAND2_HEADER: &str =
    "Parte 2: Leitura Intermediária / Part 2: Intermediate Reading\n\n\
    Tempo estimado / Estimated time: ~6 minutos / ~6 minutes\n\n\
    PT: Estas questões são mais difíceis. Faça o seu melhor! \
    Não há penalidade para respostas erradas.\n\n\
    EN: These questions are more difficult. Do your best! \
    There is no penalty for wrong answers.";

/// Section 3 header.
pub const BAND3_HEADER: &str =
    "Parte 3: Leitura Avançada / Part 3: Advanced Reading\n\n\
    Tempo estimado / Estimated time: ~7 minutos / ~7 minutes\n\n\
    PT: Estas questões são desafiadoras. Se não tiver certeza, \
    faça sua melhor tentativa.\n\n\
    EN: These questions are challenging. If you are unsure, \
    make your best guess.";

/// The assembled structure batch plus per-band question counts.
#[derive(Debug)]
pub struct StructurePlan {
    /// Create-item requests in final display order.
    pub requests: Vec<Request>,
    /// How many scored questions each band contributed.
    pub band_counts: [usize; 3],
}

impl StructurePlan {
    /// Total number of items in the batch.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.requests.len()
    }
}

/// Assemble the full ordered item batch from the question bank.
///
/// Only active questions count; each band contributes its quota in
/// source order and surplus questions are left out.
///
/// # Errors
///
/// Returns an error if a selected question has no option marked correct.
pub fn build_structure(bank: &QuestionBank) -> Result<StructurePlan> {
    let mut requests = Vec::new();
    let mut band_counts = [0usize; 3];

    requests.push(text_item(INSTRUCTIONS_TEXT, requests.len()));
    requests.push(choice_question(GATE_QUESTION, &GATE_OPTIONS, requests.len()));

    requests.push(page_break(BAND1_HEADER, requests.len()));
    requests.push(text_item(WORKED_EXAMPLE_TEXT, requests.len()));
    band_counts[0] = push_band(&mut requests, bank, Band::Foundation)?;
    requests.push(choice_question(
        ROUTING_QUESTION,
        &ROUTING_OPTIONS,
        requests.len(),
    ));

    requests.push(page_break(BAND2_HEADER, requests.len()));
    band_counts[1] = push_band(&mut requests, bank, Band::Developing)?;

    requests.push(page_break(BAND3_HEADER, requests.len()));
    band_counts[2] = push_band(&mut requests, bank, Band::Expanding)?;

    Ok(StructurePlan {
        requests,
        band_counts,
    })
}

/// Append one band's quota of graded questions to the batch, returning
/// how many were added.
fn push_band(requests: &mut Vec<Request>, bank: &QuestionBank, band: Band) -> Result<usize> {
    let selected: Vec<&Question> = bank
        .active_questions()
        .filter(|q| q.parsed_band() == Some(band))
        .take(band.quota())
        .collect();
    for question in &selected {
        requests.push(graded_question(question, requests.len())?);
    }
    Ok(selected.len())
}

#[cfg(test)]
mod tests {
    use placement_bank::QuestionBank;

    use super::*;
    use crate::wire::Request;

    fn question(id: &str, band: u8, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "band": band,
            "type": "vocabulary_matching",
            "question_text": format!("What does \"{id}\" mean?"),
            "point_value": 1,
            "status": status,
            "options": [
                {"text": "right", "is_correct": true},
                {"text": "wrong1", "is_correct": false},
                {"text": "wrong2", "is_correct": false},
                {"text": "wrong3", "is_correct": false}
            ]
        })
    }

    fn full_bank() -> QuestionBank {
        let mut questions = Vec::new();
        for (band, quota) in [(1u8, 10usize), (2, 8), (3, 7)] {
            for n in 1..=quota {
                questions.push(question(&format!("B{band}_VOCAB_{n:02}"), band, "active"));
            }
        }
        serde_json::from_value(serde_json::json!({"version": "1.0", "questions": questions}))
            .unwrap_or_else(|error| panic!("bank should parse: {error}"))
    }

    fn titles(plan: &StructurePlan) -> Vec<String> {
        plan.requests
            .iter()
            .map(|request| match request {
                Request::CreateItem(create) => create.item.title.clone().unwrap_or_default(),
                other => panic!("structure batch should only create items, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn full_bank_yields_the_thirty_item_sequence() {
        let plan = build_structure(&full_bank())
            .unwrap_or_else(|error| panic!("structure should build: {error}"));
        assert_eq!(plan.item_count(), 30);
        assert_eq!(plan.band_counts, [10, 8, 7]);
        let titles = titles(&plan);
        assert!(titles.get(2).is_some_and(|t| t.starts_with("Parte 1")));
        assert!(titles.get(15).is_some_and(|t| t.starts_with("Parte 2")));
        assert!(titles.get(24).is_some_and(|t| t.starts_with("Parte 3")));
        assert!(
            titles
                .get(14)
                .is_some_and(|t| t.starts_with("Selecione a mesma opção"))
        );
    }

    #[test]
    fn locations_match_the_request_order() {
        let plan = build_structure(&full_bank())
            .unwrap_or_else(|error| panic!("structure should build: {error}"));
        for (position, request) in plan.requests.iter().enumerate() {
            let Request::CreateItem(create) = request else {
                panic!("structure batch should only create items");
            };
            assert_eq!(create.location.index, position);
        }
    }

    #[test]
    fn surplus_and_inactive_questions_are_left_out() {
        let mut questions = Vec::new();
        for n in 1..=12 {
            questions.push(question(&format!("B1_VOCAB_{n:02}"), 1, "active"));
        }
        questions.push(question("B2_VOCAB_01", 2, "retired"));
        questions.push(question("B2_VOCAB_02", 2, "active"));
        let bank: QuestionBank =
            serde_json::from_value(serde_json::json!({"questions": questions}))
                .unwrap_or_else(|error| panic!("bank should parse: {error}"));
        let plan = build_structure(&bank)
            .unwrap_or_else(|error| panic!("structure should build: {error}"));
        assert_eq!(plan.band_counts, [10, 1, 0]);
    }

    #[test]
    fn unanswerable_question_aborts_the_plan() {
        let mut broken = question("B1_VOCAB_01", 1, "active");
        if let Some(options) = broken.get_mut("options") {
            *options = serde_json::json!([
                {"text": "a", "is_correct": false},
                {"text": "b", "is_correct": false}
            ]);
        }
        let bank: QuestionBank =
            serde_json::from_value(serde_json::json!({"questions": [broken]}))
                .unwrap_or_else(|error| panic!("bank should parse: {error}"));
        assert!(build_structure(&bank).is_err());
    }
}
