use log::trace;

use crate::models::{AnswerPrompt, QuestionAnsweringTargetResult, QUESTION_ANSWERING_PROJECT_KIND};
use crate::ontology::{
    CanonicalResult, EntityRecord, IntentScore, PROJECT_KIND_PROPERTY, TOP_INTENT_PROPERTY,
};
use crate::utils::IntentName;

use super::new_result;

/// Text of the result when the knowledge base returned no answer.
pub const NO_ANSWER_TEXT: &str = "NA";

/// Only the first ranked answer is used. Its text replaces the utterance since it is shown
/// as is to the user, and its follow-up prompts become entities.
pub fn normalize(
    qa_result: QuestionAnsweringTargetResult,
    query: String,
    top_intent: IntentName,
    orchestration_project_kind: Option<String>,
) -> CanonicalResult {
    let mut answers = qa_result.answers.into_iter();
    let mut result = match answers.next() {
        Some(answer) => {
            trace!(
                "Selected answer {:?} '{}' (confidence: {}, source: {:?})",
                answer.id,
                answer.answer,
                answer.confidence_score,
                answer.source
            );
            let mut result = new_result(answer.answer, query);
            result.intents.insert(
                top_intent.clone(),
                IntentScore {
                    score: answer.confidence_score,
                },
            );
            result.entities = answer
                .dialog
                .map(|dialog| {
                    dialog
                        .prompts
                        .into_iter()
                        .map(convert_to_entity_record)
                        .collect()
                })
                .unwrap_or_else(|| vec![]);
            result
        }
        None => {
            trace!("No answer returned for top intent '{}'", top_intent);
            let mut result = new_result(NO_ANSWER_TEXT.to_string(), query);
            result
                .intents
                .insert(top_intent.clone(), IntentScore::default());
            result
        }
    };

    result.properties.insert(
        PROJECT_KIND_PROPERTY.to_string(),
        orchestration_project_kind
            .unwrap_or_else(|| QUESTION_ANSWERING_PROJECT_KIND.to_string()),
    );
    result
        .properties
        .insert(TOP_INTENT_PROPERTY.to_string(), top_intent);
    result
}

fn convert_to_entity_record(prompt: AnswerPrompt) -> EntityRecord {
    EntityRecord {
        display_order: Some(prompt.display_order),
        display_text: Some(prompt.display_text),
        qna_id: prompt.qna_id,
        ..EntityRecord::default()
    }
}
