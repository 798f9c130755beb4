//! Normalization of orchestration analysis responses into a [`CanonicalResult`].
//!
//! The response is deserialized into typed models first, then the entry routed to by the
//! orchestration top intent is dispatched once on its `targetProjectKind` and handed to the
//! matching project normalizer.

pub mod conversation;
pub mod errors;
pub mod question_answering;

use std::collections::BTreeMap;

use indexmap::IndexMap;
use log::{debug, log_enabled, Level};
use serde::Deserialize;
use serde_json::Value;

pub use self::errors::{NormalizationError, NormalizationErrorKind};
use crate::models::{
    AnalyzeConversationResponse, ConversationTargetResult, QuestionAnsweringTargetResult,
    RawTargetIntentResult, TargetIntentResult, CONVERSATION_PROJECT_KIND,
    QUESTION_ANSWERING_PROJECT_KIND,
};
use crate::ontology::CanonicalResult;

pub type NormalizationResult<T> = ::std::result::Result<T, NormalizationError>;

/// Builds the canonical result of `utterance` from a raw analysis response.
///
/// Either a complete result is returned or an error, never partial data.
pub fn normalize(raw_response: &Value, utterance: &str) -> NormalizationResult<CanonicalResult> {
    let response = AnalyzeConversationResponse::deserialize(raw_response)
        .map_err(|e| NormalizationError::malformed(format!("invalid response: {}", e)))?;
    let task_result = response.result;
    let prediction = task_result.prediction;
    if prediction.top_intent.is_empty() {
        return Err(NormalizationError::malformed("empty top intent"));
    }

    let raw_target = prediction
        .intents
        .get(&prediction.top_intent)
        .ok_or_else(|| {
            NormalizationError::malformed(format!(
                "no intent result for top intent '{}'",
                prediction.top_intent
            ))
        })?;
    let target_result = TargetIntentResult::from_raw(raw_target)?;

    let result = match target_result {
        TargetIntentResult::Conversation(conversation_result) => conversation::normalize(
            conversation_result,
            utterance,
            task_result.query,
        )?,
        TargetIntentResult::QuestionAnswering(qa_result) => question_answering::normalize(
            qa_result,
            task_result.query,
            prediction.top_intent,
            prediction.project_kind,
        ),
    };

    if log_enabled!(Level::Debug) {
        if let Ok(serialized) = serde_json::to_string(&result) {
            debug!("Normalized analysis response into {}", serialized);
        }
    }
    Ok(result)
}

/// Same as [`normalize`] for a response that has not been parsed yet.
pub fn normalize_str(raw_json: &str, utterance: &str) -> NormalizationResult<CanonicalResult> {
    let raw_response: Value = serde_json::from_str(raw_json)
        .map_err(|e| NormalizationError::malformed(format!("invalid json: {}", e)))?;
    normalize(&raw_response, utterance)
}

impl TargetIntentResult {
    pub fn from_raw(raw_target: &Value) -> NormalizationResult<Self> {
        let raw = RawTargetIntentResult::deserialize(raw_target).map_err(|e| {
            NormalizationError::malformed(format!("invalid target intent result: {}", e))
        })?;
        match &*raw.target_project_kind {
            CONVERSATION_PROJECT_KIND => ConversationTargetResult::deserialize(&raw.result)
                .map(TargetIntentResult::Conversation)
                .map_err(|e| {
                    NormalizationError::malformed(format!("invalid conversation result: {}", e))
                }),
            QUESTION_ANSWERING_PROJECT_KIND => {
                QuestionAnsweringTargetResult::deserialize(&raw.result)
                    .map(TargetIntentResult::QuestionAnswering)
                    .map_err(|e| {
                        NormalizationError::malformed(format!(
                            "invalid question answering result: {}",
                            e
                        ))
                    })
            }
            other => Err(NormalizationError::unknown_project_kind(other)),
        }
    }
}

pub(crate) fn new_result(text: String, altered_text: String) -> CanonicalResult {
    CanonicalResult {
        text,
        altered_text,
        intents: IndexMap::new(),
        entities: vec![],
        properties: BTreeMap::new(),
    }
}
