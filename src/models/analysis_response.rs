use std::collections::HashMap;

use serde_derive::Deserialize;
use serde_json::{Map, Value};

use crate::utils::{EntityCategory, IntentName};

pub const CONVERSATION_PROJECT_KIND: &str = "Conversation";
pub const QUESTION_ANSWERING_PROJECT_KIND: &str = "QuestionAnswering";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeConversationResponse {
    pub result: OrchestrationTaskResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrationTaskResult {
    pub query: String,
    pub prediction: OrchestrationPrediction,
}

/// Outer prediction of the orchestration project. Intent results are kept as raw JSON so that
/// only the one routed to by `top_intent` gets validated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrationPrediction {
    pub top_intent: IntentName,
    #[serde(default)]
    pub project_kind: Option<String>,
    pub intents: HashMap<IntentName, Value>,
}

/// Intent entry before dispatching on `target_project_kind`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTargetIntentResult {
    pub target_project_kind: String,
    pub result: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TargetIntentResult {
    Conversation(ConversationTargetResult),
    QuestionAnswering(QuestionAnsweringTargetResult),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTargetResult {
    pub prediction: ConversationPrediction,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPrediction {
    #[serde(default)]
    pub top_intent: Option<IntentName>,
    pub project_kind: String,
    pub intents: Vec<ConversationIntent>,
    pub entities: Vec<ConversationEntity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationIntent {
    pub category: IntentName,
    pub confidence_score: f32,
}

/// Entities carry no fixed schema beyond their category: dialogs look them up by category and
/// read whichever fields they need.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntity {
    pub category: EntityCategory,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub confidence_score: f32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnsweringTargetResult {
    pub answers: Vec<KnowledgeBaseAnswer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseAnswer {
    pub answer: String,
    pub confidence_score: f32,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub dialog: Option<AnswerDialog>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDialog {
    #[serde(default)]
    pub prompts: Vec<AnswerPrompt>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPrompt {
    pub display_order: i32,
    #[serde(default)]
    pub qna_id: Option<i64>,
    pub display_text: String,
}
