use std::collections::HashMap;
use std::iter::FromIterator;
use std::sync::Mutex;

use failure::format_err;
use serde_json::{json, Value};

use crate::errors::*;
use crate::models::AnalyzeConversationRequest;
use crate::recognizer::ConversationAnalysisClient;

/// Orchestration response routing `top_intent` to a conversation project returning `prediction`.
pub fn conversation_response(query: &str, top_intent: &str, prediction: Value) -> Value {
    json!({
        "kind": "ConversationResult",
        "result": {
            "query": query,
            "prediction": {
                "topIntent": top_intent,
                "projectKind": "Orchestration",
                "intents": {
                    top_intent: {
                        "confidenceScore": 0.9,
                        "targetProjectKind": "Conversation",
                        "result": {
                            "query": query,
                            "prediction": prediction
                        }
                    }
                }
            }
        }
    })
}

#[derive(Default)]
pub struct MockedAnalysisClient {
    pub mocked_outputs: HashMap<String, Value>,
    received_requests: Mutex<Vec<AnalyzeConversationRequest>>,
}

impl MockedAnalysisClient {
    pub fn received_requests(&self) -> Vec<AnalyzeConversationRequest> {
        self.received_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_else(|_| vec![])
    }
}

impl ConversationAnalysisClient for MockedAnalysisClient {
    fn analyze_conversation(&self, request: &AnalyzeConversationRequest) -> Result<Value> {
        if let Ok(mut requests) = self.received_requests.lock() {
            requests.push(request.clone());
        }
        let utterance = &request.analysis_input.conversation_item.text;
        self.mocked_outputs
            .get(utterance)
            .cloned()
            .ok_or_else(|| format_err!("No mocked response for '{}'", utterance))
    }
}

impl FromIterator<(String, Value)> for MockedAnalysisClient {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            mocked_outputs: HashMap::from_iter(iter),
            received_requests: Mutex::new(vec![]),
        }
    }
}
