use std::sync::Arc;

use failure::ResultExt;
use log::{debug, info, log_enabled, Level};
use serde_derive::Serialize;
use serde_json::Value;

use crate::errors::*;
use crate::models::{AnalyzeConversationRequest, RecognizerOptions, RecognizerSettings};
use crate::normalizer::normalize;
use crate::ontology::CanonicalResult;

pub const TRACE_LABEL: &str = "Orchestration Workflow Trace";
const TRACE_TARGET: &str = "orchestration_nlu::trace";

/// Transport to the conversation analysis backend.
///
/// Implementors own authentication, timeouts and retries. A call either yields the JSON
/// document returned by the backend or fails.
pub trait ConversationAnalysisClient: Send + Sync {
    fn analyze_conversation(&self, request: &AnalyzeConversationRequest) -> Result<Value>;
}

/// Typed view that can be built from a canonical result.
pub trait FromRecognizerResult: Sized {
    fn from_recognizer_result(result: &CanonicalResult) -> Result<Self>;
}

impl FromRecognizerResult for CanonicalResult {
    fn from_recognizer_result(result: &CanonicalResult) -> Result<Self> {
        Ok(result.clone())
    }
}

pub trait Recognizer: Send + Sync {
    fn recognize(&self, utterance: &str) -> Result<CanonicalResult>;

    fn recognize_into<T: FromRecognizerResult>(&self, utterance: &str) -> Result<T>
    where
        Self: Sized,
    {
        let result = self.recognize(utterance)?;
        T::from_recognizer_result(&result)
    }
}

pub struct OrchestrationRecognizer {
    options: RecognizerOptions,
    client: Arc<dyn ConversationAnalysisClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizerTrace<'a> {
    response: &'a Value,
    recognizer_result: &'a CanonicalResult,
}

impl OrchestrationRecognizer {
    pub fn new(options: RecognizerOptions, client: Arc<dyn ConversationAnalysisClient>) -> Self {
        Self { options, client }
    }

    /// Builds a recognizer from the settings file entries, failing when one of them is missing.
    pub fn from_settings(
        settings: &RecognizerSettings,
        client: Arc<dyn ConversationAnalysisClient>,
    ) -> Result<Self> {
        let application = settings.to_application()?;
        info!(
            "Orchestration recognizer configured for project '{}' (deployment '{}')",
            application.project_name, application.deployment_name
        );
        Ok(Self::new(RecognizerOptions::new(application), client))
    }

    pub fn options(&self) -> &RecognizerOptions {
        &self.options
    }

    fn trace(&self, response: &Value, result: &CanonicalResult) {
        if !log_enabled!(target: TRACE_TARGET, Level::Debug) {
            return;
        }
        let trace = RecognizerTrace {
            response,
            recognizer_result: result,
        };
        if let Ok(serialized) = serde_json::to_string(&trace) {
            debug!(target: TRACE_TARGET, "{}: {}", TRACE_LABEL, serialized);
        }
    }
}

impl Recognizer for OrchestrationRecognizer {
    fn recognize(&self, utterance: &str) -> Result<CanonicalResult> {
        let request = AnalyzeConversationRequest::new(utterance, &self.options);
        let response = self
            .client
            .analyze_conversation(&request)
            .with_context(|_| format!("Could not analyze utterance '{}'", utterance))?;
        let result = normalize(&response, utterance)?;
        self.trace(&response, &result);
        Ok(result)
    }
}
