use serde_derive::Serialize;

use crate::models::application::RecognizerOptions;

const CONVERSATION_ITEM_ID: &str = "1";
const PARTICIPANT_ID: &str = "1";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeConversationRequest {
    pub analysis_input: AnalysisInput,
    pub parameters: AnalysisParameters,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub conversation_item: ConversationItem,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationItem {
    pub text: String,
    pub id: String,
    pub participant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParameters {
    pub project_name: String,
    pub deployment_name: String,
    pub string_index_type: StringIndexType,
}

/// Unit in which the backend reports entity offsets and lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StringIndexType {
    Utf16CodeUnit,
}

impl AnalyzeConversationRequest {
    pub fn new(utterance: &str, options: &RecognizerOptions) -> Self {
        Self {
            analysis_input: AnalysisInput {
                conversation_item: ConversationItem {
                    text: utterance.to_string(),
                    id: CONVERSATION_ITEM_ID.to_string(),
                    participant_id: PARTICIPANT_ID.to_string(),
                    language: options.language.clone(),
                },
            },
            parameters: AnalysisParameters {
                project_name: options.application.project_name.clone(),
                deployment_name: options.application.deployment_name.clone(),
                string_index_type: StringIndexType::Utf16CodeUnit,
            },
            kind: "Conversation".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::application::OrchestrationApplication;

    #[test]
    fn test_serialize_request() {
        // Given
        let application = OrchestrationApplication::new(
            "FlightBooking",
            "production",
            "0e8b4f3a-2c1d-4e5f-8a9b-1c2d3e4f5a6b",
            "https://contoso.cognitiveservices.azure.com",
        )
        .unwrap();
        let options = RecognizerOptions::new(application);

        // When
        let request = AnalyzeConversationRequest::new("book a flight to Berlin", &options);
        let serialized = serde_json::to_value(&request).unwrap();

        // Then
        let expected = json!({
            "analysisInput": {
                "conversationItem": {
                    "text": "book a flight to Berlin",
                    "id": "1",
                    "participantId": "1",
                    "language": "en"
                }
            },
            "parameters": {
                "projectName": "FlightBooking",
                "deploymentName": "production",
                "stringIndexType": "Utf16CodeUnit"
            },
            "kind": "Conversation"
        });
        assert_eq!(expected, serialized);
    }
}
