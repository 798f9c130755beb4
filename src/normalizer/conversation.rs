use crate::models::{ConversationEntity, ConversationTargetResult};
use crate::ontology::{
    CanonicalResult, EntityRecord, IntentScore, PROJECT_KIND_PROPERTY, TOP_INTENT_PROPERTY,
};

use super::{new_result, NormalizationError, NormalizationResult};

pub fn normalize(
    conversation_result: ConversationTargetResult,
    utterance: &str,
    query: String,
) -> NormalizationResult<CanonicalResult> {
    let prediction = conversation_result.prediction;
    let mut result = new_result(utterance.to_string(), query);

    // Duplicated categories: the last one wins
    for intent in prediction.intents.into_iter() {
        if intent.category.is_empty() {
            return Err(NormalizationError::malformed("empty conversation intent category"));
        }
        result.intents.insert(
            intent.category,
            IntentScore {
                score: intent.confidence_score,
            },
        );
    }
    result.entities = prediction
        .entities
        .into_iter()
        .map(convert_to_entity_record)
        .collect();

    result
        .properties
        .insert(PROJECT_KIND_PROPERTY.to_string(), prediction.project_kind);
    if let Some(top_intent) = prediction.top_intent {
        result
            .properties
            .insert(TOP_INTENT_PROPERTY.to_string(), top_intent);
    }
    Ok(result)
}

fn convert_to_entity_record(entity: ConversationEntity) -> EntityRecord {
    EntityRecord {
        category: entity.category,
        text: entity.text,
        offset: entity.offset,
        length: entity.length,
        confidence_score: entity.confidence_score,
        display_order: None,
        display_text: None,
        qna_id: None,
        extra: entity.extra,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{ConversationIntent, ConversationPrediction};

    fn conversation_result(
        intents: Vec<ConversationIntent>,
        entities: Vec<ConversationEntity>,
    ) -> ConversationTargetResult {
        ConversationTargetResult {
            prediction: ConversationPrediction {
                top_intent: Some("BookFlight".to_string()),
                project_kind: "Conversation".to_string(),
                intents,
                entities,
            },
        }
    }

    fn intent(category: &str, confidence_score: f32) -> ConversationIntent {
        ConversationIntent {
            category: category.to_string(),
            confidence_score,
        }
    }

    #[test]
    fn test_intents_contain_exactly_source_categories() {
        // Given
        let conversation_result = conversation_result(
            vec![
                intent("BookFlight", 0.8),
                intent("Cancel", 0.15),
                intent("GetWeather", 0.05),
            ],
            vec![],
        );

        // When
        let result =
            normalize(conversation_result, "book a flight", "book a flight".to_string()).unwrap();

        // Then
        let intents: Vec<(&str, f32)> = result
            .intents
            .iter()
            .map(|(name, score)| (&**name, score.score))
            .collect();
        assert_eq!(
            vec![("BookFlight", 0.8), ("Cancel", 0.15), ("GetWeather", 0.05)],
            intents
        );
    }

    #[test]
    fn test_duplicated_intent_categories_keep_last_score() {
        // Given
        let conversation_result = conversation_result(
            vec![intent("BookFlight", 0.8), intent("BookFlight", 0.3)],
            vec![],
        );

        // When
        let result = normalize(conversation_result, "fly", "fly".to_string()).unwrap();

        // Then
        assert_eq!(1, result.intents.len());
        assert_eq!(0.3, result.intents["BookFlight"].score);
    }

    #[test]
    fn test_entities_are_passed_through_in_source_order() {
        // Given
        let entities: Vec<ConversationEntity> = serde_json::from_value(json!([
            {"category": "toCity", "text": "Berlin", "offset": 17, "length": 6, "confidenceScore": 0.9},
            {"category": "fromCity", "text": "Paris", "offset": 29, "length": 5, "confidenceScore": 0.8,
             "extraInformation": [{"extraInformationKind": "EntitySubtype", "value": "city"}]},
            {"category": "toCity", "text": "Rome", "offset": 38, "length": 4, "confidenceScore": 0.4}
        ]))
        .unwrap();
        let conversation_result = conversation_result(vec![intent("BookFlight", 0.9)], entities);

        // When
        let result = normalize(
            conversation_result,
            "book a flight to Berlin from Paris via Rome",
            "book a flight to Berlin from Paris via Rome".to_string(),
        )
        .unwrap();

        // Then
        let texts: Vec<&str> = result.entities.iter().map(|e| &*e.text).collect();
        assert_eq!(vec!["Berlin", "Paris", "Rome"], texts);
        assert_eq!(Some("Berlin"), result.first_entity_text("toCity"));
        assert!(result.entities[1].extra.contains_key("extraInformation"));
        assert!(result.prompts().is_empty());
    }

    #[test]
    fn test_properties() {
        // Given
        let conversation_result = conversation_result(vec![intent("BookFlight", 0.9)], vec![]);

        // When
        let result = normalize(conversation_result, "fly", "fly".to_string()).unwrap();

        // Then
        assert_eq!(Some(&"Conversation".to_string()), result.properties.get("projectKind"));
        assert_eq!(Some(&"BookFlight".to_string()), result.properties.get("topIntent"));
        assert_eq!("fly", result.text);
    }

    #[test]
    fn test_intents_keep_source_order_and_ties_favor_first() {
        // Given
        let conversation_result = conversation_result(
            vec![intent("Zeta", 0.5), intent("Alpha", 0.5)],
            vec![],
        );

        // When
        let result = normalize(conversation_result, "hi", "hi".to_string()).unwrap();

        // Then
        assert_eq!(
            vec!["Zeta", "Alpha"],
            result.intents.keys().map(|k| &**k).collect::<Vec<_>>()
        );
        assert_eq!(("Zeta", 0.5), result.top_intent_and_score());
    }

    #[test]
    fn test_empty_intent_category_is_malformed() {
        // Given
        let conversation_result = conversation_result(vec![intent("", 0.9)], vec![]);

        // When
        let error = normalize(conversation_result, "hi", "hi".to_string()).unwrap_err();

        // Then
        assert_eq!(
            "Malformed analysis response: empty conversation intent category",
            error.to_string()
        );
    }
}
