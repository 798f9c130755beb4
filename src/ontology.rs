use std::collections::BTreeMap;

use indexmap::IndexMap;
use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{substring_with_utf16_span, EntityCategory, IntentName};

/// Intent returned by `top_intent_and_score` when no intent scores strictly above zero.
pub const NONE_INTENT: &str = "None";

pub const PROJECT_KIND_PROPERTY: &str = "projectKind";
pub const TOP_INTENT_PROPERTY: &str = "topIntent";

/// Canonical recognition result built from a single analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalResult {
    pub text: String,
    pub altered_text: String,
    /// Intents in the order the backend listed them.
    pub intents: IndexMap<IntentName, IntentScore>,
    pub entities: Vec<EntityRecord>,
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntentScore {
    pub score: f32,
}

/// An extracted entity, or a follow-up prompt when coming from a question answering project.
///
/// `offset` and `length` are expressed in UTF-16 code units. Source fields that have no
/// dedicated member are kept in `extra` under their original names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    #[serde(default)]
    pub category: EntityCategory,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub confidence_score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qna_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EntityRecord {
    pub fn is_prompt(&self) -> bool {
        self.display_order.map(|order| order >= 0).unwrap_or(false)
    }

    /// Text of `source` covered by this entity span.
    pub fn covered_text(&self, source: &str) -> Option<String> {
        substring_with_utf16_span(source, self.offset, self.length)
    }
}

impl CanonicalResult {
    /// Returns the intent with the strictly greatest score.
    ///
    /// The running maximum starts at zero with the `"None"` sentinel, so intents scored zero or
    /// below never win and ties keep the first intent seen in source order.
    pub fn top_intent_and_score(&self) -> (&str, f32) {
        let mut top_intent: &str = NONE_INTENT;
        let mut max_score = 0.0;
        for (intent_name, intent_score) in self.intents.iter() {
            if intent_score.score > max_score {
                top_intent = intent_name.as_str();
                max_score = intent_score.score;
            }
        }
        (top_intent, max_score)
    }

    pub fn ranked_intents(&self) -> Vec<(&str, f32)> {
        self.intents
            .iter()
            .map(|(name, intent_score)| (&**name, intent_score.score))
            .sorted_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(::std::cmp::Ordering::Equal)
            })
            .collect()
    }

    pub fn entities_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a EntityRecord> + 'a {
        self.entities
            .iter()
            .filter(move |entity| entity.category == category)
    }

    pub fn first_entity(&self, category: &str) -> Option<&EntityRecord> {
        self.entities
            .iter()
            .find(|entity| entity.category == category)
    }

    pub fn first_entity_text(&self, category: &str) -> Option<&str> {
        self.first_entity(category).map(|entity| &*entity.text)
    }

    pub fn prompts(&self) -> Vec<&EntityRecord> {
        self.entities
            .iter()
            .filter(|entity| entity.is_prompt())
            .collect()
    }

    pub fn prompt_texts(&self) -> Vec<&str> {
        self.prompts()
            .into_iter()
            .filter_map(|prompt| prompt.display_text.as_ref().map(|text| &**text))
            .collect()
    }

    pub fn project_kind(&self) -> Option<&str> {
        self.properties
            .get(PROJECT_KIND_PROPERTY)
            .map(|kind| &**kind)
    }
}
