use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use failure::format_err;
use indexmap::IndexMap;
use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::ontology::{CanonicalResult, EntityRecord};
use crate::recognizer::FromRecognizerResult;
use crate::utils::normalize_intent_name;

const FROM_CITY_CATEGORY: &str = "fromCity";
const TO_CITY_CATEGORY: &str = "toCity";
const FLIGHT_DATE_CATEGORY: &str = "flightDate";
const ATTENDANTS_CATEGORY: &str = "Attendants";
const MEETING_DATE_CATEGORY: &str = "Date";
const LOCATION_CATEGORY: &str = "Location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    BookFlight,
    Cancel,
    GetWeather,
    SurfaceQa,
    BookMeeting,
    CancelMeeting,
    UpdateMeeting,
    ViewCalendar,
    RespondMeetingRequest,
    None,
}

impl Intent {
    pub fn identifier(&self) -> &'static str {
        match *self {
            Intent::BookFlight => "BookFlight",
            Intent::Cancel => "Cancel",
            Intent::GetWeather => "GetWeather",
            Intent::SurfaceQa => "Surface_QA",
            Intent::BookMeeting => "BookMeeting",
            Intent::CancelMeeting => "CancelMeeting",
            Intent::UpdateMeeting => "UpdateMeeting",
            Intent::ViewCalendar => "ViewCalendar",
            Intent::RespondMeetingRequest => "RespondMeetingRequest",
            Intent::None => "None",
        }
    }

    pub fn all() -> &'static [Intent] {
        &[
            Intent::BookFlight,
            Intent::Cancel,
            Intent::GetWeather,
            Intent::SurfaceQa,
            Intent::BookMeeting,
            Intent::CancelMeeting,
            Intent::UpdateMeeting,
            Intent::ViewCalendar,
            Intent::RespondMeetingRequest,
            Intent::None,
        ]
    }
}

impl FromStr for Intent {
    type Err = ::failure::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize_intent_name(s);
        Intent::all()
            .iter()
            .find(|intent| intent.identifier() == normalized)
            .cloned()
            .ok_or_else(|| format_err!("Unknown intent: '{}'", s))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Strongly typed view of a recognition result for the flight booking and calendar dialogs.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestrationSchema {
    pub text: String,
    pub altered_text: String,
    pub intents: IndexMap<Intent, f32>,
    pub entities: SchemaEntities,
    pub properties: HashMap<String, String>,
}

impl FromRecognizerResult for OrchestrationSchema {
    fn from_recognizer_result(result: &CanonicalResult) -> Result<Self> {
        let mut intents = IndexMap::with_capacity(result.intents.len());
        for (intent_name, intent_score) in result.intents.iter() {
            match Intent::from_str(intent_name) {
                Ok(intent) => {
                    intents.insert(intent, intent_score.score);
                }
                Err(_) => debug!("Skipping intent '{}' which has no typed counterpart", intent_name),
            }
        }
        Ok(OrchestrationSchema {
            text: result.text.clone(),
            altered_text: result.altered_text.clone(),
            intents,
            entities: SchemaEntities {
                entities: result.entities.clone(),
            },
            properties: result
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        })
    }
}

impl OrchestrationSchema {
    /// Intent with the strictly greatest score, `Intent::None` when no score is above zero.
    /// Ties keep the first intent in recognition order.
    pub fn top_intent(&self) -> (Intent, f32) {
        let mut max_intent = Intent::None;
        let mut max_score = 0.0;
        for (intent, score) in self.intents.iter() {
            if *score > max_score {
                max_intent = *intent;
                max_score = *score;
            }
        }
        (max_intent, max_score)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaEntities {
    pub entities: Vec<EntityRecord>,
}

impl SchemaEntities {
    fn list(&self, category: &str) -> Vec<&EntityRecord> {
        self.entities
            .iter()
            .filter(|entity| entity.category == category)
            .collect()
    }

    fn first_text(&self, category: &str) -> Option<&str> {
        self.entities
            .iter()
            .find(|entity| entity.category == category)
            .map(|entity| &*entity.text)
    }

    pub fn from_city_list(&self) -> Vec<&EntityRecord> {
        self.list(FROM_CITY_CATEGORY)
    }

    pub fn to_city_list(&self) -> Vec<&EntityRecord> {
        self.list(TO_CITY_CATEGORY)
    }

    pub fn flight_date_list(&self) -> Vec<&EntityRecord> {
        self.list(FLIGHT_DATE_CATEGORY)
    }

    pub fn from_city(&self) -> Option<&str> {
        self.first_text(FROM_CITY_CATEGORY)
    }

    pub fn to_city(&self) -> Option<&str> {
        self.first_text(TO_CITY_CATEGORY)
    }

    pub fn flight_date(&self) -> Option<&str> {
        self.first_text(FLIGHT_DATE_CATEGORY)
    }

    pub fn attendant_list(&self) -> Vec<&EntityRecord> {
        self.list(ATTENDANTS_CATEGORY)
    }

    pub fn meeting_date_list(&self) -> Vec<&EntityRecord> {
        self.list(MEETING_DATE_CATEGORY)
    }

    pub fn location_list(&self) -> Vec<&EntityRecord> {
        self.list(LOCATION_CATEGORY)
    }

    pub fn attendant(&self) -> Option<&str> {
        self.first_text(ATTENDANTS_CATEGORY)
    }

    pub fn meeting_date(&self) -> Option<&str> {
        self.first_text(MEETING_DATE_CATEGORY)
    }

    pub fn location(&self) -> Option<&str> {
        self.first_text(LOCATION_CATEGORY)
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
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub destination: Option<String>,
    pub origin: Option<String>,
    pub travel_date: Option<String>,
}

impl BookingDetails {
    pub fn from_entities(entities: &SchemaEntities) -> Self {
        Self {
            destination: entities.to_city().map(|s| s.to_string()),
            origin: entities.from_city().map(|s| s.to_string()),
            travel_date: entities.flight_date().map(|s| s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    pub attendants: Option<String>,
    pub meeting_date: Option<String>,
    pub meeting_location: Option<String>,
}

impl MeetingDetails {
    pub fn from_entities(entities: &SchemaEntities) -> Self {
        Self {
            attendants: entities.attendant().map(|s| s.to_string()),
            meeting_date: entities.meeting_date().map(|s| s.to_string()),
            meeting_location: entities.location().map(|s| s.to_string()),
        }
    }
}
