pub mod errors;
pub mod models;
pub mod normalizer;
pub mod ontology;
mod recognizer;
pub mod schema;
#[cfg(test)]
mod testutils;
mod utils;

pub use crate::errors::*;
pub use crate::models::*;
pub use crate::normalizer::{
    normalize, normalize_str, NormalizationError, NormalizationErrorKind, NormalizationResult,
};
pub use crate::ontology::{CanonicalResult, EntityRecord, IntentScore, NONE_INTENT};
pub use crate::recognizer::{
    ConversationAnalysisClient, FromRecognizerResult, OrchestrationRecognizer, Recognizer,
    TRACE_LABEL,
};
pub use crate::schema::{
    BookingDetails, Intent, MeetingDetails, OrchestrationSchema, SchemaEntities,
};
pub use crate::utils::{normalize_intent_name, substring_with_utf16_span, EntityCategory, IntentName};
