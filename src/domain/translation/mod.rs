pub mod error;
pub mod service;

use crate::domain::language::LanguageCode;
use serde::{Deserialize, Serialize};

pub use error::TranslationServiceError;
pub use service::{TranslationService, TranslationServiceApi};

/// Longest source text accepted, in characters
pub const MAX_TEXT_CHARS: usize = 5000;

/// Request for POST /api/translate
///
/// Missing fields deserialize to empty strings so they fail validation
/// instead of body parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

/// Normalized translation, independent of the provider that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub translated_text: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
}

/// Response for POST /api/translate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationResponse {
    pub translation: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
}

impl From<Translation> for TranslationResponse {
    fn from(translation: Translation) -> Self {
        Self {
            translation: translation.translated_text,
            from: translation.source,
            to: translation.target,
        }
    }
}
