pub mod error;
pub mod service;

use serde::{Deserialize, Serialize};

pub use error::SpeechServiceError;
pub use service::{SpeechDelivery, SpeechService, SpeechServiceApi};

/// Longest text accepted for synthesis, in characters
pub const MAX_TEXT_CHARS: usize = 5000;

/// Request for POST /api/text-to-speech
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeechRequest {
    pub text: String,
    pub language_code: String,
}

/// Response for POST /api/text-to-speech: base64 audio or a link to a stored file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SpeechResult {
    Inline {
        #[serde(rename = "audioContent")]
        audio_content: String,
    },
    Stored {
        #[serde(rename = "audioUrl")]
        audio_url: String,
    },
}
