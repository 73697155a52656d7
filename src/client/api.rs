use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::StatusCode;

use crate::domain::language::LanguageCode;
use crate::domain::sentence::SentenceResponse;
use crate::domain::speech::{SpeechRequest, SpeechResult};
use crate::domain::translation::{TranslationRequest, TranslationResponse};
use crate::error::ErrorResponse;

/// Failure of one API call, classified by the server's stable error code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Map an error body from the backend onto a kind
    pub fn from_body(status: StatusCode, body: ErrorResponse) -> Self {
        let message = body.message;
        match body.error.as_str() {
            "VALIDATION_ERROR" => ApiError::Validation(message),
            "UNSUPPORTED_LANGUAGE" => ApiError::UnsupportedLanguage(message),
            "RATE_LIMIT_EXCEEDED" => ApiError::RateLimited(message),
            "CONFIGURATION_ERROR" => ApiError::Configuration(message),
            "UPSTREAM_ERROR" => ApiError::Upstream(message),
            _ if status == StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(message),
            _ if status.is_client_error() => ApiError::Validation(message),
            _ => ApiError::Server(message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Playable audio for a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioRef {
    /// Decoded MP3 bytes
    Inline(Vec<u8>),
    /// Absolute URL of a stored MP3
    Url(String),
}

/// Backend operations the orchestrator depends on
#[async_trait]
pub trait LearningApi: Send + Sync {
    async fn random_sentence(&self) -> Result<String, ApiError>;

    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, ApiError>;

    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<AudioRef, ApiError>;
}

/// `LearningApi` over HTTP against a running backend
pub struct HttpLearningApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLearningApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()));
        }

        let raw = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(body) => Err(ApiError::from_body(status, body)),
            Err(_) if status == StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimited(raw)),
            Err(_) => Err(ApiError::Server(format!("{}: {}", status, raw))),
        }
    }
}

#[async_trait]
impl LearningApi for HttpLearningApi {
    async fn random_sentence(&self) -> Result<String, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/random-sentence", self.base_url))
            .send()
            .await?;

        let body: SentenceResponse = Self::parse(response).await?;
        if body.sentence.trim().is_empty() {
            return Err(ApiError::InvalidResponse("empty sentence".to_string()));
        }
        Ok(body.sentence)
    }

    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/translate", self.base_url))
            .json(&TranslationRequest {
                text: text.to_string(),
                target_language: target.as_str().to_string(),
            })
            .send()
            .await?;

        let body: TranslationResponse = Self::parse(response).await?;
        if body.translation.trim().is_empty() {
            return Err(ApiError::InvalidResponse("empty translation".to_string()));
        }
        Ok(body.translation)
    }

    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<AudioRef, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/text-to-speech", self.base_url))
            .json(&SpeechRequest {
                text: text.to_string(),
                language_code: language.as_str().to_string(),
            })
            .send()
            .await?;

        match Self::parse(response).await? {
            SpeechResult::Inline { audio_content } => STANDARD
                .decode(audio_content)
                .map(AudioRef::Inline)
                .map_err(|e| ApiError::InvalidResponse(format!("invalid base64 audio: {}", e))),
            SpeechResult::Stored { audio_url } if audio_url.starts_with('/') => {
                Ok(AudioRef::Url(format!("{}{}", self.base_url, audio_url)))
            }
            SpeechResult::Stored { audio_url } => Ok(AudioRef::Url(audio_url)),
        }
    }
}
