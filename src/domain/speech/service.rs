use super::error::SpeechServiceError;
use super::{SpeechRequest, SpeechResult, MAX_TEXT_CHARS};
use crate::domain::language::LanguageCode;
use crate::infrastructure::repositories::SpeechRepository;
use crate::infrastructure::storage::AudioStore;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use std::sync::{Arc, LazyLock};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// How synthesized audio reaches the caller
pub enum SpeechDelivery {
    /// Base64 MP3 in the response body
    Inline,
    /// Written to the audio store and returned as a URL
    Stored(Arc<AudioStore>),
}

impl SpeechDelivery {
    pub fn name(&self) -> &'static str {
        match self {
            SpeechDelivery::Inline => "inline",
            SpeechDelivery::Stored(_) => "file",
        }
    }
}

pub struct SpeechService {
    repository: Arc<dyn SpeechRepository>,
    delivery: SpeechDelivery,
}

impl SpeechService {
    pub fn new(repository: Arc<dyn SpeechRepository>, delivery: SpeechDelivery) -> Self {
        Self {
            repository,
            delivery,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize speech for the given text and language
    ///
    /// The provider returns MP3 bytes; delivery decides whether they are
    /// embedded as base64 or stored and linked.
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResult, SpeechServiceError>;

    fn provider_name(&self) -> &'static str;

    fn delivery_name(&self) -> &'static str;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResult, SpeechServiceError> {
        let (text, language) = validate(&request)?;

        tracing::info!(
            provider = self.repository.name(),
            language = %language,
            text_length = text.chars().count(),
            "Speech synthesis request"
        );

        let audio = self.repository.synthesize(&text, language).await.map_err(|e| {
            tracing::warn!(
                provider = self.repository.name(),
                language = %language,
                error = %e,
                "Speech provider failed"
            );
            SpeechServiceError::from(e)
        })?;

        if audio.is_empty() {
            return Err(SpeechServiceError::Upstream(
                "Speech provider returned no audio".to_string(),
            ));
        }

        match &self.delivery {
            SpeechDelivery::Inline => Ok(SpeechResult::Inline {
                audio_content: STANDARD.encode(&audio),
            }),
            SpeechDelivery::Stored(store) => {
                let stored = store.save(&audio).await?;
                Ok(SpeechResult::Stored {
                    audio_url: stored.url,
                })
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        self.repository.name()
    }

    fn delivery_name(&self) -> &'static str {
        self.delivery.name()
    }
}

fn validate(request: &SpeechRequest) -> Result<(String, LanguageCode), SpeechServiceError> {
    let text = normalize_whitespace(&request.text);
    let code = request.language_code.trim();

    if text.is_empty() {
        return Err(SpeechServiceError::Invalid("Text is required".to_string()));
    }
    if code.is_empty() {
        return Err(SpeechServiceError::Invalid(
            "Language code is required".to_string(),
        ));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(SpeechServiceError::Invalid(format!(
            "Text must be at most {} characters",
            MAX_TEXT_CHARS
        )));
    }

    let language = code.parse::<LanguageCode>().map_err(|_| {
        SpeechServiceError::UnsupportedLanguage(format!("Unsupported language: {}", code))
    })?;

    Ok((text, language))
}

fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
