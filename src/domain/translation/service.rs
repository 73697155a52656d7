use super::error::TranslationServiceError;
use super::{Translation, TranslationRequest, MAX_TEXT_CHARS};
use crate::domain::language::{LanguageCode, SOURCE_LANGUAGE};
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranslationService {
    repository: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(repository: Arc<dyn TranslationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate English text into the requested target language
    ///
    /// This operation:
    /// - Validates text and target language without touching the network
    /// - Calls the configured translation provider
    /// - Normalizes the provider outcome into a `Translation`
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Translation, TranslationServiceError>;

    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Translation, TranslationServiceError> {
        let (text, target) = validate(&request)?;

        tracing::info!(
            provider = self.repository.name(),
            target_language = %target,
            text_length = text.chars().count(),
            "Translation request"
        );

        let start_time = std::time::Instant::now();
        let translated = self
            .repository
            .translate(text, SOURCE_LANGUAGE, target)
            .await
            .map_err(|e| {
                tracing::warn!(
                    provider = self.repository.name(),
                    target_language = %target,
                    error = %e,
                    "Translation provider failed"
                );
                TranslationServiceError::from(e)
            })?;

        let translated = translated.trim();
        if translated.is_empty() {
            return Err(TranslationServiceError::Upstream(
                "Translation provider returned an empty translation".to_string(),
            ));
        }

        tracing::info!(
            provider = self.repository.name(),
            target_language = %target,
            latency_ms = start_time.elapsed().as_millis(),
            "Translation completed"
        );

        Ok(Translation {
            translated_text: translated.to_string(),
            source: SOURCE_LANGUAGE,
            target,
        })
    }

    fn provider_name(&self) -> &'static str {
        self.repository.name()
    }
}

fn validate(request: &TranslationRequest) -> Result<(&str, LanguageCode), TranslationServiceError> {
    let text = request.text.trim();
    let target = request.target_language.trim();

    if text.is_empty() {
        return Err(TranslationServiceError::Invalid("Text is required".to_string()));
    }
    if target.is_empty() {
        return Err(TranslationServiceError::Invalid(
            "Target language is required".to_string(),
        ));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(TranslationServiceError::Invalid(format!(
            "Text must be at most {} characters",
            MAX_TEXT_CHARS
        )));
    }

    let language = target
        .parse::<LanguageCode>()
        .ok()
        .filter(LanguageCode::is_target)
        .ok_or_else(|| {
            TranslationServiceError::UnsupportedLanguage(format!(
                "Unsupported target language: {}",
                target
            ))
        })?;

    Ok((text, language))
}
