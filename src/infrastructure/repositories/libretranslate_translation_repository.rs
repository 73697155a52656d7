use super::provider_error::ProviderError;
use super::translation_repository::TranslationRepository;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// LibreTranslate (self-hosted or public instance) implementation
pub struct LibreTranslateRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    translated_text: Option<String>,
    error: Option<String>,
}

impl LibreTranslateRepository {
    pub fn new(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl TranslationRepository for LibreTranslateRepository {
    fn name(&self) -> &'static str {
        "libretranslate"
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/translate", self.base_url);
        // LibreTranslate uses bare ISO codes, including plain "zh"
        let body = LibreTranslateRequest {
            q: text,
            source: source.as_str(),
            target: target.as_str(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        tracing::debug!(
            target_language = %target,
            text_length = text.len(),
            "Calling LibreTranslate API"
        );

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<LibreTranslateResponse>(&raw)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(raw);
            return Err(ProviderError::from_status("LibreTranslate", status, &message));
        }

        let payload: LibreTranslateResponse = response.json().await.map_err(|e| {
            ProviderError::Upstream(format!("Failed to parse LibreTranslate response: {}", e))
        })?;

        match (payload.translated_text, payload.error) {
            (Some(text), _) => Ok(text),
            (None, Some(error)) => Err(ProviderError::Upstream(error)),
            (None, None) => Err(ProviderError::Upstream(
                "LibreTranslate response is missing translatedText".to_string(),
            )),
        }
    }
}
