use super::google_api;
use super::provider_error::ProviderError;
use super::translation_repository::TranslationRepository;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Google Cloud Translation v2 (REST, API key) implementation
pub struct GoogleTranslationRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: Vec<&'a str>,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

impl GoogleTranslationRepository {
    pub fn new(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslationRepository {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::NotConfigured("GOOGLE_API_KEY is not set".to_string())
        })?;

        let url = format!("{}/language/translate/v2", self.base_url);
        let body = TranslateRequest {
            q: vec![text],
            source: source.regional_code(),
            target: target.regional_code(),
            format: "text",
        };

        tracing::debug!(
            target_language = %target,
            text_length = text.len(),
            "Calling Google Translate API"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(google_api::classify_error("Google Translate", status, &body));
        }

        let payload: TranslateResponse = response.json().await.map_err(|e| {
            ProviderError::Upstream(format!("Failed to parse Google Translate response: {}", e))
        })?;

        payload
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                ProviderError::Upstream("Google Translate returned no translations".to_string())
            })
    }
}
