use super::provider_error::ProviderError;
use super::translation_repository::TranslationRepository;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

/// Notice MyMemory puts in place of a translation once the daily quota is gone
const QUOTA_NOTICE: &str = "YOU USED ALL AVAILABLE FREE TRANSLATIONS";

/// MyMemory REST implementation of the translation repository
pub struct MyMemoryTranslationRepository {
    client: reqwest::Client,
    base_url: String,
    contact_email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: Option<MyMemoryData>,
    #[serde(default)]
    response_status: serde_json::Value,
    #[serde(default)]
    response_details: serde_json::Value,
    #[serde(default)]
    quota_finished: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: Option<String>,
}

impl MyMemoryResponse {
    /// `responseStatus` is a number on success but sometimes a string on errors
    fn status(&self) -> Option<u64> {
        self.response_status
            .as_u64()
            .or_else(|| self.response_status.as_str()?.parse().ok())
    }

    fn details(&self) -> String {
        match &self.response_details {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    fn translated_text(&self) -> Option<&str> {
        self.response_data.as_ref()?.translated_text.as_deref()
    }

    fn quota_exhausted(&self) -> bool {
        self.quota_finished == Some(true)
            || self.status() == Some(429)
            || self.details().to_uppercase().contains(QUOTA_NOTICE)
            || self
                .translated_text()
                .is_some_and(|t| t.to_uppercase().contains(QUOTA_NOTICE))
    }
}

impl MyMemoryTranslationRepository {
    pub fn new(client: reqwest::Client, base_url: String, contact_email: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            contact_email,
        }
    }

    fn interpret(response: MyMemoryResponse) -> Result<String, ProviderError> {
        if response.quota_exhausted() {
            return Err(ProviderError::RateLimited(
                "MyMemory daily translation quota exhausted".to_string(),
            ));
        }

        if response.status() != Some(200) {
            return Err(ProviderError::Upstream(format!(
                "MyMemory responded with status {}: {}",
                response.response_status,
                response.details()
            )));
        }

        response
            .translated_text()
            .map(decode_entities)
            .ok_or_else(|| {
                ProviderError::Upstream("MyMemory response is missing responseData".to_string())
            })
    }
}

#[async_trait]
impl TranslationRepository for MyMemoryTranslationRepository {
    fn name(&self) -> &'static str {
        "mymemory"
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, ProviderError> {
        let langpair = format!("{}|{}", source.regional_code(), target.regional_code());
        let url = format!("{}/get", self.base_url);

        let mut query = vec![("q", text.to_string()), ("langpair", langpair.clone())];
        if let Some(email) = &self.contact_email {
            query.push(("de", email.clone()));
        }

        tracing::debug!(
            langpair = %langpair,
            text_length = text.len(),
            "Calling MyMemory translation API"
        );

        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited(
                "MyMemory rate limit reached".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status("MyMemory", status, &body));
        }

        let payload: MyMemoryResponse = response.json().await.map_err(|e| {
            ProviderError::Upstream(format!("Failed to parse MyMemory response: {}", e))
        })?;

        Self::interpret(payload)
    }
}

/// MyMemory returns HTML-escaped text for some characters
fn decode_entities(text: &str) -> String {
    text.replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
