use super::google_api;
use super::provider_error::ProviderError;
use super::speech_repository::SpeechRepository;
use super::text_batches::split_into_batches;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Google caps input at 5000 bytes; 1500 characters stays under it for 3-byte scripts
const MAX_BATCH_SIZE: usize = 1500;

/// Google Cloud Text-to-Speech (REST, API key) implementation
pub struct GoogleSpeechRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    ssml_gender: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

impl GoogleSpeechRepository {
    pub fn new(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn call_google(
        &self,
        api_key: &str,
        text: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}/v1/text:synthesize", self.base_url);
        let body = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: language.tts_locale(),
                ssml_gender: "NEUTRAL",
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };

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
            return Err(google_api::classify_error(
                "Google Text-to-Speech",
                status,
                &body,
            ));
        }

        let payload: SynthesizeResponse = response.json().await.map_err(|e| {
            ProviderError::Upstream(format!("Failed to parse Google TTS response: {}", e))
        })?;

        STANDARD.decode(payload.audio_content).map_err(|e| {
            ProviderError::Upstream(format!("Google TTS returned invalid base64 audio: {}", e))
        })
    }
}

#[async_trait]
impl SpeechRepository for GoogleSpeechRepository {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::NotConfigured("GOOGLE_API_KEY is not set".to_string())
        })?;

        let start_time = std::time::Instant::now();
        let batches = split_into_batches(text, MAX_BATCH_SIZE);

        let mut merged_audio = Vec::new();
        for batch in &batches {
            merged_audio.extend(self.call_google(api_key, batch, language).await?);
        }

        tracing::info!(
            provider = "google",
            language = %language,
            voice_locale = language.tts_locale(),
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "Speech synthesis completed"
        );

        Ok(merged_audio)
    }
}
