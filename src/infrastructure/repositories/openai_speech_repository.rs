use super::provider_error::ProviderError;
use super::speech_repository::SpeechRepository;
use super::text_batches::split_into_batches;
use crate::domain::language::LanguageCode;
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{CreateSpeechRequest, SpeechModel, Voice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI has a limit of 4096 characters per request
const MAX_BATCH_SIZE: usize = 4096;

/// OpenAI TTS implementation of the speech repository.
///
/// OpenAI voices are multilingual, so one configured voice serves every language.
pub struct OpenAiSpeechRepository {
    client: Option<Arc<Client<OpenAIConfig>>>,
    model: String,
    voice: String,
}

impl OpenAiSpeechRepository {
    /// `client` is `None` when no API key is configured
    pub fn new(client: Option<Arc<Client<OpenAIConfig>>>, model: String, voice: String) -> Self {
        Self {
            client,
            model,
            voice,
        }
    }

    fn speech_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    fn speech_voice(&self) -> Voice {
        match self.voice.to_lowercase().as_str() {
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Alloy,
        }
    }

    fn classify(err: OpenAIError) -> ProviderError {
        match err {
            OpenAIError::ApiError(api) => {
                let code = api.code.as_deref().unwrap_or_default();
                match code {
                    "rate_limit_exceeded" | "insufficient_quota" => {
                        ProviderError::RateLimited(api.message)
                    }
                    "invalid_api_key" => ProviderError::NotConfigured(api.message),
                    _ => ProviderError::Upstream(format!("OpenAI TTS error: {}", api.message)),
                }
            }
            other => ProviderError::Upstream(format!("OpenAI TTS error: {}", other)),
        }
    }

    async fn call_openai(
        &self,
        client: &Client<OpenAIConfig>,
        text: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let request = CreateSpeechRequest {
            model: self.speech_model(),
            input: text.to_string(),
            voice: self.speech_voice(),
            response_format: None,
            speed: None,
        };

        let response = client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            Self::classify(e)
        })?;

        Ok(response.bytes.to_vec())
    }
}

#[async_trait]
impl SpeechRepository for OpenAiSpeechRepository {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, ProviderError> {
        let client = self.client.as_deref().ok_or_else(|| {
            ProviderError::NotConfigured("OPENAI_API_KEY is not set".to_string())
        })?;

        let start_time = std::time::Instant::now();
        let batches = split_into_batches(text, MAX_BATCH_SIZE);

        let mut merged_audio = Vec::new();
        for batch in &batches {
            merged_audio.extend(self.call_openai(client, batch).await?);
        }

        tracing::info!(
            provider = "openai",
            model = %self.model,
            voice = %self.voice,
            language = %language,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "Speech synthesis completed"
        );

        Ok(merged_audio)
    }
}
