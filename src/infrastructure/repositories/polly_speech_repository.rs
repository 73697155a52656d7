use super::provider_error::ProviderError;
use super::speech_repository::SpeechRepository;
use super::text_batches::split_into_batches;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;
use aws_sdk_polly::{
    error::{ProvideErrorMetadata, SdkError},
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

/// AWS Polly implementation of the speech repository
pub struct PollySpeechRepository {
    polly_client: Arc<PollyClient>,
}

impl PollySpeechRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Fixed Polly voice per language. Tatyana only ships with the standard engine.
    fn voice_for_language(language: LanguageCode) -> Option<(&'static str, Engine)> {
        let voice = match language {
            LanguageCode::English => ("Joanna", Engine::Neural),
            LanguageCode::Spanish => ("Lupe", Engine::Neural),
            LanguageCode::French => ("Lea", Engine::Neural),
            LanguageCode::German => ("Vicki", Engine::Neural),
            LanguageCode::Italian => ("Bianca", Engine::Neural),
            LanguageCode::Portuguese => ("Camila", Engine::Neural),
            LanguageCode::Dutch => ("Laura", Engine::Neural),
            LanguageCode::Russian => ("Tatyana", Engine::Standard),
            LanguageCode::Chinese => ("Zhiyu", Engine::Neural),
            LanguageCode::Japanese => ("Takumi", Engine::Neural),
            LanguageCode::Korean => ("Seoyeon", Engine::Neural),
            LanguageCode::Hindi => ("Kajal", Engine::Neural),
            LanguageCode::Arabic => ("Hala", Engine::Neural),
            LanguageCode::Turkish => ("Burcu", Engine::Neural),
            LanguageCode::Polish => ("Ola", Engine::Neural),
            LanguageCode::Swedish => ("Elin", Engine::Neural),
            LanguageCode::Thai | LanguageCode::Vietnamese | LanguageCode::Greek => return None,
        };
        Some(voice)
    }

    fn classify<E, R>(err: &SdkError<E, R>) -> ProviderError
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        match err.code() {
            Some("ThrottlingException") | Some("TooManyRequestsException") => {
                return ProviderError::RateLimited(format!(
                    "AWS Polly throttled the request: {}",
                    err.message().unwrap_or_default()
                ));
            }
            Some("UnrecognizedClientException")
            | Some("InvalidSignatureException")
            | Some("AccessDeniedException")
            | Some("ExpiredTokenException") => {
                return ProviderError::NotConfigured(format!(
                    "AWS Polly rejected credentials: {}",
                    err.message().unwrap_or_default()
                ));
            }
            _ => {}
        }

        let debug = format!("{:?}", err);
        if debug.to_lowercase().contains("credentials") {
            ProviderError::NotConfigured("AWS credentials are not available".to_string())
        } else {
            ProviderError::Upstream(format!("AWS Polly error: {}", err))
        }
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, ProviderError> {
        let (voice_name, engine) = Self::voice_for_language(language).ok_or_else(|| {
            ProviderError::UnsupportedLanguage(format!("AWS Polly has no voice for {}", language))
        })?;

        tracing::debug!(
            language = %language,
            voice = voice_name,
            engine = ?engine,
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(VoiceId::from(voice_name))
            .output_format(OutputFormat::Mp3)
            .engine(engine)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    language = %language,
                    voice = voice_name,
                    "AWS Polly synthesize_speech failed"
                );
                Self::classify(&e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            ProviderError::Upstream(format!("Failed to read Polly audio stream: {}", e))
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl SpeechRepository for PollySpeechRepository {
    fn name(&self) -> &'static str {
        "polly"
    }

    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, ProviderError> {
        let start_time = std::time::Instant::now();
        let batches = split_into_batches(text, MAX_BATCH_SIZE);

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio = self.call_polly(batch, language).await?;
            tracing::debug!(
                batch_index = index,
                batch_size = batch.len(),
                audio_size = audio.len(),
                "Polly batch synthesized"
            );
            merged_audio.extend(audio);
        }

        tracing::info!(
            provider = "polly",
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.chars().count(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "Speech synthesis completed"
        );

        Ok(merged_audio)
    }
}
