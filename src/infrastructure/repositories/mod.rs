pub mod google_api;
pub mod google_speech_repository;
pub mod google_translation_repository;
pub mod gtts_speech_repository;
pub mod libretranslate_translation_repository;
pub mod mymemory_translation_repository;
pub mod openai_speech_repository;
pub mod polly_speech_repository;
pub mod provider_error;
pub mod sentence_repository;
pub mod speech_repository;
pub mod text_batches;
pub mod translation_repository;

pub use google_speech_repository::GoogleSpeechRepository;
pub use google_translation_repository::GoogleTranslationRepository;
pub use gtts_speech_repository::GttsSpeechRepository;
pub use libretranslate_translation_repository::LibreTranslateRepository;
pub use mymemory_translation_repository::MyMemoryTranslationRepository;
pub use openai_speech_repository::OpenAiSpeechRepository;
pub use polly_speech_repository::PollySpeechRepository;
pub use provider_error::ProviderError;
pub use sentence_repository::FileSentenceRepository;
pub use speech_repository::SpeechRepository;
pub use translation_repository::TranslationRepository;

use crate::infrastructure::config::{Config, SpeechProvider, TranslationProvider};
use async_openai::config::OpenAIConfig;
use std::sync::Arc;

/// Shared HTTP client for every REST provider
pub fn build_http_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .user_agent(concat!("polyglot-backend/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Instantiate the configured translation provider
pub fn translation_repository(
    config: &Config,
    client: reqwest::Client,
) -> Arc<dyn TranslationRepository> {
    match config.translation_provider {
        TranslationProvider::MyMemory => Arc::new(MyMemoryTranslationRepository::new(
            client,
            config.mymemory_base_url.clone(),
            config.mymemory_contact_email.clone(),
        )),
        TranslationProvider::Google => {
            if config.google_api_key.is_none() {
                tracing::warn!("GOOGLE_API_KEY not set, translation requests will fail");
            }
            Arc::new(GoogleTranslationRepository::new(
                client,
                config.google_translate_base_url.clone(),
                config.google_api_key.clone(),
            ))
        }
        TranslationProvider::LibreTranslate => Arc::new(LibreTranslateRepository::new(
            client,
            config.libretranslate_base_url.clone(),
            config.libretranslate_api_key.clone(),
        )),
    }
}

/// Instantiate the configured speech provider.
///
/// Missing credentials never fail here; the provider reports
/// `NotConfigured` per request instead.
pub async fn speech_repository(
    config: &Config,
    client: reqwest::Client,
) -> Arc<dyn SpeechRepository> {
    match config.speech_provider {
        SpeechProvider::Google => {
            if config.google_api_key.is_none() {
                tracing::warn!("GOOGLE_API_KEY not set, speech requests will fail");
            }
            Arc::new(GoogleSpeechRepository::new(
                client,
                config.google_tts_base_url.clone(),
                config.google_api_key.clone(),
            ))
        }
        SpeechProvider::Polly => {
            tracing::info!(region = %config.aws_region, "Initializing AWS Polly client");

            let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
            if !has_access_key {
                tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (profile, instance metadata, etc.)");
            }

            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = aws_sdk_polly::Client::new(&aws_config);

            Arc::new(PollySpeechRepository::new(Arc::new(polly_client)))
        }
        SpeechProvider::OpenAi => {
            let client = config.openai_api_key.as_ref().map(|key| {
                Arc::new(async_openai::Client::with_config(
                    OpenAIConfig::new().with_api_key(key),
                ))
            });
            if client.is_none() {
                tracing::warn!("OPENAI_API_KEY not set, speech requests will fail");
            }
            Arc::new(OpenAiSpeechRepository::new(
                client,
                config.openai_tts_model.clone(),
                config.openai_tts_voice.clone(),
            ))
        }
        SpeechProvider::Gtts => Arc::new(GttsSpeechRepository::new(
            client,
            config.gtts_base_url.clone(),
        )),
    }
}
