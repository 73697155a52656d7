use anyhow::Context;
use axum::Router;
use std::sync::Arc;

use crate::controllers::{
    health::Readiness, sentence::SentenceController, speech::SpeechController,
    translation::TranslationController,
};
use crate::domain::{
    sentence::SentenceService,
    speech::{SpeechDelivery, SpeechService, SpeechServiceApi},
    tips::TipsCatalog,
    translation::{TranslationService, TranslationServiceApi},
};
use crate::infrastructure::{
    config::{Config, SpeechDeliveryMode},
    http::{build_router, RouterDeps},
    repositories::{self, FileSentenceRepository},
    storage::AudioStore,
};

/// A fully wired application
pub struct App {
    pub router: Router,
    /// Present when audio is delivered as files
    pub audio_store: Option<Arc<AudioStore>>,
    /// Pronunciation tips for sessions driven against this backend
    pub tips: Arc<TipsCatalog>,
}

/// Instantiate repositories, services and controllers from configuration
pub async fn build_app(config: Arc<Config>) -> anyhow::Result<App> {
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let http_client =
        repositories::build_http_client(&config).context("Failed to build HTTP client")?;
    let sentence_repo = Arc::new(FileSentenceRepository::load(&config.sentences_file));
    let translation_repo = repositories::translation_repository(&config, http_client.clone());
    let speech_repo = repositories::speech_repository(&config, http_client).await;

    let audio_store = match config.speech_delivery {
        SpeechDeliveryMode::Inline => None,
        SpeechDeliveryMode::File => Some(Arc::new(
            AudioStore::new(
                &config.audio_dir,
                &config.audio_public_path,
                config.audio_retention,
            )
            .with_context(|| {
                format!("Failed to create audio directory {}", config.audio_dir.display())
            })?,
        )),
    };

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let sentence_service = Arc::new(SentenceService::new(sentence_repo));
    let translation_service: Arc<dyn TranslationServiceApi> =
        Arc::new(TranslationService::new(translation_repo));
    let delivery = match &audio_store {
        Some(store) => SpeechDelivery::Stored(store.clone()),
        None => SpeechDelivery::Inline,
    };
    let speech_service: Arc<dyn SpeechServiceApi> =
        Arc::new(SpeechService::new(speech_repo, delivery));

    let tips = Arc::new(TipsCatalog::builtin(config.tips_per_category));

    let readiness = Arc::new(Readiness {
        translation: translation_service.provider_name(),
        speech: speech_service.provider_name(),
        delivery: speech_service.delivery_name(),
        sentences: sentence_service.corpus_size(),
    });
    tracing::info!(
        translation_provider = readiness.translation,
        speech_provider = readiness.speech,
        delivery = readiness.delivery,
        sentences = readiness.sentences,
        "Providers configured"
    );

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let router = build_router(RouterDeps {
        sentence_controller: Arc::new(SentenceController::new(sentence_service)),
        translation_controller: Arc::new(TranslationController::new(translation_service)),
        speech_controller: Arc::new(SpeechController::new(speech_service)),
        readiness,
        audio_store: audio_store.clone(),
    });

    Ok(App {
        router,
        audio_store,
        tips,
    })
}
