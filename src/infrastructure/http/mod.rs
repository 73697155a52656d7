pub mod request_id;

use axum::{
    http::Method,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use crate::controllers::{
    health::{self, Readiness},
    languages,
    sentence::SentenceController,
    speech::SpeechController,
    translation::TranslationController,
};
use crate::error::method_not_allowed;
use crate::infrastructure::config::Config;
use crate::infrastructure::storage::AudioStore;

/// Everything the router needs, already wired
pub struct RouterDeps {
    pub sentence_controller: Arc<SentenceController>,
    pub translation_controller: Arc<TranslationController>,
    pub speech_controller: Arc<SpeechController>,
    pub readiness: Arc<Readiness>,
    /// Set when audio is delivered as files served under the store's public path
    pub audio_store: Option<Arc<AudioStore>>,
}

/// Browsers call the API from any origin
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Build the application router with all routes and layers
pub fn build_router(deps: RouterDeps) -> Router {
    let sentence_routes = Router::new()
        .route(
            "/api/random-sentence",
            get(SentenceController::random_sentence).fallback(method_not_allowed),
        )
        .with_state(deps.sentence_controller);

    let translation_routes = Router::new()
        .route(
            "/api/translate",
            post(TranslationController::translate).fallback(method_not_allowed),
        )
        .with_state(deps.translation_controller);

    let speech_routes = Router::new()
        .route(
            "/api/text-to-speech",
            post(SpeechController::synthesize).fallback(method_not_allowed),
        )
        .with_state(deps.speech_controller);

    let mut app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(deps.readiness)
        .route(
            "/api/languages",
            get(languages::list_languages).fallback(method_not_allowed),
        )
        .merge(sentence_routes)
        .merge(translation_routes)
        .merge(speech_routes);

    if let Some(store) = deps.audio_store {
        app = app.nest_service(store.public_path(), ServeDir::new(store.dir()));
    }

    app.layer(cors_layer())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
