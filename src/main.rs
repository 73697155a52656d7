use polyglot_backend::app::build_app;
use polyglot_backend::infrastructure::config::{Config, LogFormat};
use polyglot_backend::infrastructure::http::start_http_server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Polyglot Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);
    let app = build_app(config.clone()).await?;

    // Expire generated audio files in the background
    if let Some(store) = &app.audio_store {
        tracing::info!(
            dir = %store.dir().display(),
            retention_secs = config.audio_retention.as_secs(),
            sweep_interval_secs = config.audio_sweep_interval.as_secs(),
            "Starting audio sweeper"
        );
        store.clone().spawn_sweeper(config.audio_sweep_interval);
    }

    start_http_server(config, app.router).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "polyglot_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
