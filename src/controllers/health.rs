use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

/// Which providers this instance was wired with
#[derive(Debug, Clone, Serialize)]
pub struct Readiness {
    pub translation: &'static str,
    pub speech: &'static str,
    pub delivery: &'static str,
    pub sentences: usize,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(readiness): State<Arc<Readiness>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ready",
            "translation": readiness.translation,
            "speech": readiness.speech,
            "delivery": readiness.delivery,
            "sentences": readiness.sentences,
        })),
    )
}
