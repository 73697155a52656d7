use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::sentence::{SentenceResponse, SentenceService};

pub struct SentenceController {
    sentence_service: Arc<SentenceService>,
}

impl SentenceController {
    pub fn new(sentence_service: Arc<SentenceService>) -> Self {
        Self { sentence_service }
    }

    /// GET /api/random-sentence - One practice sentence from the corpus
    pub async fn random_sentence(
        State(controller): State<Arc<SentenceController>>,
    ) -> Json<SentenceResponse> {
        Json(SentenceResponse {
            sentence: controller.sentence_service.random_sentence(),
        })
    }
}
