use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::translation::{TranslationRequest, TranslationResponse, TranslationServiceApi},
    error::AppResult,
};

pub struct TranslationController {
    translation_service: Arc<dyn TranslationServiceApi>,
}

impl TranslationController {
    pub fn new(translation_service: Arc<dyn TranslationServiceApi>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate English text into a target language
    pub async fn translate(
        State(controller): State<Arc<TranslationController>>,
        body: Result<Json<TranslationRequest>, JsonRejection>,
    ) -> AppResult<Json<TranslationResponse>> {
        let Json(request) = body?;

        let translation = controller.translation_service.translate(request).await?;

        Ok(Json(translation.into()))
    }
}
