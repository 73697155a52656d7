use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::speech::{SpeechRequest, SpeechResult, SpeechServiceApi},
    error::AppResult,
};

pub struct SpeechController {
    speech_service: Arc<dyn SpeechServiceApi>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<dyn SpeechServiceApi>) -> Self {
        Self { speech_service }
    }

    /// POST /api/text-to-speech - Synthesize MP3 audio for text in a language
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        body: Result<Json<SpeechRequest>, JsonRejection>,
    ) -> AppResult<Json<SpeechResult>> {
        let Json(request) = body?;

        let result = controller.speech_service.synthesize(request).await?;

        Ok(Json(result))
    }
}
