use parking_lot::Mutex;
use std::sync::Arc;

use super::api::{ApiError, LearningApi};
use super::state::{CyclePhase, UiState};
use crate::domain::language::LanguageCode;
use crate::domain::tips::TipsCatalog;

pub const SENTENCE_FAILED_MESSAGE: &str = "Failed to get random sentence. Please try again.";
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed. Please try again.";
pub const RATE_LIMITED_MESSAGE: &str = "Translation rate limit reached. Please try again later.";
pub const SPEECH_FAILED_MESSAGE: &str = "Failed to generate speech. Please try again.";

/// How a submit ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The cycle ran to a terminal phase
    Finished(CyclePhase),
    /// A newer submit or sentence fetch took over; this cycle's results were dropped
    Superseded,
    /// Rejected locally without any network call
    Rejected(ApiError),
}

/// How a sentence fetch ended
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(String),
    Failed(ApiError),
    Superseded,
}

struct SessionInner {
    ui: UiState,
    translate_generation: u64,
    sentence_generation: u64,
}

/// Sequences sentence fetch, translation, speech and tips for one learner.
///
/// Every request carries a generation token taken under the lock; a response
/// whose token is no longer current is discarded, so a slow earlier request
/// can never overwrite newer state. The lock is never held across an await.
pub struct LearningSession {
    api: Arc<dyn LearningApi>,
    tips: Arc<TipsCatalog>,
    inner: Mutex<SessionInner>,
}

impl LearningSession {
    pub fn new(api: Arc<dyn LearningApi>, tips: Arc<TipsCatalog>) -> Self {
        Self {
            api,
            tips,
            inner: Mutex::new(SessionInner {
                ui: UiState::default(),
                translate_generation: 0,
                sentence_generation: 0,
            }),
        }
    }

    pub fn snapshot(&self) -> UiState {
        self.inner.lock().ui.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.lock().ui.text = text.into();
    }

    /// Switching language hides tips that belonged to the previous one
    pub fn set_target_language(&self, language: LanguageCode) {
        let mut inner = self.inner.lock();
        inner.ui.target_language = language;
        inner.ui.tips_visible = false;
    }

    /// Translate the current text, then speak the translation.
    ///
    /// Supersedes any in-flight cycle and any pending sentence fetch.
    pub async fn submit(&self) -> SubmitOutcome {
        let (generation, text, target) = {
            let mut inner = self.inner.lock();
            let text = inner.ui.text.trim().to_string();
            if text.is_empty() {
                return SubmitOutcome::Rejected(ApiError::Validation(
                    "Text is required".to_string(),
                ));
            }

            // A sentence still loading belongs to the text being replaced
            inner.translate_generation += 1;
            inner.sentence_generation += 1;
            inner.ui.sentence_loading = false;
            inner.ui.reset_results();
            inner.ui.transition(CyclePhase::Translating);
            (inner.translate_generation, text, inner.ui.target_language)
        };

        tracing::debug!(generation, target_language = %target, "Translation cycle started");
        let translated = self.api.translate(&text, target).await;

        let translation = {
            let mut inner = self.inner.lock();
            if inner.translate_generation != generation {
                tracing::debug!(generation, "Discarding stale translation response");
                return SubmitOutcome::Superseded;
            }

            match translated {
                Err(e) => {
                    inner.ui.error = Some(translation_error_message(&e));
                    inner.ui.transition(CyclePhase::TranslationFailed);
                    return SubmitOutcome::Finished(CyclePhase::TranslationFailed);
                }
                Ok(translation) => {
                    inner.ui.translation = Some(translation.clone());
                    inner.ui.tips = self.tips.select(target);
                    inner.ui.tips_visible = inner.ui.tips.is_some();
                    inner.ui.transition(CyclePhase::Translated);
                    inner.ui.transition(CyclePhase::Synthesizing);
                    translation
                }
            }
        };

        let audio = self.api.synthesize(&translation, target).await;

        let mut inner = self.inner.lock();
        if inner.translate_generation != generation {
            tracing::debug!(generation, "Discarding stale speech response");
            return SubmitOutcome::Superseded;
        }

        match audio {
            Ok(audio) => {
                inner.ui.audio = Some(audio);
                inner.ui.transition(CyclePhase::Complete);
                SubmitOutcome::Finished(CyclePhase::Complete)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Speech synthesis failed after translation");
                inner.ui.audio_error = Some(SPEECH_FAILED_MESSAGE.to_string());
                inner.ui.transition(CyclePhase::SynthesisFailed);
                SubmitOutcome::Finished(CyclePhase::SynthesisFailed)
            }
        }
    }

    /// Load a random practice sentence into the text field.
    ///
    /// Clears previous results first and supersedes any in-flight cycle.
    pub async fn fetch_random_sentence(&self) -> FetchOutcome {
        let generation = {
            let mut inner = self.inner.lock();
            inner.sentence_generation += 1;
            inner.translate_generation += 1;
            inner.ui.reset_results();
            inner.ui.transition(CyclePhase::Idle);
            inner.ui.sentence_loading = true;
            inner.sentence_generation
        };

        let result = self.api.random_sentence().await;

        let mut inner = self.inner.lock();
        if inner.sentence_generation != generation {
            return FetchOutcome::Superseded;
        }
        inner.ui.sentence_loading = false;

        match result {
            Ok(sentence) => {
                inner.ui.text = sentence.clone();
                FetchOutcome::Loaded(sentence)
            }
            Err(e) => {
                inner.ui.error = Some(SENTENCE_FAILED_MESSAGE.to_string());
                FetchOutcome::Failed(e)
            }
        }
    }
}

/// Most specific wording first: rate limits, then correctable input, then generic
fn translation_error_message(err: &ApiError) -> String {
    match err {
        ApiError::RateLimited(_) => RATE_LIMITED_MESSAGE.to_string(),
        ApiError::Validation(msg) | ApiError::UnsupportedLanguage(msg) => msg.clone(),
        _ => TRANSLATION_FAILED_MESSAGE.to_string(),
    }
}
