use super::api::AudioRef;
use crate::domain::language::LanguageCode;
use crate::domain::tips::SelectedTips;

/// Phase of one translate-then-speak cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Idle,
    Translating,
    TranslationFailed,
    Translated,
    Synthesizing,
    SynthesisFailed,
    Complete,
}

impl CyclePhase {
    /// Whether `self -> next` is a legal step.
    ///
    /// A submit may start a new cycle from any phase and a sentence fetch
    /// may return to `Idle` from any phase; everything else follows the cycle.
    pub fn can_transition_to(self, next: CyclePhase) -> bool {
        use CyclePhase::*;
        matches!(
            (self, next),
            (_, Translating)
                | (_, Idle)
                | (Translating, TranslationFailed)
                | (Translating, Translated)
                | (Translated, Synthesizing)
                | (Synthesizing, SynthesisFailed)
                | (Synthesizing, Complete)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            CyclePhase::TranslationFailed | CyclePhase::SynthesisFailed | CyclePhase::Complete
        )
    }
}

/// Everything the UI renders. Only `LearningSession` mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub text: String,
    pub target_language: LanguageCode,
    pub translation: Option<String>,
    pub audio: Option<AudioRef>,
    pub phase: CyclePhase,
    pub sentence_loading: bool,
    pub error: Option<String>,
    pub audio_error: Option<String>,
    pub tips: Option<SelectedTips>,
    pub tips_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            text: String::new(),
            target_language: LanguageCode::Spanish,
            translation: None,
            audio: None,
            phase: CyclePhase::Idle,
            sentence_loading: false,
            error: None,
            audio_error: None,
            tips: None,
            tips_visible: false,
        }
    }
}

impl UiState {
    pub fn translating(&self) -> bool {
        self.phase == CyclePhase::Translating
    }

    pub fn synthesizing(&self) -> bool {
        self.phase == CyclePhase::Synthesizing
    }

    /// Move to `next`, refusing illegal steps
    pub(crate) fn transition(&mut self, next: CyclePhase) -> bool {
        if !self.phase.can_transition_to(next) {
            tracing::warn!(from = ?self.phase, to = ?next, "Rejected phase transition");
            return false;
        }
        self.phase = next;
        true
    }

    /// Clear every result of the previous cycle
    pub(crate) fn reset_results(&mut self) {
        self.translation = None;
        self.audio = None;
        self.tips = None;
        self.tips_visible = false;
        self.error = None;
        self.audio_error = None;
    }
}
