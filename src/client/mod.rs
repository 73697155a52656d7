//! Client-side request orchestration: drives the backend API on behalf of a
//! UI and owns the state it renders.

pub mod api;
pub mod orchestrator;
pub mod state;

pub use api::{ApiError, AudioRef, HttpLearningApi, LearningApi};
pub use orchestrator::{FetchOutcome, LearningSession, SubmitOutcome};
pub use state::{CyclePhase, UiState};
