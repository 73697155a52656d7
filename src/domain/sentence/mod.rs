use serde::{Deserialize, Serialize};

/// Built-in practice sentences used when no corpus is available
pub const FALLBACK_SENTENCES: [&str; 3] = [
    "The quick brown fox jumps over the lazy dog.",
    "Hello, world!",
    "Please add sentences to the sentences.txt file.",
];

/// Response for GET /api/random-sentence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentenceResponse {
    pub sentence: String,
}

/// Repository trait for accessing the practice sentence corpus
pub trait SentenceRepository: Send + Sync {
    fn sentences(&self) -> &[String];
}

pub mod service;
pub use service::SentenceService;
