use crate::domain::sentence::{SentenceRepository, FALLBACK_SENTENCES};
use std::path::Path;

/// Sentence corpus read once from a text file, one sentence per line
pub struct FileSentenceRepository {
    sentences: Vec<String>,
}

impl FileSentenceRepository {
    /// Load the corpus from `path`.
    ///
    /// Blank lines are dropped and lines are trimmed. A missing or unreadable
    /// file, or one with no sentences, yields the built-in fallback list.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let sentences = Self::parse(&contents);
                if sentences.is_empty() {
                    tracing::warn!(
                        path = %path.display(),
                        "Sentence file contains no sentences, using built-in fallback"
                    );
                    return Self::builtin();
                }
                tracing::info!(
                    path = %path.display(),
                    count = sentences.len(),
                    "Sentence corpus loaded"
                );
                Self { sentences }
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not read sentence file, using built-in fallback"
                );
                Self::builtin()
            }
        }
    }

    pub fn builtin() -> Self {
        Self {
            sentences: FALLBACK_SENTENCES.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn parse(contents: &str) -> Vec<String> {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl SentenceRepository for FileSentenceRepository {
    fn sentences(&self) -> &[String] {
        &self.sentences
    }
}
