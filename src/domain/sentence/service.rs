use super::{SentenceRepository, FALLBACK_SENTENCES};
use rand::seq::SliceRandom;
use std::sync::Arc;

pub struct SentenceService {
    repository: Arc<dyn SentenceRepository>,
}

impl SentenceService {
    pub fn new(repository: Arc<dyn SentenceRepository>) -> Self {
        Self { repository }
    }

    /// Returns one sentence chosen uniformly at random. Never fails: an empty
    /// corpus falls back to the built-in list.
    pub fn random_sentence(&self) -> String {
        let mut rng = rand::thread_rng();

        match self.repository.sentences().choose(&mut rng) {
            Some(sentence) => sentence.clone(),
            None => {
                tracing::warn!("Sentence corpus is empty, using built-in fallback");
                FALLBACK_SENTENCES
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(FALLBACK_SENTENCES[0])
                    .to_string()
            }
        }
    }

    pub fn corpus_size(&self) -> usize {
        self.repository.sentences().len()
    }
}
