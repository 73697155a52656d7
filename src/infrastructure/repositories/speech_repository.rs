use super::provider_error::ProviderError;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider (Google Cloud, AWS Polly, OpenAI, gTTS).
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single MP3 stream
/// - Provider-specific voice selection (fixed per language, never caller-chosen)
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Short provider name used in logs and readiness output
    fn name(&self) -> &'static str;

    /// Synthesize text to speech for a given language
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Errors
    /// `NotConfigured` when credentials are missing or rejected, `UnsupportedLanguage`
    /// when the provider has no voice for `language`, `Upstream` otherwise.
    async fn synthesize(&self, text: &str, language: LanguageCode)
        -> Result<Vec<u8>, ProviderError>;
}
