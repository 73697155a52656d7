use crate::error::AppError;
use crate::infrastructure::repositories::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    UnsupportedLanguage(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("not configured: {0}")]
    NotConfigured(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("audio storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<ProviderError> for SpeechServiceError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => SpeechServiceError::NotConfigured(msg),
            ProviderError::RateLimited(msg) => SpeechServiceError::RateLimited(msg),
            ProviderError::UnsupportedLanguage(msg) => SpeechServiceError::UnsupportedLanguage(msg),
            ProviderError::Upstream(msg) => SpeechServiceError::Upstream(msg),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::Validation(msg),
            SpeechServiceError::UnsupportedLanguage(msg) => AppError::UnsupportedLanguage(msg),
            SpeechServiceError::RateLimited(_) => AppError::RateLimited(
                "Speech rate limit reached. Please try again later.".to_string(),
            ),
            SpeechServiceError::NotConfigured(msg) => {
                AppError::Configuration(format!("Speech service is not configured: {}", msg))
            }
            SpeechServiceError::Upstream(msg) => AppError::upstream("Speech synthesis failed", msg),
            SpeechServiceError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}
