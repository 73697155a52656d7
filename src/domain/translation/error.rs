use crate::error::AppError;
use crate::infrastructure::repositories::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
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
}

impl From<ProviderError> for TranslationServiceError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => TranslationServiceError::NotConfigured(msg),
            ProviderError::RateLimited(msg) => TranslationServiceError::RateLimited(msg),
            ProviderError::UnsupportedLanguage(msg) => {
                TranslationServiceError::UnsupportedLanguage(msg)
            }
            ProviderError::Upstream(msg) => TranslationServiceError::Upstream(msg),
        }
    }
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Invalid(msg) => AppError::Validation(msg),
            TranslationServiceError::UnsupportedLanguage(msg) => AppError::UnsupportedLanguage(msg),
            TranslationServiceError::RateLimited(_) => AppError::RateLimited(
                "Translation rate limit reached. Please try again later.".to_string(),
            ),
            TranslationServiceError::NotConfigured(msg) => {
                AppError::Configuration(format!("Translation service is not configured: {}", msg))
            }
            TranslationServiceError::Upstream(msg) => AppError::upstream("Translation failed", msg),
        }
    }
}
