use reqwest::StatusCode;

/// Normalized failure raised by any upstream provider.
///
/// Provider implementations translate their own error payloads into one of
/// these variants so nothing provider-specific leaks past the repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("upstream error: {0}")]
    Upstream(String),
}

impl ProviderError {
    /// Classify a non-success HTTP status from a provider
    pub fn from_status(provider: &str, status: StatusCode, body: &str) -> Self {
        let body = truncate(body, 300);
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                ProviderError::RateLimited(format!("{} returned {}: {}", provider, status, body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::NotConfigured(
                format!("{} rejected credentials ({}): {}", provider, status, body),
            ),
            _ => ProviderError::Upstream(format!("{} returned {}: {}", provider, status, body)),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Upstream(format!("request timed out: {}", err))
        } else {
            ProviderError::Upstream(err.to_string())
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
