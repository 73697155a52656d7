use super::provider_error::ProviderError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Error envelope shared by Google Cloud REST APIs
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Map a failed Google Cloud response onto a `ProviderError`.
///
/// Quota exhaustion (`RESOURCE_EXHAUSTED`) becomes `RateLimited`. An invalid
/// or unauthorised API key becomes `NotConfigured`, including the 400
/// `INVALID_ARGUMENT` Google answers with for a malformed key.
pub fn classify_error(provider: &str, status: StatusCode, body: &str) -> ProviderError {
    let Ok(envelope) = serde_json::from_str::<GoogleErrorEnvelope>(body) else {
        return ProviderError::from_status(provider, status, body);
    };
    let error = envelope.error;

    match error.status.as_deref() {
        Some("RESOURCE_EXHAUSTED") => {
            ProviderError::RateLimited(format!("{} quota exhausted: {}", provider, error.message))
        }
        Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED") => ProviderError::NotConfigured(
            format!("{} rejected credentials: {}", provider, error.message),
        ),
        Some("INVALID_ARGUMENT") if error.message.contains("API key") => {
            ProviderError::NotConfigured(format!(
                "{} rejected credentials: {}",
                provider, error.message
            ))
        }
        _ => ProviderError::from_status(provider, status, &error.message),
    }
}
