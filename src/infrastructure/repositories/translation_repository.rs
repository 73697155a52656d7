use super::provider_error::ProviderError;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the upstream translation provider (MyMemory, Google Cloud, LibreTranslate).
///
/// Implementations own the provider's request and response shapes and must
/// hand back plain translated text or a `ProviderError`. Quota exhaustion is
/// always reported as `ProviderError::RateLimited`.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Short provider name used in logs and readiness output
    fn name(&self) -> &'static str;

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, ProviderError>;
}
