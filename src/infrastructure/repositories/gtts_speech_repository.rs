use super::provider_error::ProviderError;
use super::speech_repository::SpeechRepository;
use super::text_batches::split_into_batches;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;

/// The public translate_tts endpoint rejects inputs over 100 characters
const MAX_BATCH_SIZE: usize = 100;

/// Keyless speech through Google Translate's public TTS endpoint (gTTS style)
pub struct GttsSpeechRepository {
    client: reqwest::Client,
    base_url: String,
}

impl GttsSpeechRepository {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn call_gtts(
        &self,
        text: &str,
        language: LanguageCode,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}/translate_tts", self.base_url);
        let total = total.to_string();
        let index = index.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.regional_code()),
                ("q", text),
                ("total", total.as_str()),
                ("idx", index.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status("gTTS", status, &body));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SpeechRepository for GttsSpeechRepository {
    fn name(&self) -> &'static str {
        "gtts"
    }

    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, ProviderError> {
        let start_time = std::time::Instant::now();
        let batches = split_into_batches(text, MAX_BATCH_SIZE);

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            merged_audio.extend(
                self.call_gtts(batch, language, index, batches.len())
                    .await?,
            );
        }

        tracing::info!(
            provider = "gtts",
            language = %language,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "Speech synthesis completed"
        );

        Ok(merged_audio)
    }
}
