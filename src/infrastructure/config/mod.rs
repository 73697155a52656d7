use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub upstream_timeout: Duration,
    pub sentences_file: PathBuf,
    // Translation
    pub translation_provider: TranslationProvider,
    pub mymemory_base_url: String,
    pub mymemory_contact_email: Option<String>,
    pub google_api_key: Option<String>,
    pub google_translate_base_url: String,
    pub libretranslate_base_url: String,
    pub libretranslate_api_key: Option<String>,
    // Speech
    pub speech_provider: SpeechProvider,
    pub google_tts_base_url: String,
    pub gtts_base_url: String,
    pub aws_region: String,
    pub openai_api_key: Option<String>,
    pub openai_tts_model: String,
    pub openai_tts_voice: String,
    pub speech_delivery: SpeechDeliveryMode,
    pub audio_dir: PathBuf,
    pub audio_public_path: String,
    pub audio_retention: Duration,
    pub audio_sweep_interval: Duration,
    // Tips
    pub tips_per_category: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    MyMemory,
    Google,
    LibreTranslate,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProvider {
    Google,
    Polly,
    OpenAi,
    Gtts,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SpeechDeliveryMode {
    Inline,
    File,
}

impl FromStr for TranslationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mymemory" => Ok(Self::MyMemory),
            "google" => Ok(Self::Google),
            "libretranslate" => Ok(Self::LibreTranslate),
            other => Err(format!("Unknown TRANSLATION_PROVIDER: {}", other)),
        }
    }
}

impl FromStr for SpeechProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "polly" => Ok(Self::Polly),
            "openai" => Ok(Self::OpenAi),
            "gtts" => Ok(Self::Gtts),
            other => Err(format!("Unknown SPEECH_PROVIDER: {}", other)),
        }
    }
}

impl FromStr for SpeechDeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "file" => Ok(Self::File),
            other => Err(format!("Unknown SPEECH_DELIVERY: {}", other)),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read configuration from the environment
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, applying defaults.
    ///
    /// Absent credentials are fine here; only malformed values fail.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Config {
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "5000").parse()?,
            environment: match var("ENVIRONMENT", "development").as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match var("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            upstream_timeout: Duration::from_secs(var("UPSTREAM_TIMEOUT_SECS", "30").parse()?),
            sentences_file: PathBuf::from(var("SENTENCES_FILE", "data/sentences.txt")),
            translation_provider: var("TRANSLATION_PROVIDER", "mymemory").parse()?,
            mymemory_base_url: var("MYMEMORY_BASE_URL", "https://api.mymemory.translated.net"),
            mymemory_contact_email: optional("MYMEMORY_CONTACT_EMAIL"),
            google_api_key: optional("GOOGLE_API_KEY"),
            google_translate_base_url: var(
                "GOOGLE_TRANSLATE_BASE_URL",
                "https://translation.googleapis.com",
            ),
            libretranslate_base_url: var("LIBRETRANSLATE_BASE_URL", "https://libretranslate.com"),
            libretranslate_api_key: optional("LIBRETRANSLATE_API_KEY"),
            speech_provider: var("SPEECH_PROVIDER", "google").parse()?,
            google_tts_base_url: var("GOOGLE_TTS_BASE_URL", "https://texttospeech.googleapis.com"),
            gtts_base_url: var("GTTS_BASE_URL", "https://translate.google.com"),
            aws_region: var("AWS_REGION", "eu-west-1"),
            openai_api_key: optional("OPENAI_API_KEY"),
            openai_tts_model: var("OPENAI_TTS_MODEL", "tts-1"),
            openai_tts_voice: var("OPENAI_TTS_VOICE", "alloy"),
            speech_delivery: var("SPEECH_DELIVERY", "inline").parse()?,
            audio_dir: PathBuf::from(var("AUDIO_DIR", "audio")),
            audio_public_path: var("AUDIO_PUBLIC_PATH", "/audio"),
            audio_retention: Duration::from_secs(var("AUDIO_RETENTION_SECS", "3600").parse()?),
            audio_sweep_interval: Duration::from_secs(
                var("AUDIO_SWEEP_INTERVAL_SECS", "300").parse()?,
            ),
            tips_per_category: var("TIPS_PER_CATEGORY", "3").parse()?,
        };

        // Stored audio is mounted under this prefix, so it cannot be the root
        if config.audio_public_path.trim_matches('/').is_empty() {
            return Err(format!(
                "AUDIO_PUBLIC_PATH must not be the root path: {:?}",
                config.audio_public_path
            )
            .into());
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
