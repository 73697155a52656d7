use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ISO 639-1 language codes the application can translate into and speak.
///
/// English is the fixed source language; every other variant is a
/// translation target offered to learners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "el")]
    Greek,
}

/// The language every translation starts from
pub const SOURCE_LANGUAGE: LanguageCode = LanguageCode::English;

impl LanguageCode {
    /// All supported codes, source language first
    pub const ALL: [LanguageCode; 19] = [
        LanguageCode::English,
        LanguageCode::Spanish,
        LanguageCode::French,
        LanguageCode::German,
        LanguageCode::Italian,
        LanguageCode::Portuguese,
        LanguageCode::Dutch,
        LanguageCode::Russian,
        LanguageCode::Chinese,
        LanguageCode::Japanese,
        LanguageCode::Korean,
        LanguageCode::Hindi,
        LanguageCode::Thai,
        LanguageCode::Vietnamese,
        LanguageCode::Arabic,
        LanguageCode::Turkish,
        LanguageCode::Polish,
        LanguageCode::Swedish,
        LanguageCode::Greek,
    ];

    /// ISO 639-1 code
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
            LanguageCode::German => "de",
            LanguageCode::Italian => "it",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Dutch => "nl",
            LanguageCode::Russian => "ru",
            LanguageCode::Chinese => "zh",
            LanguageCode::Japanese => "ja",
            LanguageCode::Korean => "ko",
            LanguageCode::Hindi => "hi",
            LanguageCode::Thai => "th",
            LanguageCode::Vietnamese => "vi",
            LanguageCode::Arabic => "ar",
            LanguageCode::Turkish => "tr",
            LanguageCode::Polish => "pl",
            LanguageCode::Swedish => "sv",
            LanguageCode::Greek => "el",
        }
    }

    /// Label shown in the language picker
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::English => "English",
            LanguageCode::Spanish => "Spanish (Español)",
            LanguageCode::French => "French (Français)",
            LanguageCode::German => "German (Deutsch)",
            LanguageCode::Italian => "Italian (Italiano)",
            LanguageCode::Portuguese => "Portuguese (Português)",
            LanguageCode::Dutch => "Dutch (Nederlands)",
            LanguageCode::Russian => "Russian (Русский)",
            LanguageCode::Chinese => "Chinese (中文)",
            LanguageCode::Japanese => "Japanese (日本語)",
            LanguageCode::Korean => "Korean (한국어)",
            LanguageCode::Hindi => "Hindi (हिन्दी)",
            LanguageCode::Thai => "Thai (ไทย)",
            LanguageCode::Vietnamese => "Vietnamese (Tiếng Việt)",
            LanguageCode::Arabic => "Arabic (العربية)",
            LanguageCode::Turkish => "Turkish (Türkçe)",
            LanguageCode::Polish => "Polish (Polski)",
            LanguageCode::Swedish => "Swedish (Svenska)",
            LanguageCode::Greek => "Greek (Ελληνικά)",
        }
    }

    /// Code with the region qualifier translation APIs expect for Chinese
    pub fn regional_code(&self) -> &'static str {
        match self {
            LanguageCode::Chinese => "zh-CN",
            other => other.as_str(),
        }
    }

    /// BCP-47 locale used when asking a speech engine for a voice
    pub fn tts_locale(&self) -> &'static str {
        match self {
            LanguageCode::English => "en-US",
            LanguageCode::Spanish => "es-ES",
            LanguageCode::French => "fr-FR",
            LanguageCode::German => "de-DE",
            LanguageCode::Italian => "it-IT",
            LanguageCode::Portuguese => "pt-BR",
            LanguageCode::Dutch => "nl-NL",
            LanguageCode::Russian => "ru-RU",
            LanguageCode::Chinese => "cmn-CN",
            LanguageCode::Japanese => "ja-JP",
            LanguageCode::Korean => "ko-KR",
            LanguageCode::Hindi => "hi-IN",
            LanguageCode::Thai => "th-TH",
            LanguageCode::Vietnamese => "vi-VN",
            LanguageCode::Arabic => "ar-XA",
            LanguageCode::Turkish => "tr-TR",
            LanguageCode::Polish => "pl-PL",
            LanguageCode::Swedish => "sv-SE",
            LanguageCode::Greek => "el-GR",
        }
    }

    /// Whether learners can pick this language as a translation target
    pub fn is_target(&self) -> bool {
        *self != SOURCE_LANGUAGE
    }

    /// Translation targets in picker order
    pub fn targets() -> impl Iterator<Item = LanguageCode> {
        Self::ALL.into_iter().filter(LanguageCode::is_target)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    /// Accepts bare codes (`es`), any casing, and regional tags (`es-ES`, `zh_CN`)
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let primary = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == primary)
            .ok_or_else(|| UnsupportedLanguage(trimmed.to_string()))
    }
}

/// Entry returned by `GET /api/languages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageOption {
    pub value: String,
    pub label: String,
}

impl From<LanguageCode> for LanguageOption {
    fn from(code: LanguageCode) -> Self {
        Self {
            value: code.as_str().to_string(),
            label: code.display_name().to_string(),
        }
    }
}
