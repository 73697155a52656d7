use crate::domain::language::LanguageCode;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of tips shown per category
pub const DEFAULT_TIPS_PER_CATEGORY: usize = 3;

/// Pronunciation guidance for one target language
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTips {
    pub key_sounds: &'static [&'static str],
    pub common_mistakes: &'static [&'static str],
}

/// Random subset of a language's tips, shown after a successful translation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedTips {
    pub key_sounds: Vec<String>,
    pub common_mistakes: Vec<String>,
}

const SPANISH: LanguageTips = LanguageTips {
    key_sounds: &[
        "Roll your 'r' sounds in words like 'perro' (dog)",
        "The 'h' is always silent in Spanish",
        "The 'ñ' sounds like 'ny' in 'canyon'",
        "The 'j' sounds like a strong 'h' as in 'jamón'",
        "The 'll' sounds like 'y' in 'yellow'",
        "The 'z' is pronounced like 'th' in 'think' (in Spain)",
        "The 'b' and 'v' sound almost identical",
        "The 'c' before 'e' and 'i' sounds like 'th' (in Spain)",
        "The 'gu' before 'e' and 'i' sounds like 'g' in 'get'",
        "The 'd' between vowels is softer than in English",
    ],
    common_mistakes: &[
        "Don't pronounce 'h' at the start of words",
        "The 'j' sounds like a strong 'h' in English",
        "Don't add 'e' before words starting with 's'",
        "Don't pronounce 'll' like an 'l'",
        "Don't pronounce 'v' differently from 'b'",
        "Don't skip rolling your 'r's when required",
        "Don't pronounce 'e' like the English 'ay'",
        "Don't pronounce final 'd' like 't'",
        "Don't stress the wrong syllable",
        "Don't pronounce 'i' like the English 'eye'",
    ],
};

const FRENCH: LanguageTips = LanguageTips {
    key_sounds: &[
        "Practice the nasal sounds: 'an', 'en', 'in', 'on'",
        "The 'r' is pronounced in the back of the throat",
        "The 'u' sound is made with rounded lips",
        "Silent letters at the end of words",
        "The 'ou' sounds like 'oo' in 'food'",
        "The 'ai' sounds like 'e' in 'bed'",
        "The 'oi' sounds like 'wa' in 'water'",
        "The 'gn' sounds like 'ny' in 'canyon'",
        "The 'è' sounds like 'e' in 'bed'",
        "The 'eu' has no English equivalent",
    ],
    common_mistakes: &[
        "Don't pronounce final consonants (except c, r, f, l)",
        "Link words together (liaison) properly",
        "Keep intonation relatively flat",
        "Don't pronounce 'h' at the start of words",
        "Don't add English 'r' sound at the end of words",
        "Don't pronounce all written vowels separately",
        "Don't skip the liaison between words",
        "Don't stress syllables too strongly",
        "Don't pronounce 'th' like in English",
        "Don't make 'u' sound like 'oo'",
    ],
};

const GERMAN: LanguageTips = LanguageTips {
    key_sounds: &[
        "Practice the 'ü' sound (like 'ee' with rounded lips)",
        "The 'ch' after back vowels is like clearing throat",
        "The 'r' is pronounced in the back of the throat",
        "The 'ö' sound (like 'e' with rounded lips)",
        "The 'ei' sounds like 'eye'",
        "The 'ä' sounds like 'e' in 'bed'",
        "The 'z' sounds like 'ts'",
        "The 'w' sounds like English 'v'",
        "The 'v' sounds like English 'f'",
        "The 'j' sounds like English 'y'",
    ],
    common_mistakes: &[
        "Don't pronounce 'w' like in English",
        "Don't skip the umlaut sounds",
        "Don't pronounce 'v' like in English",
        "Don't pronounce 'z' like in English",
        "Don't ignore word stress",
        "Don't pronounce 'ch' like 'k'",
        "Don't pronounce 'j' like in English",
        "Don't pronounce 'ei' like 'ee'",
        "Don't pronounce 'ie' like 'eye'",
        "Don't ignore case in nouns",
    ],
};

/// Immutable lookup of pronunciation tips per language
pub struct TipsCatalog {
    tips: HashMap<LanguageCode, LanguageTips>,
    per_category: usize,
}

impl TipsCatalog {
    pub fn new(tips: HashMap<LanguageCode, LanguageTips>, per_category: usize) -> Self {
        Self { tips, per_category }
    }

    /// Catalog with the bundled Spanish, French and German tips
    pub fn builtin(per_category: usize) -> Self {
        let tips = HashMap::from([
            (LanguageCode::Spanish, SPANISH),
            (LanguageCode::French, FRENCH),
            (LanguageCode::German, GERMAN),
        ]);
        Self::new(tips, per_category)
    }

    pub fn tips_for(&self, language: LanguageCode) -> Option<&LanguageTips> {
        self.tips.get(&language)
    }

    pub fn has_tips(&self, language: LanguageCode) -> bool {
        self.tips.contains_key(&language)
    }

    /// Pick up to `per_category` distinct tips from each category.
    /// Returns `None` for languages without tips.
    pub fn select(&self, language: LanguageCode) -> Option<SelectedTips> {
        let tips = self.tips_for(language)?;
        let mut rng = rand::thread_rng();

        let pick = |items: &[&str], rng: &mut rand::rngs::ThreadRng| -> Vec<String> {
            items
                .choose_multiple(rng, self.per_category)
                .map(|s| s.to_string())
                .collect()
        };

        Some(SelectedTips {
            key_sounds: pick(tips.key_sounds, &mut rng),
            common_mistakes: pick(tips.common_mistakes, &mut rng),
        })
    }
}

impl Default for TipsCatalog {
    fn default() -> Self {
        Self::builtin(DEFAULT_TIPS_PER_CATEGORY)
    }
}
