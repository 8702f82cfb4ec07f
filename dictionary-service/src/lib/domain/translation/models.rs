use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::translation::errors::LanguageError;

macro_rules! language_codes {
    ($(#[$meta:meta])* $name:ident, $error:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// DeepL language code
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl FromStr for $name {
            type Err = LanguageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let upper = s.trim().to_ascii_uppercase();
                match upper.as_str() {
                    $($code => Ok($name::$variant),)+
                    _ => Err(LanguageError::$error(s.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

language_codes! {
    /// Language of the text sent to DeepL
    SourceLang, UnsupportedSource {
        Bulgarian => "BG",
        Czech => "CS",
        Danish => "DA",
        German => "DE",
        Greek => "EL",
        English => "EN",
        Spanish => "ES",
        Estonian => "ET",
        Finnish => "FI",
        French => "FR",
        Hungarian => "HU",
        Indonesian => "ID",
        Italian => "IT",
        Japanese => "JA",
        Lithuanian => "LT",
        Latvian => "LV",
        Dutch => "NL",
        Polish => "PL",
        Portuguese => "PT",
        Romanian => "RO",
        Russian => "RU",
        Slovak => "SK",
        Slovenian => "SL",
        Swedish => "SV",
        Turkish => "TR",
        Chinese => "ZH",
    }
}

language_codes! {
    /// Language DeepL translates into
    TargetLang, UnsupportedTarget {
        Bulgarian => "BG",
        Czech => "CS",
        Danish => "DA",
        German => "DE",
        Greek => "EL",
        EnglishBritish => "EN-GB",
        EnglishAmerican => "EN-US",
        Spanish => "ES",
        Estonian => "ET",
        Finnish => "FI",
        French => "FR",
        Hungarian => "HU",
        Indonesian => "ID",
        Italian => "IT",
        Japanese => "JA",
        Lithuanian => "LT",
        Latvian => "LV",
        Dutch => "NL",
        Polish => "PL",
        Portuguese => "PT-PT",
        Brazilian => "PT-BR",
        Romanian => "RO",
        Russian => "RU",
        Slovak => "SK",
        Slovenian => "SL",
        Swedish => "SV",
        Turkish => "TR",
        Chinese => "ZH",
    }
}

impl TargetLang {
    /// Merriam-Webster lookups only make sense for English output.
    pub fn is_english(&self) -> bool {
        matches!(self, TargetLang::EnglishAmerican | TargetLang::EnglishBritish)
    }
}

/// Source language of a MyMemory lookup; the pair is always English/Polish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryLanguage {
    English,
    Polish,
}

impl MemoryLanguage {
    /// MyMemory `langpair` parameter
    pub fn lang_pair(&self) -> &'static str {
        match self {
            MemoryLanguage::English => "en|pl",
            MemoryLanguage::Polish => "pl|en",
        }
    }
}

impl FromStr for MemoryLanguage {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(MemoryLanguage::English),
            "pl" | "polish" => Ok(MemoryLanguage::Polish),
            _ => Err(LanguageError::UnsupportedMemory(s.to_string())),
        }
    }
}

/// One DeepL translation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineTranslation {
    pub detected_source_language: String,
    pub text: String,
}

/// Pronunciation of a dictionary headword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pronunciation {
    pub pron: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// Normalized Merriam-Webster collegiate dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Headword with the homograph suffix removed
    pub text: String,
    pub offensive: bool,
    pub function: String,
    pub examples: Vec<String>,
    pub definitions: Vec<String>,
    pub pronunciations: Vec<Pronunciation>,
}

/// Normalized Merriam-Webster thesaurus entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThesaurusEntry {
    pub text: String,
    pub synonyms: Vec<Vec<String>>,
    pub antonyms: Vec<Vec<String>>,
    pub offensive: bool,
    pub function: String,
    pub definitions: Vec<String>,
}

/// Segment/translation pair suggested by MyMemory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternative {
    pub text: String,
    pub translation: String,
}

/// MyMemory lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryTranslation {
    pub translated: String,
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeeplTranslate {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub offensive: bool,
    pub function: String,
    pub examples: Vec<String>,
    pub definition: Vec<String>,
    pub audio: Vec<Pronunciation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DictionaryTranslate {
    pub defs: Vec<Definition>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThesaurusTranslate {
    pub text: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub offensive: bool,
    pub function: String,
    pub definition: Vec<String>,
}

/// Everything known about a text: DeepL output, and for English targets the
/// dictionary and thesaurus entries of each translated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub deepl: Vec<DeeplTranslate>,
    pub dictionary: Option<DictionaryTranslate>,
    pub thesaurus: Option<Vec<ThesaurusTranslate>>,
}
