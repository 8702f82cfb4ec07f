use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::decode;
use super::endpoint;
use super::parse_base_url;
use super::send;
use crate::domain::translation::errors::TranslationError;
use crate::domain::translation::models::DictionaryEntry;
use crate::domain::translation::models::Pronunciation;
use crate::domain::translation::models::ThesaurusEntry;
use crate::domain::translation::ports::Dictionary;
use crate::domain::translation::ports::Thesaurus;

const SERVICE: &str = "merriam-webster";

const AUDIO_URL: &str = "https://media.merriam-webster.com/audio/prons/en/us/mp3";

/// Unknown words come back as a list of spelling suggestions instead of
/// entries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LookupResponse<T> {
    Entries(Vec<T>),
    Suggestions(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Meta {
    id: String,
    offensive: bool,
    syns: Vec<Vec<String>>,
    ants: Vec<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Headword {
    prs: Vec<WirePronunciation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WirePronunciation {
    mw: String,
    sound: Option<Sound>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Sound {
    audio: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Supplement {
    examples: Vec<Example>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Example {
    t: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CollegiateEntry {
    meta: Meta,
    hwi: Headword,
    fl: String,
    suppl: Supplement,
    shortdef: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThesaurusWireEntry {
    meta: Meta,
    fl: String,
    shortdef: Vec<String>,
}

/// Headword without the homograph suffix, e.g. `"bank:2"` -> `"bank"`.
fn headword(id: &str) -> String {
    id.split(':').next().unwrap_or(id).to_string()
}

/// Location of a pronunciation recording on the Merriam-Webster media server.
pub fn audio_url(file: &str) -> Option<String> {
    let first = file.chars().next()?;
    let dir = if file.starts_with("bix") {
        "bix".to_string()
    } else if file.starts_with("gg") {
        "gg".to_string()
    } else if first.is_ascii_digit() || first.is_ascii_punctuation() {
        "number".to_string()
    } else {
        first.to_string()
    };
    Some(format!("{}/{}/{}.mp3", AUDIO_URL, dir, file))
}

impl From<CollegiateEntry> for DictionaryEntry {
    fn from(entry: CollegiateEntry) -> Self {
        Self {
            text: headword(&entry.meta.id),
            offensive: entry.meta.offensive,
            function: entry.fl,
            examples: entry.suppl.examples.into_iter().map(|e| e.t).collect(),
            definitions: entry.shortdef,
            pronunciations: entry
                .hwi
                .prs
                .into_iter()
                .map(|pr| Pronunciation {
                    audio_url: pr.sound.and_then(|sound| audio_url(&sound.audio)),
                    pron: pr.mw,
                })
                .collect(),
        }
    }
}

impl From<ThesaurusWireEntry> for ThesaurusEntry {
    fn from(entry: ThesaurusWireEntry) -> Self {
        Self {
            text: headword(&entry.meta.id),
            synonyms: entry.meta.syns,
            antonyms: entry.meta.ants,
            offensive: entry.meta.offensive,
            function: entry.fl,
            definitions: entry.shortdef,
        }
    }
}

/// Shared request logic of the collegiate dictionary and the thesaurus;
/// they differ only in the reference name and the API key.
#[derive(Clone)]
struct ReferenceClient {
    client: Client,
    base_url: Url,
    key: String,
    reference: &'static str,
}

impl ReferenceClient {
    fn new(
        client: Client,
        base_url: &str,
        key: String,
        reference: &'static str,
    ) -> anyhow::Result<Self> {
        let base_url = parse_base_url(base_url)
            .with_context(|| format!("Invalid Merriam-Webster {} base URL", reference))?;
        Ok(Self {
            client,
            base_url,
            key,
            reference,
        })
    }

    async fn lookup<T: DeserializeOwned>(&self, text: &str) -> Result<Vec<T>, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::InvalidArgument(
                "text must be provided".to_string(),
            ));
        }

        let url = endpoint(
            &self.base_url,
            &["api", "v3", "references", self.reference, "json", text],
        );

        tracing::debug!(
            service = SERVICE,
            reference = self.reference,
            text = %text,
            "Looking up word"
        );

        let body = send(
            SERVICE,
            self.client.get(url).query(&[("key", self.key.as_str())]),
        )
        .await?;

        match decode::<LookupResponse<T>>(SERVICE, &body)? {
            LookupResponse::Entries(entries) if !entries.is_empty() => Ok(entries),
            LookupResponse::Entries(_) => Err(TranslationError::NotFound {
                word: text.to_string(),
                suggestions: Vec::new(),
            }),
            LookupResponse::Suggestions(suggestions) => {
                tracing::debug!(
                    service = SERVICE,
                    text = %text,
                    suggestions = suggestions.len(),
                    "Word not found"
                );
                Err(TranslationError::NotFound {
                    word: text.to_string(),
                    suggestions,
                })
            }
        }
    }
}

/// Merriam-Webster collegiate dictionary adapter.
#[derive(Clone)]
pub struct MerriamWebsterDictionary {
    inner: ReferenceClient,
}

impl MerriamWebsterDictionary {
    pub fn new(client: Client, base_url: &str, key: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            inner: ReferenceClient::new(client, base_url, key.into(), "collegiate")?,
        })
    }
}

#[async_trait]
impl Dictionary for MerriamWebsterDictionary {
    async fn lookup(&self, text: &str) -> Result<Vec<DictionaryEntry>, TranslationError> {
        let entries = self.inner.lookup::<CollegiateEntry>(text).await?;
        Ok(entries.into_iter().map(DictionaryEntry::from).collect())
    }
}

/// Merriam-Webster thesaurus adapter.
#[derive(Clone)]
pub struct MerriamWebsterThesaurus {
    inner: ReferenceClient,
}

impl MerriamWebsterThesaurus {
    pub fn new(client: Client, base_url: &str, key: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            inner: ReferenceClient::new(client, base_url, key.into(), "thesaurus")?,
        })
    }
}

#[async_trait]
impl Thesaurus for MerriamWebsterThesaurus {
    async fn lookup(&self, text: &str) -> Result<Vec<ThesaurusEntry>, TranslationError> {
        let entries = self.inner.lookup::<ThesaurusWireEntry>(text).await?;
        Ok(entries.into_iter().map(ThesaurusEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_url_directories() {
        assert_eq!(
            audio_url("bixbrain01").as_deref(),
            Some("https://media.merriam-webster.com/audio/prons/en/us/mp3/bix/bixbrain01.mp3")
        );
        assert_eq!(
            audio_url("ggboard1").as_deref(),
            Some("https://media.merriam-webster.com/audio/prons/en/us/mp3/gg/ggboard1.mp3")
        );
        assert_eq!(
            audio_url("3d000001").as_deref(),
            Some("https://media.merriam-webster.com/audio/prons/en/us/mp3/number/3d000001.mp3")
        );
        assert_eq!(
            audio_url("_ab00001").as_deref(),
            Some("https://media.merriam-webster.com/audio/prons/en/us/mp3/number/_ab00001.mp3")
        );
        assert_eq!(
            audio_url("brain001").as_deref(),
            Some("https://media.merriam-webster.com/audio/prons/en/us/mp3/b/brain001.mp3")
        );
        assert_eq!(audio_url(""), None);
    }

    #[test]
    fn test_headword_strips_homograph() {
        assert_eq!(headword("bank:2"), "bank");
        assert_eq!(headword("brain"), "brain");
        assert_eq!(headword(""), "");
    }

    #[test]
    fn test_decode_collegiate_entry() {
        let body = r#"[{
            "meta": {"id": "brain:1", "offensive": false, "stems": ["brain"]},
            "hwi": {"hw": "brain", "prs": [{"mw": "ˈbrān", "sound": {"audio": "brain001"}}, {"mw": "ˈbrān"}]},
            "fl": "noun",
            "suppl": {"examples": [{"t": "use your {it}brain{/it}"}]},
            "shortdef": ["the portion of the vertebrate central nervous system"]
        }]"#;

        let response: LookupResponse<CollegiateEntry> = decode(SERVICE, body).unwrap();
        let LookupResponse::Entries(entries) = response else {
            panic!("expected entries");
        };
        let entry = DictionaryEntry::from(entries.into_iter().next().unwrap());

        assert_eq!(entry.text, "brain");
        assert_eq!(entry.function, "noun");
        assert_eq!(entry.examples, vec!["use your {it}brain{/it}"]);
        assert_eq!(entry.pronunciations.len(), 2);
        assert!(entry.pronunciations[0].audio_url.is_some());
        assert_eq!(entry.pronunciations[1].audio_url, None);
    }

    #[test]
    fn test_decode_suggestions() {
        let response: LookupResponse<CollegiateEntry> =
            decode(SERVICE, r#"["brain", "brainy"]"#).unwrap();
        assert!(matches!(
            response,
            LookupResponse::Suggestions(ref s) if s == &["brain", "brainy"]
        ));
    }
}
