use async_trait::async_trait;

use crate::domain::translation::errors::TranslationError;
use crate::domain::translation::models::DictionaryEntry;
use crate::domain::translation::models::MachineTranslation;
use crate::domain::translation::models::MemoryLanguage;
use crate::domain::translation::models::MemoryTranslation;
use crate::domain::translation::models::SourceLang;
use crate::domain::translation::models::TargetLang;
use crate::domain::translation::models::ThesaurusEntry;
use crate::domain::translation::models::Translation;

/// Port for the aggregated translation operations exposed to inbound adapters.
#[async_trait]
pub trait TranslationServicePort: Send + Sync + 'static {
    /// Translate `text` and, for English targets, enrich it with dictionary
    /// and thesaurus data.
    ///
    /// # Arguments
    /// * `text` - Text to translate
    /// * `from` - Source language, detected by DeepL when `None`
    /// * `to` - Target language
    ///
    /// # Errors
    /// * `InvalidArgument` - Empty text
    /// * Any error of the machine translation call; dictionary and thesaurus
    ///   failures only leave their sections empty
    async fn translate(
        &self,
        text: &str,
        from: Option<SourceLang>,
        to: TargetLang,
    ) -> Result<Translation, TranslationError>;

    /// Look `text` up in the MyMemory English/Polish translation memory.
    async fn memory(
        &self,
        text: &str,
        lang: MemoryLanguage,
    ) -> Result<MemoryTranslation, TranslationError>;
}

/// Machine translation (DeepL).
#[async_trait]
pub trait MachineTranslator: Send + Sync + 'static {
    async fn translate(
        &self,
        text: &str,
        from: Option<SourceLang>,
        to: TargetLang,
    ) -> Result<Vec<MachineTranslation>, TranslationError>;
}

/// English dictionary (Merriam-Webster collegiate).
#[async_trait]
pub trait Dictionary: Send + Sync + 'static {
    /// Entries for `text`.
    ///
    /// # Errors
    /// * `NotFound` - Unknown word, with the upstream spelling suggestions
    async fn lookup(&self, text: &str) -> Result<Vec<DictionaryEntry>, TranslationError>;
}

/// English thesaurus (Merriam-Webster).
#[async_trait]
pub trait Thesaurus: Send + Sync + 'static {
    /// Entries for `text`.
    ///
    /// # Errors
    /// * `NotFound` - Unknown word, with the upstream spelling suggestions
    async fn lookup(&self, text: &str) -> Result<Vec<ThesaurusEntry>, TranslationError>;
}

/// Translation memory (MyMemory).
#[async_trait]
pub trait TranslationMemory: Send + Sync + 'static {
    async fn lookup(
        &self,
        text: &str,
        lang: MemoryLanguage,
    ) -> Result<MemoryTranslation, TranslationError>;
}
