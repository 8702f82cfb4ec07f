use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::translation::errors::TranslationError;
use crate::domain::translation::models::DeeplTranslate;
use crate::domain::translation::models::Definition;
use crate::domain::translation::models::DictionaryTranslate;
use crate::domain::translation::models::MemoryLanguage;
use crate::domain::translation::models::MemoryTranslation;
use crate::domain::translation::models::SourceLang;
use crate::domain::translation::models::TargetLang;
use crate::domain::translation::models::ThesaurusTranslate;
use crate::domain::translation::models::Translation;
use crate::domain::translation::ports::Dictionary;
use crate::domain::translation::ports::MachineTranslator;
use crate::domain::translation::ports::Thesaurus;
use crate::domain::translation::ports::TranslationMemory;
use crate::domain::translation::ports::TranslationServicePort;

/// Domain service combining machine translation with dictionary data.
pub struct TranslationService<MT, D, TH, TM>
where
    MT: MachineTranslator,
    D: Dictionary,
    TH: Thesaurus,
    TM: TranslationMemory,
{
    translator: Arc<MT>,
    dictionary: Arc<D>,
    thesaurus: Arc<TH>,
    memory: Arc<TM>,
}

impl<MT, D, TH, TM> TranslationService<MT, D, TH, TM>
where
    MT: MachineTranslator,
    D: Dictionary,
    TH: Thesaurus,
    TM: TranslationMemory,
{
    pub fn new(
        translator: Arc<MT>,
        dictionary: Arc<D>,
        thesaurus: Arc<TH>,
        memory: Arc<TM>,
    ) -> Self {
        Self {
            translator,
            dictionary,
            thesaurus,
            memory,
        }
    }

    async fn definitions(&self, translations: &[DeeplTranslate]) -> DictionaryTranslate {
        let mut result = DictionaryTranslate::default();

        for translation in translations {
            let text = &translation.text;
            let entries = match self.dictionary.lookup(text).await {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::debug!(text = %text, error = %e, "Definition not found");
                    continue;
                }
            };

            for entry in entries {
                if &entry.text != text {
                    // Related headword, e.g. a phrase containing the text.
                    result.synonyms.push(entry.text);
                    continue;
                }
                result.defs.push(Definition {
                    offensive: entry.offensive,
                    function: entry.function,
                    examples: entry.examples,
                    definition: entry.definitions,
                    audio: entry.pronunciations,
                });
            }
        }

        result
    }

    async fn thesaurus_entries(&self, translations: &[DeeplTranslate]) -> Vec<ThesaurusTranslate> {
        let mut result = Vec::new();

        for translation in translations {
            let text = &translation.text;
            let entries = match self.thesaurus.lookup(text).await {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::debug!(text = %text, error = %e, "Thesaurus entry not found");
                    continue;
                }
            };

            // One entry per translated text is enough.
            if let Some(entry) = entries.into_iter().find(|entry| &entry.text == text) {
                result.push(ThesaurusTranslate {
                    text: entry.text,
                    synonyms: entry.synonyms.into_iter().next().unwrap_or_default(),
                    antonyms: entry.antonyms.into_iter().next().unwrap_or_default(),
                    offensive: entry.offensive,
                    function: entry.function,
                    definition: entry.definitions,
                });
            }
        }

        result
    }
}

#[async_trait]
impl<MT, D, TH, TM> TranslationServicePort for TranslationService<MT, D, TH, TM>
where
    MT: MachineTranslator,
    D: Dictionary,
    TH: Thesaurus,
    TM: TranslationMemory,
{
    async fn translate(
        &self,
        text: &str,
        from: Option<SourceLang>,
        to: TargetLang,
    ) -> Result<Translation, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::InvalidArgument(
                "text must be provided".to_string(),
            ));
        }

        let deepl: Vec<DeeplTranslate> = self
            .translator
            .translate(text, from, to)
            .await?
            .into_iter()
            .map(|translation| DeeplTranslate {
                text: translation.text,
            })
            .collect();

        tracing::info!(
            text = %text,
            target = %to,
            translations = deepl.len(),
            "Machine translation received"
        );

        if !to.is_english() {
            return Ok(Translation {
                deepl,
                dictionary: None,
                thesaurus: None,
            });
        }

        let dictionary = self.definitions(&deepl).await;
        let thesaurus = self.thesaurus_entries(&deepl).await;

        Ok(Translation {
            deepl,
            dictionary: Some(dictionary),
            thesaurus: Some(thesaurus),
        })
    }

    async fn memory(
        &self,
        text: &str,
        lang: MemoryLanguage,
    ) -> Result<MemoryTranslation, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::InvalidArgument(
                "text must be provided".to_string(),
            ));
        }

        self.memory.lookup(text, lang).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::translation::models::Alternative;
    use crate::domain::translation::models::DictionaryEntry;
    use crate::domain::translation::models::MachineTranslation;
    use crate::domain::translation::models::Pronunciation;
    use crate::domain::translation::models::ThesaurusEntry;

    mock! {
        pub TestTranslator {}

        #[async_trait]
        impl MachineTranslator for TestTranslator {
            async fn translate(
                &self,
                text: &str,
                from: Option<SourceLang>,
                to: TargetLang,
            ) -> Result<Vec<MachineTranslation>, TranslationError>;
        }
    }

    mock! {
        pub TestDictionary {}

        #[async_trait]
        impl Dictionary for TestDictionary {
            async fn lookup(&self, text: &str) -> Result<Vec<DictionaryEntry>, TranslationError>;
        }
    }

    mock! {
        pub TestThesaurus {}

        #[async_trait]
        impl Thesaurus for TestThesaurus {
            async fn lookup(&self, text: &str) -> Result<Vec<ThesaurusEntry>, TranslationError>;
        }
    }

    mock! {
        pub TestMemory {}

        #[async_trait]
        impl TranslationMemory for TestMemory {
            async fn lookup(
                &self,
                text: &str,
                lang: MemoryLanguage,
            ) -> Result<MemoryTranslation, TranslationError>;
        }
    }

    type TestService =
        TranslationService<MockTestTranslator, MockTestDictionary, MockTestThesaurus, MockTestMemory>;

    fn service(
        translator: MockTestTranslator,
        dictionary: MockTestDictionary,
        thesaurus: MockTestThesaurus,
        memory: MockTestMemory,
    ) -> TestService {
        TranslationService::new(
            Arc::new(translator),
            Arc::new(dictionary),
            Arc::new(thesaurus),
            Arc::new(memory),
        )
    }

    fn translator_returning(text: &'static str) -> MockTestTranslator {
        let mut translator = MockTestTranslator::new();
        translator.expect_translate().times(1).returning(move |_, _, _| {
            Ok(vec![MachineTranslation {
                detected_source_language: "PL".to_string(),
                text: text.to_string(),
            }])
        });
        translator
    }

    fn dictionary_entry(text: &str) -> DictionaryEntry {
        DictionaryEntry {
            text: text.to_string(),
            offensive: false,
            function: "noun".to_string(),
            examples: vec!["use your brain".to_string()],
            definitions: vec!["the portion of the vertebrate central nervous system".to_string()],
            pronunciations: vec![Pronunciation {
                pron: "ˈbrān".to_string(),
                audio_url: Some(
                    "https://media.merriam-webster.com/audio/prons/en/us/mp3/b/brain001.mp3"
                        .to_string(),
                ),
            }],
        }
    }

    fn thesaurus_entry(text: &str) -> ThesaurusEntry {
        ThesaurusEntry {
            text: text.to_string(),
            synonyms: vec![
                vec!["intellect".to_string(), "mind".to_string()],
                vec!["genius".to_string()],
            ],
            antonyms: vec![vec!["idiot".to_string()]],
            offensive: false,
            function: "noun".to_string(),
            definitions: vec!["the ability to learn".to_string()],
        }
    }

    #[tokio::test]
    async fn test_non_english_target_skips_dictionary() {
        let mut translator = MockTestTranslator::new();
        translator
            .expect_translate()
            .with(eq("brain"), eq(None::<SourceLang>), eq(TargetLang::Polish))
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![MachineTranslation {
                    detected_source_language: "EN".to_string(),
                    text: "mózg".to_string(),
                }])
            });
        let mut dictionary = MockTestDictionary::new();
        dictionary.expect_lookup().times(0);
        let mut thesaurus = MockTestThesaurus::new();
        thesaurus.expect_lookup().times(0);

        let service = service(translator, dictionary, thesaurus, MockTestMemory::new());

        let translation = service
            .translate("brain", None, TargetLang::Polish)
            .await
            .unwrap();

        assert_eq!(
            translation,
            Translation {
                deepl: vec![DeeplTranslate {
                    text: "mózg".to_string()
                }],
                dictionary: None,
                thesaurus: None,
            }
        );
    }

    #[tokio::test]
    async fn test_english_target_collects_definitions_and_synonyms() {
        let translator = translator_returning("brain");
        let mut dictionary = MockTestDictionary::new();
        dictionary
            .expect_lookup()
            .with(eq("brain"))
            .times(1)
            .returning(|_| Ok(vec![dictionary_entry("brain"), dictionary_entry("brain trust")]));
        let mut thesaurus = MockTestThesaurus::new();
        thesaurus
            .expect_lookup()
            .with(eq("brain"))
            .times(1)
            .returning(|_| Ok(vec![thesaurus_entry("brainy"), thesaurus_entry("brain")]));

        let service = service(translator, dictionary, thesaurus, MockTestMemory::new());

        let translation = service
            .translate("mózg", Some(SourceLang::Polish), TargetLang::EnglishBritish)
            .await
            .unwrap();

        let dictionary = translation.dictionary.unwrap();
        assert_eq!(dictionary.defs.len(), 1);
        assert_eq!(dictionary.defs[0].function, "noun");
        assert_eq!(dictionary.defs[0].audio.len(), 1);
        assert_eq!(dictionary.synonyms, vec!["brain trust".to_string()]);

        let thesaurus = translation.thesaurus.unwrap();
        assert_eq!(thesaurus.len(), 1);
        assert_eq!(thesaurus[0].text, "brain");
        assert_eq!(thesaurus[0].synonyms, vec!["intellect", "mind"]);
        assert_eq!(thesaurus[0].antonyms, vec!["idiot"]);
    }

    #[tokio::test]
    async fn test_lookup_failures_leave_sections_empty() {
        let translator = translator_returning("brane");
        let mut dictionary = MockTestDictionary::new();
        dictionary.expect_lookup().times(1).returning(|text| {
            Err(TranslationError::NotFound {
                word: text.to_string(),
                suggestions: vec!["brain".to_string()],
            })
        });
        let mut thesaurus = MockTestThesaurus::new();
        thesaurus.expect_lookup().times(1).returning(|_| {
            Err(TranslationError::Network {
                service: "merriam-webster",
                message: "connection refused".to_string(),
            })
        });

        let service = service(translator, dictionary, thesaurus, MockTestMemory::new());

        let translation = service
            .translate("mózg", None, TargetLang::EnglishAmerican)
            .await
            .unwrap();

        assert_eq!(translation.dictionary, Some(DictionaryTranslate::default()));
        assert_eq!(translation.thesaurus, Some(vec![]));
    }

    #[tokio::test]
    async fn test_translator_failure_is_error() {
        let mut translator = MockTestTranslator::new();
        translator.expect_translate().times(1).returning(|_, _, _| {
            Err(TranslationError::Upstream {
                service: "deepl",
                status: 403,
                message: "Wrong endpoint".to_string(),
            })
        });

        let service = service(
            translator,
            MockTestDictionary::new(),
            MockTestThesaurus::new(),
            MockTestMemory::new(),
        );

        let result = service.translate("brain", None, TargetLang::Polish).await;
        assert!(matches!(
            result,
            Err(TranslationError::Upstream { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let mut translator = MockTestTranslator::new();
        translator.expect_translate().times(0);
        let mut memory = MockTestMemory::new();
        memory.expect_lookup().times(0);

        let service = service(
            translator,
            MockTestDictionary::new(),
            MockTestThesaurus::new(),
            memory,
        );

        assert!(matches!(
            service.translate("  ", None, TargetLang::Polish).await,
            Err(TranslationError::InvalidArgument(_))
        ));
        assert!(matches!(
            service.memory("", MemoryLanguage::English).await,
            Err(TranslationError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_lookup() {
        let mut memory = MockTestMemory::new();
        memory
            .expect_lookup()
            .with(eq("dom"), eq(MemoryLanguage::Polish))
            .times(1)
            .returning(|_, _| {
                Ok(MemoryTranslation {
                    translated: "house".to_string(),
                    alternatives: vec![Alternative {
                        text: "dom".to_string(),
                        translation: "home".to_string(),
                    }],
                })
            });

        let service = service(
            MockTestTranslator::new(),
            MockTestDictionary::new(),
            MockTestThesaurus::new(),
            memory,
        );

        let result = service.memory("dom", MemoryLanguage::Polish).await.unwrap();
        assert_eq!(result.translated, "house");
        assert_eq!(result.alternatives.len(), 1);
    }
}
