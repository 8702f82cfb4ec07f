use thiserror::Error;

/// Error for language code parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unsupported source language: {0}")]
    UnsupportedSource(String),

    #[error("Unsupported target language: {0}")]
    UnsupportedTarget(String),

    #[error("Unsupported language pair language: {0} (expected en or pl)")]
    UnsupportedMemory(String),
}

/// Top-level error for translation, dictionary and thesaurus lookups
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Invalid language: {0}")]
    Language(#[from] LanguageError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Word not found: {word}")]
    NotFound {
        word: String,
        /// Spelling suggestions offered by the upstream dictionary
        suggestions: Vec<String>,
    },

    #[error("{service} rejected the request ({status}): {message}")]
    Upstream {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("{service} request failed: {message}")]
    Network {
        service: &'static str,
        message: String,
    },

    #[error("Invalid response from {service}: {message}")]
    InvalidResponse {
        service: &'static str,
        message: String,
    },
}
