use anyhow::Context;
use async_trait::async_trait;
use reqwest::header;
use reqwest::Client;
use reqwest::Url;
use serde::Deserialize;

use super::decode;
use super::endpoint;
use super::parse_base_url;
use super::send;
use crate::domain::translation::errors::TranslationError;
use crate::domain::translation::models::MachineTranslation;
use crate::domain::translation::models::SourceLang;
use crate::domain::translation::models::TargetLang;
use crate::domain::translation::ports::MachineTranslator;

const SERVICE: &str = "deepl";

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslationData>,
}

#[derive(Debug, Deserialize)]
struct TranslationData {
    #[serde(default)]
    detected_source_language: String,
    text: String,
}

/// DeepL `/v2/translate` adapter.
#[derive(Clone)]
pub struct DeeplClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl DeeplClient {
    pub fn new(client: Client, base_url: &str, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let base_url = parse_base_url(base_url).context("Invalid DeepL base URL")?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl MachineTranslator for DeeplClient {
    async fn translate(
        &self,
        text: &str,
        from: Option<SourceLang>,
        to: TargetLang,
    ) -> Result<Vec<MachineTranslation>, TranslationError> {
        let url = endpoint(&self.base_url, &["v2", "translate"]);

        let mut form = vec![("text", text), ("target_lang", to.code())];
        if let Some(from) = from {
            form.push(("source_lang", from.code()));
        }

        tracing::debug!(
            service = SERVICE,
            text = %text,
            target = %to,
            "Requesting translation"
        );

        let body = send(
            SERVICE,
            self.client
                .post(url)
                .header(header::AUTHORIZATION, format!("DeepL-Auth-Key {}", self.api_key))
                .form(&form),
        )
        .await?;

        let response: TranslateResponse = decode(SERVICE, &body)?;

        Ok(response
            .translations
            .into_iter()
            .map(|translation| MachineTranslation {
                detected_source_language: translation.detected_source_language,
                text: translation.text,
            })
            .collect())
    }
}
