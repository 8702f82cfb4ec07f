use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use super::decode;
use super::endpoint;
use super::parse_base_url;
use super::send;
use crate::domain::translation::errors::TranslationError;
use crate::domain::translation::models::Alternative;
use crate::domain::translation::models::MemoryLanguage;
use crate::domain::translation::models::MemoryTranslation;
use crate::domain::translation::ports::TranslationMemory;

const SERVICE: &str = "mymemory";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetResponse {
    response_data: ResponseData,
    /// Sent as a number or as a numeric string depending on the endpoint.
    #[serde(default)]
    response_status: Value,
    /// A list of matches, or an empty string on errors.
    #[serde(default)]
    matches: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    #[serde(default)]
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct Match {
    #[serde(default)]
    segment: String,
    #[serde(default)]
    translation: String,
}

impl GetResponse {
    fn status(&self) -> Option<u64> {
        match &self.response_status {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// MyMemory translation memory adapter.
#[derive(Clone)]
pub struct MyMemoryClient {
    client: Client,
    base_url: Url,
}

impl MyMemoryClient {
    pub fn new(client: Client, base_url: &str) -> anyhow::Result<Self> {
        let base_url = parse_base_url(base_url).context("Invalid MyMemory base URL")?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl TranslationMemory for MyMemoryClient {
    async fn lookup(
        &self,
        text: &str,
        lang: MemoryLanguage,
    ) -> Result<MemoryTranslation, TranslationError> {
        let url = endpoint(&self.base_url, &["get"]);

        tracing::debug!(
            service = SERVICE,
            text = %text,
            langpair = lang.lang_pair(),
            "Querying translation memory"
        );

        let body = send(
            SERVICE,
            self.client
                .get(url)
                .query(&[("q", text), ("langpair", lang.lang_pair())]),
        )
        .await?;

        let response: GetResponse = decode(SERVICE, &body)?;

        // Quota and argument errors arrive with HTTP 200.
        if let Some(status) = response.status().filter(|status| *status != 200) {
            return Err(TranslationError::Upstream {
                service: SERVICE,
                status: u16::try_from(status).unwrap_or(u16::MAX),
                message: response.response_data.translated_text,
            });
        }

        let matches: Vec<Match> = match response.matches {
            Value::Array(_) => serde_json::from_value(response.matches).map_err(|e| {
                TranslationError::InvalidResponse {
                    service: SERVICE,
                    message: e.to_string(),
                }
            })?,
            _ => Vec::new(),
        };

        Ok(MemoryTranslation {
            translated: response.response_data.translated_text,
            alternatives: matches
                .into_iter()
                .map(|m| Alternative {
                    text: m.segment,
                    translation: m.translation,
                })
                .collect(),
        })
    }
}
