//! HTTP adapters for the external translation and dictionary APIs.
//!
//! All clients share one `reqwest::Client`; cloning it only clones the
//! handle to the connection pool.

use std::time::Duration;

use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::domain::translation::errors::TranslationError;

pub mod deepl;
pub mod merriam_webster;
pub mod mymemory;

pub use deepl::DeeplClient;
pub use merriam_webster::MerriamWebsterDictionary;
pub use merriam_webster::MerriamWebsterThesaurus;
pub use mymemory::MyMemoryClient;

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Build the HTTP client shared by all upstream adapters
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

/// Parse a configured base URL, rejecting ones that cannot carry a path.
pub(crate) fn parse_base_url(base_url: &str) -> anyhow::Result<Url> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        anyhow::bail!("{} cannot be used as a base URL", base_url);
    }
    Ok(url)
}

/// `base` with `segments` appended, each percent-encoded.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_LENGTH {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
        format!("{}... (truncated, {} total bytes)", head, body.len())
    }
}

/// Send `request` and return the body of a successful response.
pub(crate) async fn send(
    service: &'static str,
    request: RequestBuilder,
) -> Result<String, TranslationError> {
    let response = request.send().await.map_err(|e| {
        tracing::warn!(service, error = %e, "Upstream request failed");
        TranslationError::Network {
            service,
            message: e.to_string(),
        }
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| TranslationError::Network {
        service,
        message: e.to_string(),
    })?;

    if !status.is_success() {
        tracing::warn!(
            service,
            status = status.as_u16(),
            "Upstream rejected the request"
        );
        return Err(TranslationError::Upstream {
            service,
            status: status.as_u16(),
            message: truncate_body(&body),
        });
    }

    Ok(body)
}

pub(crate) fn decode<T: DeserializeOwned>(
    service: &'static str,
    body: &str,
) -> Result<T, TranslationError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!(service, error = %e, "Failed to decode upstream response");
        TranslationError::InvalidResponse {
            service,
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = parse_base_url("http://localhost:8080").unwrap();
        let url = endpoint(&base, &["api", "json", "ice cream/cone"]);
        assert_eq!(url.as_str(), "http://localhost:8080/api/json/ice%20cream%2Fcone");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = parse_base_url("http://localhost:8080/proxy/").unwrap();
        let url = endpoint(&base, &["get"]);
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/get");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        let long = "ż".repeat(MAX_ERROR_BODY_LENGTH + 1);
        let truncated = truncate_body(&long);
        assert!(truncated.starts_with(&"ż".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(truncated.ends_with("total bytes)"));
    }
}
