use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::translation::errors::LanguageError;
use crate::domain::translation::models::SourceLang;
use crate::domain::translation::models::TargetLang;
use crate::domain::translation::models::Translation;
use crate::inbound::http::router::AppState;

pub async fn translate(
    State(state): State<AppState>,
    Query(params): Query<TranslateQuery>,
) -> Result<ApiSuccess<Translation>, ApiError> {
    let request = params.try_into_request()?;

    state
        .translation_service
        .translate(&request.text, request.from, request.to)
        .await
        .map_err(ApiError::from)
        .map(|translation| ApiSuccess::new(StatusCode::OK, translation))
}

/// Raw `?text=&from=&to=` parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslateQuery {
    #[serde(default)]
    text: String,
    from: Option<String>,
    to: Option<String>,
}

struct TranslateRequest {
    text: String,
    from: Option<SourceLang>,
    to: TargetLang,
}

#[derive(Debug, Clone, Error)]
enum ParseTranslateQueryError {
    #[error("Target language must be provided")]
    MissingTarget,

    #[error(transparent)]
    Language(#[from] LanguageError),
}

impl TranslateQuery {
    fn try_into_request(self) -> Result<TranslateRequest, ParseTranslateQueryError> {
        // An empty `from` asks DeepL to detect the source language.
        let from = match self.from.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(code) => Some(code.parse::<SourceLang>()?),
        };
        let to = self
            .to
            .as_deref()
            .filter(|code| !code.trim().is_empty())
            .ok_or(ParseTranslateQueryError::MissingTarget)?
            .parse::<TargetLang>()?;

        Ok(TranslateRequest {
            text: self.text,
            from,
            to,
        })
    }
}

impl From<ParseTranslateQueryError> for ApiError {
    fn from(err: ParseTranslateQueryError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
