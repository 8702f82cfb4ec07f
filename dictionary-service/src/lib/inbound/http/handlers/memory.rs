use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::translation::errors::TranslationError;
use crate::domain::translation::models::MemoryLanguage;
use crate::domain::translation::models::MemoryTranslation;
use crate::inbound::http::router::AppState;

pub async fn memory(
    State(state): State<AppState>,
    Query(params): Query<MemoryQuery>,
) -> Result<ApiSuccess<MemoryTranslation>, ApiError> {
    let lang = params
        .lang
        .as_deref()
        .unwrap_or("en")
        .parse::<MemoryLanguage>()
        .map_err(TranslationError::from)?;

    state
        .translation_service
        .memory(&params.text, lang)
        .await
        .map_err(ApiError::from)
        .map(|translation| ApiSuccess::new(StatusCode::OK, translation))
}

/// Raw `?text=&lang=` parameters; `lang` defaults to English.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryQuery {
    #[serde(default)]
    text: String,
    lang: Option<String>,
}
