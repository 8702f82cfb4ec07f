use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::register::CredentialsRequestBody;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::errors::SessionError;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let credentials = body.into_credentials();

    // Unknown names are indistinguishable from wrong passwords.
    let token = state
        .session_service
        .issue_token(&credentials)
        .await
        .map_err(|e| match e {
            SessionError::NotFound(_) | SessionError::InvalidCredentials => {
                tracing::warn!(name = %credentials.name, "Login rejected");
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            name: credentials.name,
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub name: String,
    pub token: String,
}
