use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::Credentials;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let credentials = body.into_credentials();

    state
        .session_service
        .register(&credentials)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                RegisterResponseData {
                    name: credentials.name,
                },
            )
        })
}

/// `{name, password}` body shared by registration and login
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequestBody {
    name: String,
    password: String,
}

impl CredentialsRequestBody {
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.name, self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub name: String,
}
