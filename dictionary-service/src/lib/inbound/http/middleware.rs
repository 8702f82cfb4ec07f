use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub name: String,
    /// The token the request was authenticated with, needed for logout
    pub token: String,
}

/// Middleware that validates session tokens and adds user info to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?.to_string();

    let user = state
        .session_service
        .validate_token(&token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Token validation failed");
            ApiError::from(e).into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        name: user.name,
        token,
    });

    Ok(next.run(req).await)
}

/// Token from `Authorization: Bearer <token>`; a bare token value is accepted too.
fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .unwrap_or(auth_str)
        .trim();

    if token.is_empty() {
        return Err(unauthorized("Missing token"));
    }

    Ok(token)
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
