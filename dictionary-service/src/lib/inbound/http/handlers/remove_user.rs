use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn remove_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    if user.name != name {
        tracing::warn!(caller = %user.name, target = %name, "Refused to remove another user");
        return Err(ApiError::Forbidden(
            "Users can only remove themselves".to_string(),
        ));
    }

    state
        .session_service
        .remove(&name)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
