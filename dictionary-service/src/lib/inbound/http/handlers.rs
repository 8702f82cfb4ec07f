use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::session::errors::SessionError;
use crate::domain::translation::errors::TranslationError;

pub mod login;
pub mod logout;
pub mod memory;
pub mod ping;
pub mod register;
pub mod remove_user;
pub mod translate;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        // 204 must not carry a body.
        if self.0 == StatusCode::NO_CONTENT {
            return self.0.into_response();
        }
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    BadGateway(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidArgument(_) => ApiError::UnprocessableEntity(err.to_string()),
            SessionError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            SessionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SessionError::InvalidCredentials
            | SessionError::InvalidToken(_)
            | SessionError::Expired
            | SessionError::Blacklisted => ApiError::Unauthorized(err.to_string()),
            SessionError::Io { .. } | SessionError::Hash(_) => {
                tracing::error!(error = %err, "Session operation failed");
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::Language(_) | TranslationError::InvalidArgument(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            TranslationError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            TranslationError::Upstream { .. }
            | TranslationError::Network { .. }
            | TranslationError::InvalidResponse { .. } => {
                tracing::error!(error = %err, "Upstream translation failed");
                ApiError::BadGateway(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
