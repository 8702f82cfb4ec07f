use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::memory::memory;
use super::handlers::ping::ping;
use super::handlers::register::register;
use super::handlers::remove_user::remove_user;
use super::handlers::translate::translate;
use super::middleware::authenticate as auth_middleware;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::translation::ports::TranslationServicePort;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<dyn SessionServicePort>,
    pub translation_service: Arc<dyn TranslationServicePort>,
}

pub fn create_router(
    session_service: Arc<dyn SessionServicePort>,
    translation_service: Arc<dyn TranslationServicePort>,
) -> Router {
    let state = AppState {
        session_service,
        translation_service,
    };

    let public_routes = Router::new()
        .route("/api/user/add", post(register))
        .route("/api/user/login", post(login));

    let protected_routes = Router::new()
        .route("/api/user/logout", post(logout))
        .route("/api/user/:name", delete(remove_user))
        .route("/api/translate", get(translate))
        .route("/api/translate/ping", get(ping))
        .route("/api/translate/memory", get(memory))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span; they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri().path(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                path = %request.uri().path(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
