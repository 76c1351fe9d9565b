// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! HTTP route handlers.

pub mod auth;
pub mod bookings;
pub mod members;
pub mod plans;
pub mod sessions;
pub mod trainers;

use crate::error::AppError;
use crate::middleware::auth::{require_admin, require_auth};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use validator::ValidateEmail;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// `{ "data": ... }` envelope for single-record writes.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn json(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

/// Unwrap a JSON body, turning extractor rejections into `AppError`s so
/// they share the API error shape.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Server-side email rule, shared with the derive on registration.
pub(crate) fn is_email(raw: &str) -> bool {
    raw.trim().validate_email()
}

/// Run an expensive synchronous job (password hashing) off the runtime.
pub(crate) async fn blocking<T, F>(job: F) -> Result<T, AppError>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Blocking task failed: {e}")))?
        .map_err(AppError::Internal)
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .merge(auth::routes())
        .merge(plans::public_routes());

    // Any signed-in user
    let member_routes = sessions::read_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Admin only. `require_auth` is the outer layer, so it runs first.
    let admin_routes = Router::new()
        .merge(members::routes())
        .merge(trainers::routes())
        .merge(plans::admin_routes())
        .merge(sessions::admin_routes())
        .merge(bookings::routes())
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(member_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
