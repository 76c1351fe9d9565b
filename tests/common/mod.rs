// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

use axum::body::Body;
use axum::http::{header, Request, Response};
use ironpulse::config::Config;
use ironpulse::db::seed::{ADMIN_EMAIL, DEMO_MEMBER_EMAIL};
use ironpulse::middleware::auth::create_jwt;
use ironpulse::models::UserRole;
use ironpulse::routes::create_router;
use ironpulse::AppState;
use std::sync::Arc;

/// Create a test app over a freshly seeded in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::seeded(Config::test_default()).expect("seed test database"));
    (create_router(state.clone()), state)
}

/// Sign a token for `user_id` with the given role.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: u64, role: UserRole, signing_key: &[u8]) -> String {
    create_jwt(user_id, role, signing_key).expect("sign test token")
}

/// Token for the seeded admin account.
#[allow(dead_code)]
pub fn admin_token(state: &AppState) -> String {
    let admin = state
        .db
        .find_user_by_email(ADMIN_EMAIL)
        .expect("admin is seeded");
    create_test_jwt(admin.user.id, UserRole::Admin, &state.config.jwt_signing_key)
}

/// Token for the seeded demo member.
#[allow(dead_code)]
pub fn member_token(state: &AppState) -> String {
    let member = state
        .db
        .find_user_by_email(DEMO_MEMBER_EMAIL)
        .expect("demo member is seeded");
    create_test_jwt(member.user.id, UserRole::Member, &state.config.jwt_signing_key)
}

/// Build a request, optionally authenticated, optionally with a JSON body.
#[allow(dead_code)]
pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serve the seeded app on an ephemeral local port.
/// Returns the base URL and the shared state.
#[allow(dead_code)]
pub async fn spawn_server() -> (String, Arc<AppState>) {
    let (app, state) = create_test_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), state)
}
