// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Request validation and response shape tests for the REST API.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

use common::{admin_token, body_json, create_test_app, request};
use ironpulse::db::seed::{ADMIN_EMAIL, ADMIN_PASSWORD};

fn registration(email: &str, confirmation: &str) -> serde_json::Value {
    json!({
        "name": "Layla Adel",
        "email": email,
        "password": "Str0ngPass",
        "password_confirmation": confirmation,
        "phone": "01098765432",
        "gender": "female",
        "date_of_birth": "1996-03-09",
        "role": "admin",
    })
}

#[tokio::test]
async fn test_register_creates_member_not_admin() {
    let (app, state) = create_test_app();
    let members_before = state.db.members().len();

    let response = app
        .oneshot(request(
            "POST",
            "/register",
            None,
            Some(registration("layla@email.com", "Str0ngPass")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["email"], "layla@email.com");
    assert_eq!(body["data"]["role"], "member");

    // A pending roster entry comes with the account.
    assert_eq!(state.db.members().len(), members_before + 1);
    let entry = state
        .db
        .members()
        .list()
        .into_iter()
        .find(|m| m.email == "layla@email.com")
        .unwrap();
    assert_eq!(entry.status.as_str(), "pending");
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let (app, state) = create_test_app();

    let response = app
        .oneshot(request(
            "POST",
            "/register",
            None,
            Some(registration("layla@email.com", "Different1")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_failed");
    assert_eq!(
        body["errors"]["password_confirmation"][0],
        "Passwords do not match"
    );
    assert!(!state.db.email_taken("layla@email.com"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(request(
            "POST",
            "/register",
            None,
            Some(registration("admin@ironpulse.com", "Str0ngPass")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
}

#[tokio::test]
async fn test_register_missing_fields_reported_per_field() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(request("POST", "/register", None, Some(json!({}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let errors = body_json(response).await["errors"].clone();
    for field in ["name", "email", "password", "phone", "gender", "date_of_birth"] {
        assert!(errors.get(field).is_some(), "missing error for {field}");
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);

    // Required fields absent, so the body cannot be decoded at all.
    let response = app
        .oneshot(request("POST", "/plans", Some(&token), Some(json!({"name": "Silver"}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request"));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_create_plan_validation() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/plans",
            Some(&token),
            Some(json!({"name": " ", "price": 0, "duration": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body_json(response).await["errors"].clone();
    assert!(errors.get("name").is_some());
    assert!(errors.get("price").is_some());

    // Names are unique, ignoring case.
    let response = app
        .oneshot(request(
            "POST",
            "/plans",
            Some(&token),
            Some(json!({"name": "gold", "price": 10, "duration": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["errors"]["name"][0],
        "The name has already been taken."
    );
}

#[tokio::test]
async fn test_create_plan_wraps_in_data() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);

    let response = app
        .oneshot(request(
            "POST",
            "/plans",
            Some(&token),
            Some(json!({
                "name": "Annual",
                "price": 600,
                "duration": 1,
                "period": "year",
                "features": [{"name": "Gym access", "included": true}],
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Annual");
    assert_eq!(body["data"]["period"], "year");
    assert_eq!(body["data"]["is_active"], true);
    assert_eq!(state.db.plans().len(), 4);
}

#[tokio::test]
async fn test_plan_status_returns_bare_plan() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);

    let response = app
        .oneshot(request(
            "PATCH",
            "/plans/2/status",
            Some(&token),
            Some(json!({"is_active": false})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body.get("data").is_none());
    assert_eq!(body["id"], 2);
    assert_eq!(body["is_active"], false);
    assert!(!state.db.plans().get(2).unwrap().is_active);
}

#[tokio::test]
async fn test_patch_plan_keeps_untouched_fields() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);
    let before = state.db.plans().get(1).unwrap();

    let response = app
        .oneshot(request(
            "PATCH",
            "/plans/1",
            Some(&token),
            Some(json!({"price": 35})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = body_json(response).await["data"].clone();
    assert_eq!(plan["price"], 35.0);
    assert_eq!(plan["name"], before.name);
    assert_eq!(plan["features"].as_array().unwrap().len(), before.features.len());
}

#[tokio::test]
async fn test_delete_then_not_found() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);

    let response = app
        .clone()
        .oneshot(request("DELETE", "/trainers/1", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request("DELETE", "/trainers/1", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request("GET", "/trainers/1", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_session_needs_known_trainer_and_ordered_times() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);

    let response = app
        .oneshot(request(
            "POST",
            "/sessions",
            Some(&token),
            Some(json!({
                "description": "Late Stretch",
                "trainer_name": "Nobody Here",
                "category_name": "Yoga",
                "time": "09:00 PM - 08:00 PM",
                "capacity": 10,
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let errors = body_json(response).await["errors"].clone();
    assert!(errors.get("trainer_name").is_some());
    assert!(errors.get("time").is_some());
    assert_eq!(state.db.sessions().len(), 6);
}

#[tokio::test]
async fn test_session_created_with_trainer_avatar_filled() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);

    let response = app
        .oneshot(request(
            "POST",
            "/sessions",
            Some(&token),
            Some(json!({
                "description": "Evening Pilates",
                "trainer_name": "Alexandra Kim",
                "category_name": "Pilates",
                "time": "06:00 PM - 07:00 PM",
                "capacity": 12,
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let session = body_json(response).await["data"].clone();
    assert_eq!(session["trainer_name"], "Alexandra Kim");
    assert_eq!(session["time"], "06:00 PM - 07:00 PM");
    assert_eq!(state.db.sessions().len(), 7);
}

async fn login_status(app: &axum::Router, email: &str, password: &str) -> StatusCode {
    app.clone()
        .oneshot(request(
            "POST",
            "/login",
            None,
            Some(json!({"email": email, "password": password})),
        ))
        .await
        .unwrap()
        .status()
}

fn trainer_body(email: &str) -> serde_json::Value {
    json!({
        "name": "Omar Nabil",
        "email": email,
        "phone": "01012345678",
        "password": "Tr4inerPass",
        "password_confirmation": "Tr4inerPass",
        "gender": "male",
        "specialties": ["Boxing"],
    })
}

#[tokio::test]
async fn test_trainer_email_change_moves_login_account() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/trainers",
            Some(&token),
            Some(trainer_body("omar.n@ironpulse.com")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_u64().unwrap();
    let uri = format!("/trainers/{id}");

    // Another account's email is refused and nothing moves.
    let mut update = trainer_body(ADMIN_EMAIL);
    update.as_object_mut().unwrap().remove("password");
    let response = app
        .clone()
        .oneshot(request("PUT", &uri, Some(&token), Some(update)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["errors"]["email"][0],
        "The email has already been taken."
    );
    assert_eq!(state.db.trainers().get(id).unwrap().email, "omar.n@ironpulse.com");
    assert_eq!(login_status(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await, StatusCode::OK);

    // A free email takes the login account along.
    let mut update = trainer_body("omar.nabil@ironpulse.com");
    update.as_object_mut().unwrap().remove("password");
    let response = app
        .clone()
        .oneshot(request("PUT", &uri, Some(&token), Some(update)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        login_status(&app, "omar.nabil@ironpulse.com", "Tr4inerPass").await,
        StatusCode::OK
    );
    assert_eq!(
        login_status(&app, "omar.n@ironpulse.com", "Tr4inerPass").await,
        StatusCode::UNAUTHORIZED
    );

    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        login_status(&app, "omar.nabil@ironpulse.com", "Tr4inerPass").await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(login_status(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await, StatusCode::OK);
}

#[tokio::test]
async fn test_trainer_email_with_spaces_rejected() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);
    let before = state.db.trainers().len();

    let response = app
        .oneshot(request(
            "POST",
            "/trainers",
            Some(&token),
            Some(trainer_body("call me at a@b.co")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["errors"]["email"][0],
        "The email must be a valid email address."
    );
    assert_eq!(state.db.trainers().len(), before);
    assert!(!state.db.email_taken("call me at a@b.co"));
}

#[tokio::test]
async fn test_register_links_existing_roster_entry() {
    let (app, state) = create_test_app();
    let members_before = state.db.members().len();

    let response = app
        .oneshot(request(
            "POST",
            "/register",
            None,
            Some(registration("Sarah.J@email.com", "Str0ngPass")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    assert_eq!(state.db.members().len(), members_before);
    let rows: Vec<_> = state
        .db
        .members()
        .list()
        .into_iter()
        .filter(|m| m.email.eq_ignore_ascii_case("sarah.j@email.com"))
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Sarah Johnson");
    assert_eq!(rows[0].plan, "Premium");
    assert_eq!(rows[0].status.as_str(), "active");
}

#[tokio::test]
async fn test_plan_rename_carries_members() {
    let (app, state) = create_test_app();
    let token = admin_token(&state);
    assert_eq!(state.db.plans().get(2).unwrap().name, "Gold");

    let response = app
        .clone()
        .oneshot(request(
            "PATCH",
            "/plans/2",
            Some(&token),
            Some(json!({"name": "Gold Plus"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let plan = body_json(response).await["data"].clone();
    assert_eq!(plan["name"], "Gold Plus");
    assert_eq!(plan["active_members"], 1);

    let members = state.db.members().list();
    assert!(members.iter().all(|m| m.plan != "Gold"));
    assert_eq!(members.iter().filter(|m| m.plan == "Gold Plus").count(), 2);

    let response = app
        .oneshot(request("GET", "/plans/2", None, None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["data"]["active_members"], 1);
}
