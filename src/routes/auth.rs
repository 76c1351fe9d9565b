// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Account routes: login and self-registration.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use validator::{Validate, ValidationError};

use crate::error::{AppError, FieldMessages, Result};
use crate::middleware::auth::create_jwt;
use crate::models::{AuthSession, Credentials, Gender, Member, MemberStatus, User, UserRole};
use crate::routes::{blocking, json_body, Data};
use crate::services::password::{hash_password, verify_password};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}

// ─── Login ───────────────────────────────────────────────────

/// Exchange credentials for a session token.
async fn login(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<AuthSession>> {
    let credentials = json_body(payload)?;

    let record = state.db.find_user_by_email(&credentials.email);
    let password = credentials.password;
    let matched = match record {
        Some(record) => {
            let stored = record.password_hash.clone();
            let ok = blocking(move || Ok(verify_password(&password, &stored))).await?;
            ok.then_some(record.user)
        }
        None => None,
    };

    let Some(user) = matched else {
        tracing::info!(email = %credentials.email.trim(), "Rejected login");
        return Err(AppError::InvalidCredentials);
    };

    let token = create_jwt(user.id, user.role, &state.config.jwt_signing_key)?;
    tracing::info!(user_id = user.id, role = user.role.as_str(), "User logged in");

    Ok(Json(AuthSession { token, user }))
}

// ─── Registration ────────────────────────────────────────────

fn validate_phone(phone: &str) -> std::result::Result<(), ValidationError> {
    if phone.len() == 11 && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Phone must be 11 digits".into()))
    }
}

/// Registration body. Everything is optional at the decoding stage so a
/// missing field is reported as a field error, not a malformed body.
#[derive(Debug, Deserialize, Validate)]
struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email"))]
    email: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    password_confirmation: String,
    #[serde(default)]
    #[validate(custom(function = "validate_phone"))]
    phone: String,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    date_of_birth: Option<NaiveDate>,
}

impl RegisterRequest {
    fn normalize(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self
    }

    fn check(&self) -> std::result::Result<(), AppError> {
        let mut errors = match self.validate() {
            Ok(()) => FieldMessages::new(),
            Err(e) => match AppError::from(e) {
                AppError::Validation(fields) => fields,
                other => return Err(other),
            },
        };
        if self.gender.is_none() {
            errors.insert("gender".into(), vec!["Gender is required".into()]);
        }
        if self.date_of_birth.is_none() {
            errors.insert(
                "date_of_birth".into(),
                vec!["Date of birth is required".into()],
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Create a member account. The requested role is ignored: self-registration
/// always yields a `member`.
async fn register(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Data<User>>)> {
    let request = json_body(payload)?.normalize();
    request.check()?;

    if state.db.email_taken(&request.email) {
        return Err(AppError::field("email", "The email has already been taken."));
    }

    let password = request.password.clone();
    let password_hash = blocking(move || hash_password(&password)).await?;
    let user = state.db.create_user(
        &request.name,
        &request.email,
        UserRole::Member,
        password_hash,
    )?;

    // Someone already on the roster keeps their row; only gaps are filled.
    // Everyone else gets a pending entry until a plan is assigned.
    if let Some(existing) = state.db.member_by_email(&user.email) {
        state.db.members().update(existing.id, |member| {
            if member.phone.trim().is_empty() {
                member.phone = request.phone.clone();
            }
            member.gender = member.gender.or(request.gender);
            member.date_of_birth = member.date_of_birth.or(request.date_of_birth);
        });
        tracing::info!(user_id = user.id, member_id = existing.id, "Linked account to roster entry");
    } else {
        state.db.members().insert_with(|id| Member {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: request.phone.clone(),
            plan: String::new(),
            status: MemberStatus::Pending,
            join_date: Some(chrono::Utc::now().date_naive()),
            photo: None,
            gender: request.gender,
            date_of_birth: request.date_of_birth,
            height: None,
            weight: None,
            blood_type: None,
            note: None,
            address: None,
        });
    }

    tracing::info!(user_id = user.id, "Registered new member");
    Ok((StatusCode::CREATED, Data::json(user)))
}
