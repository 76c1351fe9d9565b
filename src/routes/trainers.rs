// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Trainer routes. Creating a trainer also opens a `trainer` login account.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::{AppError, FieldMessages, Result};
use crate::forms::blank;
use crate::models::{Trainer, TrainerDraft, UserRole};
use crate::routes::{blocking, is_email, json_body, Data};
use crate::services::password::hash_password;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trainers", get(list_trainers).post(create_trainer))
        .route(
            "/trainers/{id}",
            get(get_trainer).put(update_trainer).delete(delete_trainer),
        )
}

/// Fill in the derived session count.
fn with_session_count(state: &AppState, mut trainer: Trainer) -> Trainer {
    trainer.sessions = state.db.sessions_led_by(&trainer.name);
    trainer
}

async fn list_trainers(State(state): State<Arc<AppState>>) -> Json<Vec<Trainer>> {
    let trainers = state
        .db
        .trainers()
        .list()
        .into_iter()
        .map(|t| with_session_count(&state, t))
        .collect();
    Json(trainers)
}

async fn get_trainer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Data<Trainer>>> {
    let trainer = state
        .db
        .trainers()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Trainer {} not found", id)))?;
    Ok(Data::json(with_session_count(&state, trainer)))
}

/// Field checks shared by create and update.
fn validate(draft: &TrainerDraft, password_required: bool) -> Result<()> {
    let mut errors = FieldMessages::new();
    let mut fail = |field: &str, message: &str| {
        errors
            .entry(field.to_string())
            .or_insert_with(|| vec![message.to_string()]);
    };

    if blank(&draft.name) {
        fail("name", "The name field is required.");
    }
    if blank(&draft.email) {
        fail("email", "The email field is required.");
    } else if !is_email(&draft.email) {
        fail("email", "The email must be a valid email address.");
    }
    if blank(&draft.phone) {
        fail("phone", "The phone field is required.");
    }

    let password = draft.password.as_deref().filter(|p| !p.is_empty());
    match password {
        None if password_required => fail("password", "The password field is required."),
        Some(p) if p.len() < 8 => fail("password", "The password must be at least 8 characters."),
        Some(p) if draft.password_confirmation.as_deref() != Some(p) => {
            fail("password_confirmation", "Passwords do not match")
        }
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn apply(draft: TrainerDraft, trainer: &mut Trainer) {
    trainer.name = draft.name.trim().to_string();
    trainer.email = draft.email.trim().to_string();
    trainer.phone = draft.phone.trim().to_string();
    trainer.specialties = draft.specialties;
    trainer.gender = draft.gender;
    trainer.date_of_birth = draft.date_of_birth;
    trainer.status = draft.status;
    if draft.hire_date.is_some() {
        trainer.hire_date = draft.hire_date;
    }
}

async fn create_trainer(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<TrainerDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Data<Trainer>>)> {
    let draft = json_body(payload)?;
    validate(&draft, true)?;

    if state.db.email_taken(&draft.email) {
        return Err(AppError::field("email", "The email has already been taken."));
    }

    let password = draft.password.clone().unwrap_or_default();
    let password_hash = blocking(move || hash_password(&password)).await?;
    state
        .db
        .create_user(&draft.name, &draft.email, UserRole::Trainer, password_hash)?;

    let gender = draft.gender;
    let trainer = state.db.trainers().insert_with(|id| {
        let mut trainer = Trainer {
            id,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            specialties: Vec::new(),
            hire_date: Some(chrono::Utc::now().date_naive()),
            sessions: 0,
            status: Default::default(),
            gender,
            date_of_birth: None,
            avatar: None,
        };
        apply(draft, &mut trainer);
        trainer
    });

    tracing::info!(trainer_id = trainer.id, "Created trainer");
    Ok((StatusCode::CREATED, Data::json(trainer)))
}

async fn update_trainer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: std::result::Result<Json<TrainerDraft>, JsonRejection>,
) -> Result<Json<Data<Trainer>>> {
    let draft = json_body(payload)?;
    let existing = state
        .db
        .trainers()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Trainer {} not found", id)))?;
    validate(&draft, false)?;

    let email_changed = !existing.email.eq_ignore_ascii_case(draft.email.trim());
    if email_changed {
        if state.db.email_taken(&draft.email) {
            return Err(AppError::field("email", "The email has already been taken."));
        }
        // Keep the login account in step with the roster.
        state
            .db
            .update_user_email(&existing.email, &draft.email)
            .map_err(|_| AppError::field("email", "The email has already been taken."))?;
    }

    if let Some(password) = draft.password.clone().filter(|p| !p.is_empty()) {
        let password_hash = blocking(move || hash_password(&password)).await?;
        state.db.set_password_hash(&draft.email, password_hash);
    }

    let trainer = state
        .db
        .trainers()
        .update(id, |trainer| apply(draft, trainer))
        .ok_or_else(|| AppError::NotFound(format!("Trainer {} not found", id)))?;

    tracing::info!(trainer_id = id, "Updated trainer");
    Ok(Data::json(with_session_count(&state, trainer)))
}

async fn delete_trainer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    let trainer = state
        .db
        .trainers()
        .remove(id)
        .ok_or_else(|| AppError::NotFound(format!("Trainer {} not found", id)))?;
    state
        .db
        .delete_user_with_role(&trainer.email, UserRole::Trainer);

    tracing::info!(trainer_id = id, "Deleted trainer");
    Ok(StatusCode::NO_CONTENT)
}
