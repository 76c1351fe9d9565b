// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Class session routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

use crate::error::{AppError, FieldMessages, Result};
use crate::models::{ClassSession, ClassSessionDraft};
use crate::routes::{json_body, Data};
use crate::AppState;

pub const MAX_CAPACITY: u32 = 100;

/// Readable by any signed-in user.
pub fn read_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", get(list_sessions))
        .route("/sessions/{id}", get(get_session))
}

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", put(update_session).delete(delete_session))
}

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Session {} not found", id))
}

async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<ClassSession>> {
    Json(state.db.sessions().list())
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Data<ClassSession>>> {
    let session = state.db.sessions().get(id).ok_or_else(|| not_found(id))?;
    Ok(Data::json(session))
}

/// Check the draft and resolve the trainer it names.
fn validate(state: &AppState, mut draft: ClassSessionDraft) -> Result<ClassSessionDraft> {
    let mut errors = FieldMessages::new();

    if draft.description.trim().is_empty() {
        errors.insert("description".into(), vec!["The description field is required.".into()]);
    }
    if draft.category_name.trim().is_empty() {
        errors.insert("category_name".into(), vec!["The category field is required.".into()]);
    }
    if !(1..=MAX_CAPACITY).contains(&draft.capacity) {
        errors.insert(
            "capacity".into(),
            vec![format!("The capacity must be between 1 and {MAX_CAPACITY}.")],
        );
    } else if draft.booked > draft.capacity {
        errors.insert("booked".into(), vec!["Bookings cannot exceed capacity.".into()]);
    }
    if draft.time.duration_minutes() <= 0 {
        errors.insert("time".into(), vec!["The end time must be after the start time.".into()]);
    }

    match state.db.trainer_by_name(&draft.trainer_name) {
        Some(trainer) => {
            draft.trainer_name = trainer.name;
            if draft.trainer_avatar.is_none() {
                draft.trainer_avatar = trainer.avatar;
            }
        }
        None => {
            errors.insert("trainer_name".into(), vec!["The selected trainer is invalid.".into()]);
        }
    }

    if errors.is_empty() {
        draft.description = draft.description.trim().to_string();
        draft.category_name = draft.category_name.trim().to_string();
        Ok(draft)
    } else {
        Err(AppError::Validation(errors))
    }
}

fn apply(draft: ClassSessionDraft, session: &mut ClassSession) {
    session.description = draft.description;
    session.trainer_name = draft.trainer_name;
    session.trainer_avatar = draft.trainer_avatar;
    session.category_name = draft.category_name;
    session.time = draft.time;
    session.date = draft.date;
    session.location = draft.location.filter(|l| !l.trim().is_empty());
    session.capacity = draft.capacity;
    session.booked = draft.booked;
    session.status = draft.status;
}

async fn create_session(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ClassSessionDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Data<ClassSession>>)> {
    let draft = validate(&state, json_body(payload)?)?;

    let session = state.db.sessions().insert_with(|id| {
        let mut session = ClassSession {
            id,
            description: String::new(),
            trainer_name: String::new(),
            trainer_avatar: None,
            category_name: String::new(),
            time: Default::default(),
            date: String::new(),
            location: None,
            capacity: 0,
            booked: 0,
            status: Default::default(),
        };
        apply(draft, &mut session);
        session
    });

    tracing::info!(session_id = session.id, trainer = %session.trainer_name, "Created session");
    Ok((StatusCode::CREATED, Data::json(session)))
}

async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: std::result::Result<Json<ClassSessionDraft>, JsonRejection>,
) -> Result<Json<Data<ClassSession>>> {
    let draft = json_body(payload)?;
    if !state.db.sessions().contains(id) {
        return Err(not_found(id));
    }
    let draft = validate(&state, draft)?;

    let session = state
        .db
        .sessions()
        .update(id, |session| apply(draft, session))
        .ok_or_else(|| not_found(id))?;

    tracing::info!(session_id = id, "Updated session");
    Ok(Data::json(session))
}

async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.db.sessions().remove(id).ok_or_else(|| not_found(id))?;
    tracing::info!(session_id = id, "Deleted session");
    Ok(StatusCode::NO_CONTENT)
}
