// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Member roster routes. Writes take `multipart/form-data` so a photo can
//! ride along with the text fields.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, FieldMessages, Result};
use crate::forms::non_blank;
use crate::models::{Address, Gender, Member, MemberStatus, UserRole};
use crate::routes::{is_email, Data};
use crate::AppState;

/// Largest accepted photo upload.
const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
}

async fn list_members(State(state): State<Arc<AppState>>) -> Json<Vec<Member>> {
    Json(state.db.members().list())
}

async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Data<Member>>> {
    let member = state
        .db
        .members()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;
    Ok(Data::json(member))
}

// ─── Multipart decoding ──────────────────────────────────────

/// Raw multipart submission.
#[derive(Debug, Default)]
struct MemberUpload {
    fields: HashMap<String, String>,
    /// `data:` URL of the uploaded photo
    photo: Option<String>,
}

impl MemberUpload {
    async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut upload = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "photo" {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Unreadable photo: {e}")))?;
                if bytes.is_empty() {
                    continue;
                }
                if bytes.len() > MAX_PHOTO_BYTES {
                    return Err(AppError::field("photo", "The photo may not be larger than 2MB."));
                }
                if !content_type.starts_with("image/") {
                    return Err(AppError::field("photo", "The photo must be an image."));
                }
                upload.photo = Some(format!(
                    "data:{};base64,{}",
                    content_type,
                    STANDARD.encode(&bytes)
                ));
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Unreadable field {name}: {e}")))?;
                upload.fields.insert(name, text);
            }
        }

        Ok(upload)
    }

    fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(|v| non_blank(v))
    }
}

/// Validated member fields, minus the id and photo.
struct MemberInput {
    name: String,
    email: String,
    phone: String,
    plan: String,
    status: MemberStatus,
    join_date: Option<NaiveDate>,
    gender: Option<Gender>,
    date_of_birth: Option<NaiveDate>,
    height: Option<f32>,
    weight: Option<f32>,
    blood_type: Option<String>,
    note: Option<String>,
    address: Option<Address>,
}

fn parse_field<T: std::str::FromStr>(
    upload: &MemberUpload,
    key: &str,
    message: &str,
    errors: &mut FieldMessages,
) -> Option<T> {
    let raw = upload.text(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(key.to_string(), vec![message.to_string()]);
            None
        }
    }
}

impl MemberInput {
    fn from_upload(upload: &MemberUpload, state: &AppState) -> Result<Self> {
        let mut errors = FieldMessages::new();
        let mut require = |key: &str, message: &str| {
            let value = upload.text(key);
            if value.is_none() {
                errors.insert(key.to_string(), vec![message.to_string()]);
            }
            value.unwrap_or_default()
        };

        let name = require("name", "The name field is required.");
        let email = require("email", "The email field is required.");
        let phone = require("phone", "The phone field is required.");

        if !email.is_empty() && !is_email(&email) {
            errors.insert("email".into(), vec!["The email must be a valid email address.".into()]);
        }

        let plan = upload.text("plan").unwrap_or_default();
        let plan = if plan.is_empty() {
            plan
        } else {
            match state
                .db
                .plans()
                .list()
                .into_iter()
                .find(|p| p.name.eq_ignore_ascii_case(&plan))
            {
                Some(known) => known.name,
                None => {
                    errors.insert("plan".into(), vec!["The selected plan is invalid.".into()]);
                    plan
                }
            }
        };

        let status = parse_field(upload, "status", "The selected status is invalid.", &mut errors)
            .unwrap_or_default();
        let join_date = parse_field(upload, "join_date", "The join date is not a valid date.", &mut errors);
        let gender = parse_field(upload, "gender", "The selected gender is invalid.", &mut errors);
        let date_of_birth = parse_field(
            upload,
            "date_of_birth",
            "The date of birth is not a valid date.",
            &mut errors,
        );
        let height = parse_field(upload, "height", "The height must be a number.", &mut errors);
        let weight = parse_field(upload, "weight", "The weight must be a number.", &mut errors);

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let address = Address {
            city: upload.text("address[city]"),
            street: upload.text("address[street]"),
            building_num: upload.text("address[building_num]"),
        };

        Ok(Self {
            name,
            email,
            phone,
            plan,
            status,
            join_date,
            gender,
            date_of_birth,
            height,
            weight,
            blood_type: upload.text("blood_type"),
            note: upload.text("note"),
            address: (!address.is_empty()).then_some(address),
        })
    }

    fn apply(self, member: &mut Member) {
        member.name = self.name;
        member.email = self.email;
        member.phone = self.phone;
        member.plan = self.plan;
        member.status = self.status;
        if self.join_date.is_some() {
            member.join_date = self.join_date;
        }
        member.gender = self.gender;
        member.date_of_birth = self.date_of_birth;
        member.height = self.height;
        member.weight = self.weight;
        member.blood_type = self.blood_type;
        member.note = self.note;
        member.address = self.address;
    }
}

fn ensure_email_free(state: &AppState, email: &str, except: Option<u64>) -> Result<()> {
    let taken = state
        .db
        .members()
        .list()
        .iter()
        .any(|m| Some(m.id) != except && m.email.eq_ignore_ascii_case(email));
    if taken {
        return Err(AppError::field("email", "The email has already been taken."));
    }
    Ok(())
}

// ─── Handlers ────────────────────────────────────────────────

async fn create_member(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Data<Member>>)> {
    let upload = MemberUpload::read(multipart).await?;
    let input = MemberInput::from_upload(&upload, &state)?;
    ensure_email_free(&state, &input.email, None)?;

    let photo = upload.photo;
    let member = state.db.members().insert_with(|id| {
        let mut member = Member {
            id,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            plan: String::new(),
            status: MemberStatus::default(),
            join_date: Some(chrono::Utc::now().date_naive()),
            photo,
            gender: None,
            date_of_birth: None,
            height: None,
            weight: None,
            blood_type: None,
            note: None,
            address: None,
        };
        input.apply(&mut member);
        member
    });

    tracing::info!(member_id = member.id, plan = %member.plan, "Created member");
    Ok((StatusCode::CREATED, Data::json(member)))
}

async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    multipart: Multipart,
) -> Result<Json<Data<Member>>> {
    let existing = state
        .db
        .members()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

    let upload = MemberUpload::read(multipart).await?;
    let input = MemberInput::from_upload(&upload, &state)?;
    ensure_email_free(&state, &input.email, Some(id))?;

    // A member who registered signs in with the roster email.
    let has_account = state
        .db
        .find_user_by_email(&existing.email)
        .is_some_and(|record| record.user.role == UserRole::Member);
    if has_account && !existing.email.eq_ignore_ascii_case(&input.email) {
        state
            .db
            .update_user_email(&existing.email, &input.email)
            .map_err(|_| AppError::field("email", "The email has already been taken."))?;
    }

    let photo = upload.photo;
    let member = state
        .db
        .members()
        .update(id, |member| {
            input.apply(member);
            if photo.is_some() {
                member.photo = photo;
            }
        })
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

    tracing::info!(member_id = id, "Updated member");
    Ok(Data::json(member))
}

async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state
        .db
        .members()
        .remove(id)
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

    tracing::info!(member_id = id, "Deleted member");
    Ok(StatusCode::NO_CONTENT)
}
