// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Membership plan routes.
//!
//! Reads are public (the landing page lists plans); writes are admin-only.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, FieldMessages, Result};
use crate::models::{Period, Plan, PlanDraft, PlanFeature, PlanStatusUpdate};
use crate::routes::{json_body, Data};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plans", get(list_plans))
        .route("/plans/{id}", get(get_plan))
}

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plans", axum::routing::post(create_plan))
        .route(
            "/plans/{id}",
            patch(patch_plan).put(update_plan).delete(delete_plan),
        )
        .route("/plans/{id}/status", patch(set_status))
}

fn with_member_count(state: &AppState, mut plan: Plan) -> Plan {
    plan.active_members = state.db.active_members_on(&plan.name);
    plan
}

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Plan {} not found", id))
}

async fn list_plans(State(state): State<Arc<AppState>>) -> Json<Vec<Plan>> {
    let plans = state
        .db
        .plans()
        .list()
        .into_iter()
        .map(|p| with_member_count(&state, p))
        .collect();
    Json(plans)
}

async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Data<Plan>>> {
    let plan = state.db.plans().get(id).ok_or_else(|| not_found(id))?;
    Ok(Data::json(with_member_count(&state, plan)))
}

fn validate(draft: &PlanDraft) -> Result<()> {
    let mut errors = FieldMessages::new();
    if draft.name.trim().is_empty() {
        errors.insert("name".into(), vec!["The name field is required.".into()]);
    }
    if !(draft.price.is_finite() && draft.price > 0.0) {
        errors.insert("price".into(), vec!["The price must be greater than 0.".into()]);
    }
    if draft.duration == 0 {
        errors.insert("duration".into(), vec!["The duration must be at least 1.".into()]);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn ensure_name_free(state: &AppState, name: &str, except: Option<u64>) -> Result<()> {
    let taken = state
        .db
        .plans()
        .list()
        .iter()
        .any(|p| Some(p.id) != except && p.name.eq_ignore_ascii_case(name.trim()));
    if taken {
        return Err(AppError::field("name", "The name has already been taken."));
    }
    Ok(())
}

fn apply(draft: PlanDraft, plan: &mut Plan) {
    plan.name = draft.name.trim().to_string();
    plan.description = draft.description.filter(|d| !d.trim().is_empty());
    plan.price = draft.price;
    plan.duration = draft.duration;
    plan.period = draft.period;
    plan.features = draft.features;
    plan.popular = draft.popular;
    plan.is_active = draft.is_active;
    plan.updated_at = Some(format_utc_rfc3339(chrono::Utc::now()));
}

async fn create_plan(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<PlanDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Data<Plan>>)> {
    let draft = json_body(payload)?;
    validate(&draft)?;
    ensure_name_free(&state, &draft.name, None)?;

    let now = format_utc_rfc3339(chrono::Utc::now());
    let plan = state.db.plans().insert_with(|id| {
        let mut plan = Plan {
            id,
            name: String::new(),
            description: None,
            price: 0.0,
            duration: 1,
            period: Period::Month,
            features: Vec::new(),
            popular: false,
            is_active: true,
            active_members: 0,
            created_at: Some(now),
            updated_at: None,
        };
        apply(draft, &mut plan);
        plan
    });

    tracing::info!(plan_id = plan.id, name = %plan.name, "Created plan");
    Ok((StatusCode::CREATED, Data::json(with_member_count(&state, plan))))
}

async fn update_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: std::result::Result<Json<PlanDraft>, JsonRejection>,
) -> Result<Json<Data<Plan>>> {
    let draft = json_body(payload)?;
    if !state.db.plans().contains(id) {
        return Err(not_found(id));
    }
    validate(&draft)?;
    ensure_name_free(&state, &draft.name, Some(id))?;

    let plan = save(&state, id, draft)?;
    tracing::info!(plan_id = id, "Updated plan");
    Ok(Data::json(with_member_count(&state, plan)))
}

/// Write a validated draft. Members hold plans by name, so a rename is
/// carried over to every member on the old name.
fn save(state: &AppState, id: u64, draft: PlanDraft) -> Result<Plan> {
    let mut previous = None;
    let plan = state
        .db
        .plans()
        .update(id, |plan| {
            previous = Some(plan.name.clone());
            apply(draft, plan);
        })
        .ok_or_else(|| not_found(id))?;

    if let Some(old) = previous.filter(|old| *old != plan.name) {
        let moved = state.db.rename_member_plans(&old, &plan.name);
        tracing::info!(plan_id = id, from = %old, to = %plan.name, moved, "Renamed plan");
    }
    Ok(plan)
}

/// Partial update: only the fields present are changed.
#[derive(Debug, Default, Deserialize)]
struct PlanPatch {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    duration: Option<u32>,
    period: Option<Period>,
    features: Option<Vec<PlanFeature>>,
    popular: Option<bool>,
    is_active: Option<bool>,
}

impl PlanPatch {
    fn merged_with(self, plan: &Plan) -> PlanDraft {
        let mut draft = PlanDraft::from(plan);
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = Some(description);
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(duration) = self.duration {
            draft.duration = duration;
        }
        if let Some(period) = self.period {
            draft.period = period;
        }
        if let Some(features) = self.features {
            draft.features = features;
        }
        if let Some(popular) = self.popular {
            draft.popular = popular;
        }
        if let Some(is_active) = self.is_active {
            draft.is_active = is_active;
        }
        draft
    }
}

async fn patch_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: std::result::Result<Json<PlanPatch>, JsonRejection>,
) -> Result<Json<Data<Plan>>> {
    let changes = json_body(payload)?;
    let current = state.db.plans().get(id).ok_or_else(|| not_found(id))?;
    let draft = changes.merged_with(&current);
    validate(&draft)?;
    ensure_name_free(&state, &draft.name, Some(id))?;

    let plan = save(&state, id, draft)?;
    Ok(Data::json(with_member_count(&state, plan)))
}

/// Activate or deactivate a plan. Responds with the bare plan.
async fn set_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: std::result::Result<Json<PlanStatusUpdate>, JsonRejection>,
) -> Result<Json<Plan>> {
    let update = json_body(payload)?;
    let plan = state
        .db
        .plans()
        .update(id, |plan| {
            plan.is_active = update.is_active;
            plan.updated_at = Some(format_utc_rfc3339(chrono::Utc::now()));
        })
        .ok_or_else(|| not_found(id))?;

    tracing::info!(plan_id = id, is_active = plan.is_active, "Plan status changed");
    Ok(Json(with_member_count(&state, plan)))
}

async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.db.plans().remove(id).ok_or_else(|| not_found(id))?;
    tracing::info!(plan_id = id, "Deleted plan");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::default_features;

    fn draft(name: &str, price: f64) -> PlanDraft {
        PlanDraft {
            name: name.to_string(),
            description: None,
            price,
            duration: 1,
            period: Period::Month,
            features: default_features(),
            popular: false,
            is_active: true,
        }
    }

    #[test]
    fn test_validate_rejects_blank_name_and_free_plans() {
        assert!(validate(&draft("Gold", 49.0)).is_ok());
        let Err(AppError::Validation(fields)) = validate(&draft("  ", 0.0)) else {
            panic!("expected validation error");
        };
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn test_patch_keeps_unspecified_fields() {
        let mut plan = Plan {
            id: 3,
            name: "Premium".to_string(),
            description: Some("Full access".to_string()),
            price: 79.0,
            duration: 1,
            period: Period::Month,
            features: default_features(),
            popular: false,
            is_active: true,
            active_members: 0,
            created_at: None,
            updated_at: None,
        };
        let patch = PlanPatch {
            price: Some(89.0),
            popular: Some(true),
            ..Default::default()
        };
        apply(patch.merged_with(&plan), &mut plan);
        assert_eq!(plan.price, 89.0);
        assert!(plan.popular);
        assert_eq!(plan.name, "Premium");
        assert_eq!(plan.description.as_deref(), Some("Full access"));
    }
}
