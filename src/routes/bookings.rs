// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Booking routes (read-only).

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::Booking;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/bookings", get(list_bookings))
}

async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.db.bookings().list())
}
