// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Middleware modules (authentication, security, etc.).

pub mod auth;
pub mod security;

pub use auth::{require_admin, require_auth};
