// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Navigation guards.
//!
//! Pure functions of a [`SessionSnapshot`]. They only decide what to show;
//! the API rejects unauthorized requests on its own.

use crate::models::UserRole;
use crate::session::SessionSnapshot;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const ADMIN_HOME_PATH: &str = "/admin";

/// Where a session stands relative to a protected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    AuthenticatedNonAdmin,
    AuthenticatedAdmin,
}

impl GuardState {
    pub fn of(snapshot: &SessionSnapshot) -> Self {
        if snapshot.is_loading() {
            GuardState::Loading
        } else if snapshot.is_admin() {
            GuardState::AuthenticatedAdmin
        } else if snapshot.is_logged_in() {
            GuardState::AuthenticatedNonAdmin
        } else {
            GuardState::Unauthenticated
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not restored yet.
    Placeholder,
    Redirect(String),
    Render,
}

impl GuardDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardDecision::Redirect(path) => Some(path),
            _ => None,
        }
    }
}

/// Admin area: renders only for a signed-in admin.
pub fn admin_guard(snapshot: &SessionSnapshot) -> GuardDecision {
    match GuardState::of(snapshot) {
        GuardState::Loading => GuardDecision::Placeholder,
        GuardState::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH.to_string()),
        GuardState::AuthenticatedNonAdmin => GuardDecision::Redirect(HOME_PATH.to_string()),
        GuardState::AuthenticatedAdmin => GuardDecision::Render,
    }
}

/// Member pages (dashboard, subscribe, profile).
///
/// `return_to` is sent back through the login page as `?redirect=`.
/// With `needs_subscription`, a signed-in user without an active plan is
/// sent home.
pub fn member_area_guard(
    snapshot: &SessionSnapshot,
    return_to: Option<&str>,
    needs_subscription: bool,
) -> GuardDecision {
    match GuardState::of(snapshot) {
        GuardState::Loading => GuardDecision::Placeholder,
        GuardState::Unauthenticated => GuardDecision::Redirect(login_path(return_to)),
        _ if needs_subscription && !snapshot.is_subscribed => {
            GuardDecision::Redirect(HOME_PATH.to_string())
        }
        _ => GuardDecision::Render,
    }
}

/// `/login`, carrying a local return path if one is given.
pub fn login_path(return_to: Option<&str>) -> String {
    match return_to.filter(|p| is_local_path(p)) {
        Some(path) => format!("{LOGIN_PATH}?redirect={}", urlencoding::encode(path)),
        None => LOGIN_PATH.to_string(),
    }
}

/// Where to go after signing in. A local `redirect` wins over the
/// role default.
pub fn post_login_redirect(role: UserRole, redirect: Option<&str>) -> String {
    let requested = redirect
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(|p| p.into_owned())
        .filter(|p| is_local_path(p));

    match requested {
        Some(path) => path,
        None if role == UserRole::Admin => ADMIN_HOME_PATH.to_string(),
        None => HOME_PATH.to_string(),
    }
}

/// Same-origin paths only: `/x`, never `//host` or `https://...`.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
