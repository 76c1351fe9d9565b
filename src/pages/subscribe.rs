// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Plan checkout page.

use chrono::Utc;
use std::sync::Arc;

use crate::forms::{FieldErrors, SubscribeForm, FILL_REQUIRED};
use crate::guard::{member_area_guard, GuardDecision};
use crate::models::Plan;
use crate::notify::Notifier;
use crate::session::SessionStore;

/// Where a successful checkout lands.
pub const MEMBER_DASHBOARD_PATH: &str = "/user-dashboard";

pub struct SubscribePage {
    session: Arc<SessionStore>,
    notifier: Notifier,
    plan: Plan,
    pub form: SubscribeForm,
    errors: FieldErrors,
}

impl SubscribePage {
    pub fn new(session: Arc<SessionStore>, notifier: Notifier, plan: Plan) -> Self {
        let form = SubscribeForm::for_user(session.user().as_ref());
        Self {
            session,
            notifier,
            plan,
            form,
            errors: FieldErrors::new(),
        }
    }

    /// Visitors are sent to sign in first, then back here.
    pub fn guard(&self) -> GuardDecision {
        let return_to = format!("/subscribe/{}", self.plan.id);
        member_area_guard(&self.session.snapshot(), Some(&return_to), false)
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate and activate the plan. Returns where to navigate.
    pub fn submit(&mut self) -> Option<String> {
        let subscription = match self.form.subscribe(&self.plan, Utc::now()) {
            Ok(subscription) => subscription,
            Err(errors) => {
                self.errors = errors;
                self.notifier.error("Validation Error", FILL_REQUIRED);
                return None;
            }
        };
        self.errors = FieldErrors::new();

        if let Err(e) = self.session.subscribe(subscription) {
            self.notifier.error("Error", e.to_string());
            return None;
        }

        self.notifier.success(
            "Subscription Successful!",
            format!(
                "Welcome to Iron Pulse! Your {} plan is now active.",
                self.plan.name
            ),
        );
        Some(MEMBER_DASHBOARD_PATH.to_string())
    }
}
