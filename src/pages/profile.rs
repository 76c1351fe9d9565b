// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Member profile page.

use chrono::Utc;
use std::sync::Arc;

use crate::forms::ProfileForm;
use crate::models::{Subscription, User};
use crate::notify::Notifier;
use crate::session::SessionStore;

pub struct ProfilePage {
    session: Arc<SessionStore>,
    notifier: Notifier,
    pub form: ProfileForm,
}

impl ProfilePage {
    pub fn new(session: Arc<SessionStore>, notifier: Notifier) -> Self {
        let form = session
            .user()
            .map(|u| ProfileForm {
                name: u.name,
                avatar: u.avatar,
            })
            .unwrap_or_default();
        Self {
            session,
            notifier,
            form,
        }
    }

    pub fn subscription(&self) -> Option<Subscription> {
        self.session.subscription()
    }

    /// Days left on the current plan, if any.
    pub fn days_remaining(&self) -> Option<i64> {
        self.session
            .subscription()
            .map(|s| s.days_remaining(Utc::now()))
    }

    pub fn save(&mut self) -> Option<User> {
        let (name, avatar) = match self.form.validate() {
            Ok(values) => values,
            Err(errors) => {
                let message = errors.get("name").unwrap_or("Name is required").to_string();
                self.notifier.error("Validation Error", message);
                return None;
            }
        };

        match self.session.update_profile(&name, avatar) {
            Ok(Some(user)) => {
                self.notifier.success(
                    "Profile Updated",
                    "Your profile has been updated successfully.",
                );
                Some(user)
            }
            Ok(None) => None,
            Err(e) => {
                self.notifier.error("Error", e.to_string());
                None
            }
        }
    }
}
