// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Sessions (class schedule) admin page.

use futures_util::future;

use crate::client::ApiClient;
use crate::forms::SessionForm;
use crate::models::{ClassSession, Trainer};
use crate::notify::Notifier;
use crate::pages::{matches_query, showing_label, Outcome, ResourceList};

pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionView {
    #[default]
    List,
    Calendar,
}

pub struct SessionsPage {
    api: ApiClient,
    notifier: Notifier,
    sessions: ResourceList<ClassSession>,
    trainers: ResourceList<Trainer>,
    pub search: String,
    /// `None` shows every category
    pub category: Option<String>,
    pub view: SessionView,
    selected_day: usize,
}

impl SessionsPage {
    pub fn new(api: ApiClient, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            sessions: ResourceList::new(),
            trainers: ResourceList::new(),
            search: String::new(),
            category: None,
            view: SessionView::List,
            selected_day: 2,
        }
    }

    /// Fetch sessions plus the trainers offered in the form.
    pub async fn load(&mut self) {
        let (sessions, trainers) = future::join(
            self.api.list::<ClassSession>(),
            self.api.list::<Trainer>(),
        )
        .await;

        match sessions {
            Ok(sessions) => self.sessions.replace_all(sessions),
            Err(e) => {
                self.sessions.clear();
                self.notifier
                    .error("Error", e.user_message("Could not load sessions"));
            }
        }
        match trainers {
            Ok(trainers) => self.trainers.replace_all(trainers),
            Err(e) => {
                tracing::warn!(error = %e, "Could not load trainers for the session form");
                self.trainers.clear();
            }
        }
    }

    pub fn sessions(&self) -> &[ClassSession] {
        self.sessions.items()
    }

    pub fn trainers(&self) -> &[Trainer] {
        self.trainers.items()
    }

    pub fn select_day(&mut self, index: usize) {
        if index < WEEK_DAYS.len() {
            self.selected_day = index;
        }
    }

    pub fn selected_day(&self) -> &'static str {
        WEEK_DAYS[self.selected_day]
    }

    /// Search covers description and trainer name.
    pub fn visible(&self) -> Vec<&ClassSession> {
        self.sessions
            .items()
            .iter()
            .filter(|s| {
                self.category
                    .as_deref()
                    .is_none_or(|c| s.category_name.eq_ignore_ascii_case(c))
            })
            .filter(|s| {
                matches_query(&s.description, &self.search)
                    || matches_query(&s.trainer_name, &self.search)
            })
            .collect()
    }

    pub fn showing_label(&self) -> String {
        showing_label(self.visible().len(), self.sessions.len(), "sessions")
    }

    pub fn new_form(&self) -> SessionForm {
        SessionForm::new(self.trainers.items())
    }

    pub fn edit_form(&self, id: u64) -> Option<SessionForm> {
        self.sessions
            .get(id)
            .map(|s| SessionForm::edit(s, self.trainers.items()))
    }

    pub async fn save(&mut self, id: Option<u64>, form: &SessionForm) -> Outcome<ClassSession> {
        let draft = match form.validate(self.trainers.items()) {
            Ok(draft) => draft,
            Err(errors) => return Outcome::Invalid(errors),
        };

        let result = match id {
            Some(id) => self.api.update::<ClassSession, _>(id, &draft).await,
            None => self.api.create::<ClassSession, _>(&draft).await,
        };

        match result {
            Ok(session) => {
                let title = if id.is_some() {
                    "Session Updated"
                } else {
                    "Session Created"
                };
                self.notifier
                    .success(title, format!("{} is on the schedule.", session.description));
                self.sessions.upsert(session.clone());
                Outcome::Done(session)
            }
            Err(e) => {
                let message = e.user_message("Something went wrong");
                self.notifier.error("Error", message.clone());
                Outcome::Failed(message)
            }
        }
    }

    pub async fn delete(&mut self, id: u64) -> Outcome<()> {
        match self.api.remove::<ClassSession>(id).await {
            Ok(()) => {
                self.sessions.remove(id);
                self.notifier
                    .success("Session Deleted", "The session has been removed.");
                Outcome::Done(())
            }
            Err(e) => {
                let message = e.user_message("Something went wrong");
                self.notifier.error("Error", message.clone());
                Outcome::Failed(message)
            }
        }
    }
}
