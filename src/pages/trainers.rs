// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Trainers admin page.

use crate::client::ApiClient;
use crate::forms::TrainerForm;
use crate::models::Trainer;
use crate::notify::Notifier;
use crate::pages::{matches_query, showing_label, Outcome, ResourceList};

/// Specialties shown in a table row before collapsing into `+K`.
const TABLE_SPECIALTIES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainerView {
    #[default]
    Grid,
    Table,
}

pub struct TrainersPage {
    api: ApiClient,
    notifier: Notifier,
    trainers: ResourceList<Trainer>,
    pub search: String,
    pub view: TrainerView,
}

impl TrainersPage {
    pub fn new(api: ApiClient, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            trainers: ResourceList::new(),
            search: String::new(),
            view: TrainerView::Grid,
        }
    }

    pub async fn load(&mut self) {
        match self.api.list::<Trainer>().await {
            Ok(trainers) => self.trainers.replace_all(trainers),
            Err(e) => {
                self.trainers.clear();
                self.notifier
                    .error("Error", e.user_message("Could not load trainers"));
            }
        }
    }

    pub fn trainers(&self) -> &[Trainer] {
        self.trainers.items()
    }

    /// Matches the name or any specialty.
    pub fn visible(&self) -> Vec<&Trainer> {
        self.trainers
            .items()
            .iter()
            .filter(|t| {
                matches_query(&t.name, &self.search)
                    || t.specialties.iter().any(|s| matches_query(s, &self.search))
            })
            .collect()
    }

    pub fn showing_label(&self) -> String {
        showing_label(self.visible().len(), self.trainers.len(), "trainers")
    }

    pub async fn save(&mut self, form: &TrainerForm) -> Outcome<Trainer> {
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(errors) => return Outcome::Invalid(errors),
        };

        let result = match form.id {
            Some(id) => self.api.update::<Trainer, _>(id, &draft).await,
            None => self.api.create::<Trainer, _>(&draft).await,
        };

        match result {
            Ok(trainer) => {
                if form.is_edit() {
                    self.notifier.success(
                        "Trainer Updated",
                        format!("{}'s profile has been updated.", trainer.name),
                    );
                } else {
                    self.notifier.success(
                        "Trainer Added",
                        format!("{} has joined the team.", trainer.name),
                    );
                }
                self.trainers.upsert(trainer.clone());
                Outcome::Done(trainer)
            }
            Err(e) => {
                let message = e.user_message("Error saving trainer. Check your input.");
                self.notifier.error("Error", message.clone());
                Outcome::Failed(message)
            }
        }
    }

    pub async fn delete(&mut self, id: u64) -> Outcome<()> {
        match self.api.remove::<Trainer>(id).await {
            Ok(()) => {
                let name = self
                    .trainers
                    .get(id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| "Trainer".to_string());
                self.trainers.remove(id);
                self.notifier
                    .success("Trainer Deleted", format!("{name} has been removed."));
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

/// Table cell: the first two specialties and a `+K` overflow tag.
pub fn specialty_summary(trainer: &Trainer) -> (Vec<&str>, Option<String>) {
    let shown = trainer
        .specialties
        .iter()
        .take(TABLE_SPECIALTIES)
        .map(String::as_str)
        .collect();
    let hidden = trainer.specialties.len().saturating_sub(TABLE_SPECIALTIES);
    (shown, (hidden > 0).then(|| format!("+{hidden}")))
}
