// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Membership plans: the shared plan store and the admin plans page.

use crate::client::{ApiClient, ClientResult};
use crate::forms::{PlanForm, FILL_REQUIRED};
use crate::models::{Plan, PlanDraft};
use crate::notify::Notifier;
use crate::pages::{Outcome, ResourceList, StatusBadge};

/// Server-backed plan list shared by the landing, details and admin pages.
pub struct PlansStore {
    api: ApiClient,
    plans: ResourceList<Plan>,
    loading: bool,
}

impl PlansStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            plans: ResourceList::new(),
            loading: true,
        }
    }

    /// Re-fetch `GET /plans`. On failure the current list is kept.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let result = self.api.list::<Plan>().await;
        self.loading = false;
        match result {
            Ok(plans) => {
                self.plans.replace_all(plans);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load plans");
                Err(e)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn plans(&self) -> &[Plan] {
        self.plans.items()
    }

    /// Plans offered to visitors.
    pub fn active_plans(&self) -> impl Iterator<Item = &Plan> {
        self.plans.items().iter().filter(|p| p.is_active)
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Plan> {
        self.plans.get(id)
    }

    pub async fn add(&mut self, draft: &PlanDraft) -> ClientResult<Plan> {
        let plan: Plan = self.api.create::<Plan, _>(draft).await?;
        self.plans.upsert(plan.clone());
        Ok(plan)
    }

    pub async fn update(&mut self, id: u64, draft: &PlanDraft) -> ClientResult<Plan> {
        let plan: Plan = self.api.update::<Plan, _>(id, draft).await?;
        self.plans.upsert(plan.clone());
        Ok(plan)
    }

    pub async fn delete(&mut self, id: u64) -> ClientResult<()> {
        self.api.remove::<Plan>(id).await?;
        self.plans.remove(id);
        Ok(())
    }

    pub async fn set_status(&mut self, id: u64, is_active: bool) -> ClientResult<Plan> {
        let plan = self.api.set_plan_status(id, is_active).await?;
        self.plans.upsert(plan.clone());
        Ok(plan)
    }
}

/// Admin plan management.
pub struct PlansPage {
    store: PlansStore,
    notifier: Notifier,
    pub form: PlanForm,
}

impl PlansPage {
    pub fn new(api: ApiClient, notifier: Notifier) -> Self {
        Self {
            store: PlansStore::new(api),
            notifier,
            form: PlanForm::default(),
        }
    }

    pub async fn load(&mut self) {
        if let Err(e) = self.store.refresh().await {
            self.notifier
                .error("Error", e.user_message("Could not load plans"));
        }
    }

    pub fn plans(&self) -> &[Plan] {
        self.store.plans()
    }

    pub fn store(&self) -> &PlansStore {
        &self.store
    }

    pub fn badge(&self, id: u64) -> Option<StatusBadge> {
        self.store.get_by_id(id).map(StatusBadge::from)
    }

    pub fn open_add(&mut self) {
        self.form.reset();
    }

    pub fn open_edit(&mut self, id: u64) -> bool {
        match self.store.get_by_id(id) {
            Some(plan) => {
                self.form = PlanForm::edit(plan);
                true
            }
            None => false,
        }
    }

    /// Save the open form. Invalid input raises a validation toast and
    /// sends nothing.
    pub async fn submit(&mut self) -> Outcome<Plan> {
        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                self.notifier.error("Validation Error", FILL_REQUIRED);
                return Outcome::Invalid(errors);
            }
        };

        let result = match self.form.id {
            Some(id) => self.store.update(id, &draft).await,
            None => self.store.add(&draft).await,
        };

        match result {
            Ok(plan) => {
                if self.form.id.is_some() {
                    self.notifier.success(
                        "Plan Updated",
                        format!("{} plan has been updated successfully.", plan.name),
                    );
                } else {
                    self.notifier.success(
                        "Plan Created",
                        format!("{} plan has been created successfully.", plan.name),
                    );
                }
                self.form.reset();
                Outcome::Done(plan)
            }
            Err(e) => {
                let message = e.user_message("Something went wrong");
                self.notifier.error("Error", message.clone());
                Outcome::Failed(message)
            }
        }
    }

    /// Flip a plan between Active and Inactive.
    pub async fn toggle_status(&mut self, id: u64) -> Outcome<Plan> {
        let Some(current) = self.store.get_by_id(id) else {
            return Outcome::Failed("Plan not found".to_string());
        };
        let name = current.name.clone();
        let next = !current.is_active;

        match self.store.set_status(id, next).await {
            Ok(plan) => {
                let label = if next { "Active" } else { "Inactive" };
                self.notifier
                    .success("Status Updated", format!("{name} is now {label}"));
                Outcome::Done(plan)
            }
            Err(e) => {
                let message = e.user_message("Could not update status");
                self.notifier.error("Error", message.clone());
                Outcome::Failed(message)
            }
        }
    }

    pub async fn delete(&mut self, id: u64) -> Outcome<()> {
        let name = self
            .store
            .get_by_id(id)
            .map(|p| p.name.clone())
            .unwrap_or_default();

        match self.store.delete(id).await {
            Ok(()) => {
                self.notifier
                    .success("Plan Deleted", format!("{name} plan has been removed."));
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
