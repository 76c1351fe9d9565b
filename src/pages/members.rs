// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Members admin page.

use futures_util::future;

use crate::client::ApiClient;
use crate::forms::member::DEFAULT_PLAN_NAMES;
use crate::forms::MemberForm;
use crate::models::{Member, MemberStatus, Plan};
use crate::notify::Notifier;
use crate::pages::{matches_query, showing_label, Outcome, ResourceList};

pub struct MembersPage {
    api: ApiClient,
    notifier: Notifier,
    members: ResourceList<Member>,
    plan_names: Vec<String>,
    pub search: String,
    /// `None` shows every plan
    pub plan_filter: Option<String>,
    pub status_filter: Option<MemberStatus>,
}

impl MembersPage {
    pub fn new(api: ApiClient, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            members: ResourceList::new(),
            plan_names: DEFAULT_PLAN_NAMES.iter().map(|s| s.to_string()).collect(),
            search: String::new(),
            plan_filter: None,
            status_filter: None,
        }
    }

    /// Fetch members and the plan names offered in the form.
    pub async fn load(&mut self) {
        let (members, plans) =
            future::join(self.api.list::<Member>(), self.api.list::<Plan>()).await;

        match members {
            Ok(members) => self.members.replace_all(members),
            Err(e) => {
                self.members.clear();
                self.notifier
                    .error("Error", e.user_message("Could not load members"));
            }
        }

        match plans {
            Ok(plans) if !plans.is_empty() => {
                self.plan_names = plans.into_iter().map(|p| p.name).collect();
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Falling back to default plan names"),
        }
    }

    pub fn members(&self) -> &[Member] {
        self.members.items()
    }

    pub fn plan_names(&self) -> &[String] {
        &self.plan_names
    }

    pub fn visible(&self) -> Vec<&Member> {
        self.members
            .items()
            .iter()
            .filter(|m| matches_query(&m.name, &self.search) || matches_query(&m.email, &self.search))
            .filter(|m| {
                self.plan_filter
                    .as_deref()
                    .is_none_or(|plan| m.plan.eq_ignore_ascii_case(plan))
            })
            .filter(|m| self.status_filter.is_none_or(|status| m.status == status))
            .collect()
    }

    pub fn showing_label(&self) -> String {
        showing_label(self.visible().len(), self.members.len(), "members")
    }

    /// Create (no `id`) or update a member from the form.
    pub async fn save(&mut self, id: Option<u64>, form: &MemberForm) -> Outcome<Member> {
        let plan_names: Vec<&str> = self.plan_names.iter().map(String::as_str).collect();
        let draft = match form.validate(&plan_names) {
            Ok(draft) => draft,
            Err(errors) => return Outcome::Invalid(errors),
        };

        let result = match id {
            Some(id) => self.api.update_member(id, &draft).await,
            None => self.api.create_member(&draft).await,
        };

        match result {
            Ok(member) => {
                let (title, description) = match id {
                    Some(_) => (
                        "Member Updated",
                        format!("{}'s details have been updated.", member.name),
                    ),
                    None => (
                        "Member Added",
                        format!("{} has been added successfully.", member.name),
                    ),
                };
                self.notifier.success(title, description);
                self.members.upsert(member.clone());
                Outcome::Done(member)
            }
            Err(e) => {
                let message = e.user_message("Something went wrong");
                self.notifier.error("Error", message.clone());
                Outcome::Failed(message)
            }
        }
    }

    pub async fn delete(&mut self, id: u64) -> Outcome<()> {
        let name = self
            .members
            .get(id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "Member".to_string());

        match self.api.remove::<Member>(id).await {
            Ok(()) => {
                self.members.remove(id);
                self.notifier
                    .success("Member Deleted", format!("{name} has been removed."));
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
