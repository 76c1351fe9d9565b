// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Add/edit member form.

use crate::forms::{blank, is_valid_email, non_blank, FieldErrors};
use crate::models::{Member, MemberDraft, MemberStatus, PhotoUpload};

/// Plan names offered when the plan list has not been fetched.
pub const DEFAULT_PLAN_NAMES: [&str; 3] = ["Basic", "Gold", "Premium"];

#[derive(Debug, Clone, PartialEq)]
pub struct MemberForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Plan name as selected, any case
    pub plan: String,
    pub status: MemberStatus,
    pub photo: Option<PhotoUpload>,
    /// Carried through unchanged when editing.
    base: MemberDraft,
}

impl Default for MemberForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            plan: "basic".to_string(),
            status: MemberStatus::Active,
            photo: None,
            base: MemberDraft::default(),
        }
    }
}

impl MemberForm {
    /// Pre-fill for editing. The name splits on its first space.
    pub fn edit(member: &Member) -> Self {
        let (first, last) = split_name(&member.name);
        Self {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            plan: member.plan.to_lowercase(),
            status: member.status,
            photo: None,
            base: MemberDraft {
                join_date: member.join_date,
                gender: member.gender,
                date_of_birth: member.date_of_birth,
                height: member.height,
                weight: member.weight,
                blood_type: member.blood_type.clone(),
                note: member.note.clone(),
                address: member.address.clone().unwrap_or_default(),
                ..Default::default()
            },
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Validate against the plan names currently offered.
    pub fn validate(&self, plan_names: &[&str]) -> Result<MemberDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        if blank(&self.first_name) {
            errors.add("first_name", "First name is required");
        }
        if blank(&self.email) {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email");
        }
        if blank(&self.phone) {
            errors.add("phone", "Phone is required");
        }

        let plan = plan_names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(self.plan.trim()));
        if plan.is_none() {
            errors.add("plan", "Please select a valid plan");
        }

        errors.into_result()?;

        Ok(MemberDraft {
            name: self.full_name(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            plan: plan.map(|p| p.to_string()).unwrap_or_default(),
            status: self.status,
            photo: self.photo.clone(),
            blood_type: self.base.blood_type.as_deref().and_then(non_blank),
            ..self.base.clone()
        })
    }
}

/// `("Sarah", "Johnson")`; everything after the first space is the last name.
pub fn split_name(name: &str) -> (&str, &str) {
    name.split_once(' ').unwrap_or((name, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn member() -> Member {
        Member {
            id: 4,
            name: "Emily Rose Rodriguez".to_string(),
            email: "emily.r@email.com".to_string(),
            phone: "+1 234 567 893".to_string(),
            plan: "Gold".to_string(),
            status: MemberStatus::Pending,
            join_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            photo: None,
            gender: None,
            date_of_birth: None,
            height: Some(165.0),
            weight: None,
            blood_type: None,
            note: Some("Prefers mornings".to_string()),
            address: None,
        }
    }

    #[test]
    fn test_edit_splits_on_first_space() {
        let form = MemberForm::edit(&member());
        assert_eq!(form.first_name, "Emily");
        assert_eq!(form.last_name, "Rose Rodriguez");
        assert_eq!(form.plan, "gold");
        assert_eq!(form.full_name(), "Emily Rose Rodriguez");
    }

    #[test]
    fn test_edit_keeps_untouched_fields() {
        let draft = MemberForm::edit(&member())
            .validate(&DEFAULT_PLAN_NAMES)
            .unwrap();
        assert_eq!(draft.plan, "Gold");
        assert_eq!(draft.status, MemberStatus::Pending);
        assert_eq!(draft.height, Some(165.0));
        assert_eq!(draft.note.as_deref(), Some("Prefers mornings"));
        assert_eq!(draft.join_date, NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_required_fields() {
        let errors = MemberForm::default()
            .validate(&DEFAULT_PLAN_NAMES)
            .unwrap_err();
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("phone"), Some("Phone is required"));
        assert!(!errors.contains("plan"));
    }

    #[test]
    fn test_unknown_plan_rejected() {
        let form = MemberForm {
            first_name: "John".to_string(),
            email: "john@example.com".to_string(),
            phone: "555".to_string(),
            plan: "platinum".to_string(),
            ..Default::default()
        };
        let errors = form.validate(&DEFAULT_PLAN_NAMES).unwrap_err();
        assert_eq!(errors.get("plan"), Some("Please select a valid plan"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_single_name_has_no_trailing_space() {
        let form = MemberForm {
            first_name: "Cher".to_string(),
            email: "cher@example.com".to_string(),
            phone: "555".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(&DEFAULT_PLAN_NAMES).unwrap().name, "Cher");
    }
}
