// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Add/edit trainer form.

use chrono::NaiveDate;

use crate::forms::{blank, is_valid_email, FieldErrors};
use crate::models::trainer::split_specialties;
use crate::models::{Gender, Trainer, TrainerDraft, TrainerStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerForm {
    /// Set when editing an existing trainer.
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
    /// Free text, comma separated
    pub specialties: String,
    pub hire_date: Option<NaiveDate>,
    pub status: TrainerStatus,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
}

impl Default for TrainerForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            password_confirmation: String::new(),
            specialties: String::new(),
            hire_date: None,
            status: TrainerStatus::Active,
            gender: Gender::Male,
            date_of_birth: None,
        }
    }
}

impl TrainerForm {
    pub fn edit(trainer: &Trainer) -> Self {
        Self {
            id: Some(trainer.id),
            name: trainer.name.clone(),
            email: trainer.email.clone(),
            phone: trainer.phone.clone(),
            specialties: trainer.specialties.join(", "),
            hire_date: trainer.hire_date,
            status: trainer.status,
            gender: trainer.gender,
            date_of_birth: trainer.date_of_birth,
            ..Default::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// A password is required for new trainers; when editing, an empty
    /// password leaves the current one in place.
    pub fn validate(&self) -> Result<TrainerDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        if blank(&self.name) {
            errors.add("name", "Name is required");
        }
        if blank(&self.email) {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email");
        }
        if blank(&self.phone) {
            errors.add("phone", "Phone is required");
        }

        let wants_password = !self.password.is_empty() || !self.password_confirmation.is_empty();
        if !self.is_edit() && self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if wants_password && self.password.chars().count() < 8 {
            errors.add("password", "Password must be at least 8 characters");
        }
        if wants_password && self.password != self.password_confirmation {
            errors.add("password_confirmation", "Passwords do not match");
        }

        errors.into_result()?;

        let (password, password_confirmation) = if wants_password {
            (
                Some(self.password.clone()),
                Some(self.password_confirmation.clone()),
            )
        } else {
            (None, None)
        };

        Ok(TrainerDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password,
            password_confirmation,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            specialties: split_specialties(&self.specialties),
            hire_date: self.hire_date,
            status: self.status,
        })
    }
}
