// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Form state and local validation.
//!
//! Each form validates before anything is sent. Invalid input yields
//! [`FieldErrors`] (field -> first message) for inline display; valid input
//! converts into the request body for the API.

pub mod auth;
pub mod member;
pub mod plan;
pub mod session;
pub mod subscribe;
pub mod trainer;

pub use auth::{LoginForm, PasswordChecks, ProfileForm, RegisterForm};
pub use member::MemberForm;
pub use plan::PlanForm;
pub use session::SessionForm;
pub use subscribe::SubscribeForm;
pub use trainer::TrainerForm;

use std::collections::BTreeMap;

/// Summary shown in a toast when any required field is missing.
pub const FILL_REQUIRED: &str = "Please fill in all required fields.";

/// Inline validation messages, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message. The first message for a field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Field errors from a 422 body, keeping the first message per field.
    pub fn from_server(errors: &BTreeMap<String, Vec<String>>) -> Self {
        let mut out = Self::new();
        for (field, messages) in errors {
            if let Some(first) = messages.first() {
                out.add(field, first.clone());
            }
        }
        out
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&joined.join("; "))
    }
}

// ─── Shared rules ────────────────────────────────────────────

/// Loose email check: some `x@y.z` token with no whitespace inside.
pub fn is_valid_email(raw: &str) -> bool {
    raw.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// Exactly `len` ASCII digits.
pub fn is_digits(raw: &str, len: usize) -> bool {
    raw.len() == len && raw.chars().all(|c| c.is_ascii_digit())
}

/// Digits, spaces, `-`, `+`, `(` and `)` only; at least one character.
pub fn is_phone_like(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "-+()".contains(c))
}

pub(crate) fn blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// `Some(trimmed)` for non-blank input.
pub(crate) fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
