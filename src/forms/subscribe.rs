// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Plan checkout form.

use chrono::{DateTime, NaiveDate, Utc};

use crate::forms::{blank, is_phone_like, non_blank, FieldErrors};
use crate::models::{Gender, PaymentMethod, Plan, SubscriberProfile, Subscription, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscribeForm {
    pub full_name: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: String,
    pub weight: String,
    pub blood_type: String,
    pub payment_method: Option<PaymentMethod>,
    /// `data:` URLs of the uploaded photos
    pub profile_photo: Option<String>,
    pub id_photo: Option<String>,
}

impl SubscribeForm {
    /// Start with the signed-in user's name filled in.
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            full_name: user.map(|u| u.name.clone()).unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(PaymentMethod, SubscriberProfile), FieldErrors> {
        let mut errors = FieldErrors::new();

        if blank(&self.full_name) {
            errors.add("full_name", "Full name is required");
        }
        if blank(&self.phone) {
            errors.add("phone", "Phone number is required");
        } else if !is_phone_like(&self.phone) {
            errors.add("phone", "Please enter a valid phone number");
        }
        if self.gender.is_none() {
            errors.add("gender", "Please select your gender");
        }
        if self.date_of_birth.is_none() {
            errors.add("date_of_birth", "Date of birth is required");
        }
        if self.payment_method.is_none() {
            errors.add("payment_method", "Please select a payment method");
        }

        errors.into_result()?;

        let (Some(gender), Some(date_of_birth), Some(payment_method)) =
            (self.gender, self.date_of_birth, self.payment_method)
        else {
            return Err(FieldErrors::new());
        };

        let profile = SubscriberProfile {
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            gender,
            date_of_birth,
            height: non_blank(&self.height),
            weight: non_blank(&self.weight),
            blood_type: non_blank(&self.blood_type),
            profile_photo: self.profile_photo.clone(),
            id_photo: self.id_photo.clone(),
        };
        Ok((payment_method, profile))
    }

    /// Validate and start a subscription to `plan` at `now`.
    pub fn subscribe(&self, plan: &Plan, now: DateTime<Utc>) -> Result<Subscription, FieldErrors> {
        let (payment_method, profile) = self.validate()?;
        Ok(Subscription::start(plan, payment_method, profile, now))
    }
}
