// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Member subscription to a plan.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Gender, Plan};
use crate::time_utils::add_months;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Visa,
    Vodafone,
    Gym,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Visa,
        PaymentMethod::Vodafone,
        PaymentMethod::Gym,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Visa => "Visa / Credit Card",
            PaymentMethod::Vodafone => "Vodafone Cash",
            PaymentMethod::Gym => "Pay at Gym",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(PaymentMethod::Visa),
            "vodafone" => Ok(PaymentMethod::Vodafone),
            "gym" => Ok(PaymentMethod::Gym),
            other => Err(format!("unknown payment method: {other}")),
        }
    }
}

/// Profile details collected on the subscribe form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SubscriberProfile {
    pub full_name: String,
    pub phone: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub id_photo: Option<String>,
}

/// The single active subscription held for the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Subscription {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub plan_id: u64,
    pub plan_name: String,
    pub price: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub profile: SubscriberProfile,
}

impl Subscription {
    /// Start a subscription at `now`; it ends `plan.duration` months later.
    pub fn start(
        plan: &Plan,
        payment_method: PaymentMethod,
        profile: SubscriberProfile,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            plan_id: plan.id,
            plan_name: plan.name.clone(),
            price: plan.price,
            start_date: now,
            end_date: add_months(now, plan.duration),
            payment_method,
            profile,
        }
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now < self.end_date
    }

    /// Whole days left, zero once expired.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.end_date - now).num_days().max(0)
    }
}
