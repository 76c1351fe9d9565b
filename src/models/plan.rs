// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Membership plan model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Billing period shown next to the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Month,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

/// A single checklist entry on a plan card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanFeature {
    pub name: String,
    pub included: bool,
}

impl PlanFeature {
    pub fn new(name: &str, included: bool) -> Self {
        Self {
            name: name.to_string(),
            included,
        }
    }
}

/// Checklist offered when creating a new plan.
pub const DEFAULT_FEATURES: [&str; 6] = [
    "Access to gym equipment",
    "Locker room access",
    "Basic fitness assessment",
    "Group classes",
    "Personal training sessions",
    "Nutrition consultation",
];

/// Fresh copy of the default checklist with nothing included.
pub fn default_features() -> Vec<PlanFeature> {
    DEFAULT_FEATURES
        .iter()
        .map(|name| PlanFeature::new(name, false))
        .collect()
}

/// Membership tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Plan {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    /// Length of one subscription, in months
    pub duration: u32,
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub features: Vec<PlanFeature>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, alias = "activeMembers")]
    pub active_members: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Plan {
    /// Badge text on the admin plan card.
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// e.g. `$49/month`
    pub fn price_label(&self) -> String {
        format!("${}/{}", format_price(self.price), self.period.as_str())
    }

    /// e.g. `1 month`, `3 months`
    pub fn duration_label(&self) -> String {
        if self.duration == 1 {
            "1 month".to_string()
        } else {
            format!("{} months", self.duration)
        }
    }

    pub fn included_features(&self) -> impl Iterator<Item = &PlanFeature> {
        self.features.iter().filter(|f| f.included)
    }
}

/// Whole prices render without decimals.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{:.2}", price)
    }
}

/// Body for `POST /plans` and `PUT /plans/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub duration: u32,
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub features: Vec<PlanFeature>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<&Plan> for PlanDraft {
    fn from(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: plan.price,
            duration: plan.duration,
            period: plan.period,
            features: plan.features.clone(),
            popular: plan.popular,
            is_active: plan.is_active,
        }
    }
}

/// Body for `PATCH /plans/:id/status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanStatusUpdate {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(price: f64, duration: u32) -> Plan {
        Plan {
            id: 1,
            name: "Gold".to_string(),
            description: None,
            price,
            duration,
            period: Period::Month,
            features: default_features(),
            popular: false,
            is_active: false,
            active_members: 0,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_labels() {
        let p = plan(49.0, 1);
        assert_eq!(p.price_label(), "$49/month");
        assert_eq!(p.duration_label(), "1 month");
        assert_eq!(p.status_label(), "Inactive");
        assert_eq!(plan(19.5, 3).price_label(), "$19.50/month");
        assert_eq!(plan(19.5, 3).duration_label(), "3 months");
    }

    #[test]
    fn test_accepts_camel_case_member_count() {
        let json = r#"{"id":7,"name":"Basic","price":29,"duration":1,"period":"month",
            "features":[{"name":"Group classes","included":true}],
            "popular":false,"is_active":true,"activeMembers":12}"#;
        let p: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(p.active_members, 12);
        assert_eq!(p.included_features().count(), 1);
    }

    #[test]
    fn test_default_features_unchecked() {
        let features = default_features();
        assert_eq!(features.len(), 6);
        assert!(features.iter().all(|f| !f.included));
    }
}
