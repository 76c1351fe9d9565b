// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Add/edit plan form.

use crate::forms::{blank, FieldErrors, FILL_REQUIRED};
use crate::models::plan::default_features;
use crate::models::{Period, Plan, PlanDraft, PlanFeature};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanForm {
    /// Set when editing an existing plan.
    pub id: Option<u64>,
    pub name: String,
    pub price: f64,
    pub period: Period,
    pub duration: u32,
    pub description: String,
    pub features: Vec<PlanFeature>,
    pub popular: bool,
    pub is_active: bool,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            price: 0.0,
            period: Period::Month,
            duration: 1,
            description: String::new(),
            features: default_features(),
            popular: false,
            is_active: true,
        }
    }
}

impl PlanForm {
    pub fn edit(plan: &Plan) -> Self {
        Self {
            id: Some(plan.id),
            name: plan.name.clone(),
            price: plan.price,
            period: plan.period,
            duration: plan.duration,
            description: plan.description.clone().unwrap_or_default(),
            features: plan.features.clone(),
            popular: plan.popular,
            is_active: plan.is_active,
        }
    }

    /// Back to a blank form with the default checklist.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flip one checklist entry. Out-of-range indexes are ignored.
    pub fn toggle_feature(&mut self, index: usize) {
        if let Some(feature) = self.features.get_mut(index) {
            feature.included = !feature.included;
        }
    }

    /// Name and a positive price are required. Every failure carries the
    /// same summary message.
    pub fn validate(&self) -> Result<PlanDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        if blank(&self.name) {
            errors.add("name", FILL_REQUIRED);
        }
        if self.price.is_nan() || self.price <= 0.0 {
            errors.add("price", FILL_REQUIRED);
        }
        errors.into_result()?;

        let description = self.description.trim();
        Ok(PlanDraft {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price: self.price,
            duration: self.duration.max(1),
            period: self.period,
            features: self.features.clone(),
            popular: self.popular,
            is_active: self.is_active,
        })
    }
}
