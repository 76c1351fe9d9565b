// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Trainer model.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum TrainerStatus {
    #[default]
    Active,
    Inactive,
}

impl TrainerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TrainerStatus::Active => "Active",
            TrainerStatus::Inactive => "Inactive",
        }
    }
}

/// Trainer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Trainer {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Accepted on the wire as a list or a comma-delimited string.
    #[serde(default, deserialize_with = "deserialize_specialties")]
    pub specialties: Vec<String>,
    #[serde(default, alias = "hireDate")]
    pub hire_date: Option<NaiveDate>,
    /// Number of sessions led
    #[serde(default)]
    pub sessions: u32,
    #[serde(default)]
    pub status: TrainerStatus,
    pub gender: Gender,
    #[serde(default, alias = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, alias = "photo")]
    pub avatar: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpecialtiesRepr {
    List(Vec<String>),
    Delimited(String),
}

/// Split a free-text specialties field ("Yoga, Pilates") into entries.
pub fn split_specialties(raw: &str) -> Vec<String> {
    raw.split([',', ';', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize either wire representation into a trimmed list.
pub fn deserialize_specialties<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<SpecialtiesRepr>::deserialize(deserializer)?;
    Ok(match repr {
        None => Vec::new(),
        Some(SpecialtiesRepr::List(items)) => items
            .iter()
            .flat_map(|item| split_specialties(item))
            .collect(),
        Some(SpecialtiesRepr::Delimited(raw)) => split_specialties(&raw),
    })
}

/// JSON body for `POST /trainers` and `PUT /trainers/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    pub gender: Gender,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_specialties")]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TrainerStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialties_from_list_or_string() {
        let from_list: Trainer = serde_json::from_str(
            r#"{"id":1,"name":"Marcus Williams","email":"marcus.w@ironpulse.com",
                "phone":"+1 234 567 100","specialties":["Strength Training","HIIT"],
                "gender":"male"}"#,
        )
        .unwrap();
        let from_string: Trainer = serde_json::from_str(
            r#"{"id":1,"name":"Marcus Williams","email":"marcus.w@ironpulse.com",
                "phone":"+1 234 567 100","specialties":"Strength Training, HIIT,",
                "gender":"male"}"#,
        )
        .unwrap();

        assert_eq!(from_list.specialties, vec!["Strength Training", "HIIT"]);
        assert_eq!(from_list.specialties, from_string.specialties);
    }

    #[test]
    fn test_null_specialties_is_empty() {
        let t: Trainer = serde_json::from_str(
            r#"{"id":2,"name":"A","email":"a@b.c","phone":"1","specialties":null,
                "gender":"female","hireDate":"2024-01-02"}"#,
        )
        .unwrap();
        assert!(t.specialties.is_empty());
        assert_eq!(t.hire_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(t.status.label(), "Active");
    }
}
