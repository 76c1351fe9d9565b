// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Gym member model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Gender;

/// Membership status. Set explicitly by staff, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Expired,
    Pending,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 3] = [
        MemberStatus::Active,
        MemberStatus::Expired,
        MemberStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Expired => "expired",
            MemberStatus::Pending => "pending",
        }
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(MemberStatus::Active),
            "expired" => Ok(MemberStatus::Expired),
            "pending" => Ok(MemberStatus::Pending),
            other => Err(format!("unknown member status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub building_num: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.street.is_none() && self.building_num.is_none()
    }
}

/// Gym member record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Member {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Plan name (e.g. "Premium")
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default, alias = "joinDate")]
    pub join_date: Option<NaiveDate>,
    /// Photo URL or `data:` URL
    #[serde(default, alias = "avatar")]
    pub photo: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default, alias = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub weight: Option<f32>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Uploaded image attached to a member form.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fields submitted (as multipart) for `POST /members` and `PUT /members/:id`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    pub status: MemberStatus,
    pub join_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub blood_type: Option<String>,
    pub note: Option<String>,
    pub address: Address,
    pub photo: Option<PhotoUpload>,
}

impl MemberDraft {
    /// Flatten into text form fields. Address parts use bracket keys
    /// (`address[city]`), matching what PHP-style backends expect.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("plan", self.plan.clone()),
            ("status", self.status.as_str().to_string()),
        ];
        let optional = [
            ("join_date", self.join_date.map(|d| d.to_string())),
            (
                "gender",
                self.gender.map(|g| match g {
                    Gender::Male => "male".to_string(),
                    Gender::Female => "female".to_string(),
                }),
            ),
            ("date_of_birth", self.date_of_birth.map(|d| d.to_string())),
            ("height", self.height.map(|h| h.to_string())),
            ("weight", self.weight.map(|w| w.to_string())),
            ("blood_type", self.blood_type.clone()),
            ("note", self.note.clone()),
            ("address[city]", self.address.city.clone()),
            ("address[street]", self.address.street.clone()),
            ("address[building_num]", self.address.building_num.clone()),
        ];
        fields.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        );
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fields_skip_empty_optionals() {
        let draft = MemberDraft {
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@email.com".to_string(),
            phone: "+1 234 567 890".to_string(),
            plan: "Premium".to_string(),
            address: Address {
                city: Some("Cairo".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let fields = draft.text_fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["name", "email", "phone", "plan", "status", "address[city]"]
        );
        assert_eq!(fields[4].1, "active");
    }

    #[test]
    fn test_member_accepts_legacy_field_names() {
        let json = r#"{"id":3,"name":"Emily Rodriguez","email":"emily.r@email.com",
            "phone":"+1 234 567 892","plan":"Premium","status":"expired",
            "joinDate":"2023-11-20","avatar":"https://example.com/e.jpg"}"#;
        let m: Member = serde_json::from_str(json).unwrap();
        assert_eq!(m.status, MemberStatus::Expired);
        assert_eq!(m.join_date, NaiveDate::from_ymd_opt(2023, 11, 20));
        assert_eq!(m.photo.as_deref(), Some("https://example.com/e.jpg"));
    }
}
