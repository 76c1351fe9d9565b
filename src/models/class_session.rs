// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Scheduled class ("session") model.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils::{format_clock_12h, parse_clock_12h};

/// Display status of a class. Chosen by whoever writes the record; it is
/// not recomputed from capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Upcoming,
    Full,
    #[default]
    Available,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "Upcoming",
            SessionStatus::Full => "Full",
            SessionStatus::Available => "Available",
        }
    }
}

/// Start/end of a class, rendered as `"06:00 AM - 07:00 AM"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Build from 24-hour form inputs such as `"09:00"` and `"10:30"`.
    pub fn from_24h(start: &str, end: &str) -> Result<Self, String> {
        let parse = |s: &str| {
            NaiveTime::parse_from_str(s.trim(), "%H:%M")
                .map_err(|_| format!("invalid time: {s}"))
        };
        Ok(Self::new(parse(start)?, parse(end)?))
    }

    /// 24-hour inputs for pre-filling an edit form.
    pub fn to_24h(&self) -> (String, String) {
        (
            self.start.format("%H:%M").to_string(),
            self.end.format("%H:%M").to_string(),
        )
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_clock_12h(self.start),
            format_clock_12h(self.end)
        )
    }
}

impl std::str::FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(" - ")
            .ok_or_else(|| format!("invalid time window: {s}"))?;
        Ok(Self::new(parse_clock_12h(start)?, parse_clock_12h(end)?))
    }
}

impl Serialize for TimeWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Bookable class instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ClassSession {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[serde(alias = "name")]
    pub description: String,
    #[serde(alias = "trainer")]
    pub trainer_name: String,
    #[serde(default, alias = "trainerAvatar")]
    pub trainer_avatar: Option<String>,
    #[serde(alias = "category")]
    pub category_name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub time: TimeWindow,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    pub capacity: u32,
    #[serde(default)]
    pub booked: u32,
    #[serde(default)]
    pub status: SessionStatus,
}

fn default_date() -> String {
    "Today".to_string()
}

impl ClassSession {
    /// Whether the "Book Now" action is offered.
    pub fn is_bookable(&self) -> bool {
        self.status != SessionStatus::Full
    }

    /// Call-to-action text on the session card.
    pub fn action_label(&self) -> &'static str {
        if self.is_bookable() {
            "Book Now"
        } else {
            "Waitlist"
        }
    }

    /// e.g. `18/20`
    pub fn capacity_label(&self) -> String {
        format!("{}/{}", self.booked, self.capacity)
    }

    /// Three-letter category tag shown on the card.
    pub fn category_tag(&self) -> String {
        self.category_name.chars().take(3).collect()
    }
}

/// JSON body for `POST /sessions` and `PUT /sessions/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSessionDraft {
    pub description: String,
    pub trainer_name: String,
    #[serde(default)]
    pub trainer_avatar: Option<String>,
    pub category_name: String,
    pub time: TimeWindow,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    pub capacity: u32,
    #[serde(default)]
    pub booked: u32,
    #[serde(default)]
    pub status: SessionStatus,
}
