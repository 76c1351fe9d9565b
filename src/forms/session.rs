// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Add/edit class session form.

use crate::forms::{blank, FieldErrors};
use crate::models::{ClassSession, ClassSessionDraft, SessionStatus, TimeWindow, Trainer};

pub const CATEGORIES: [&str; 8] = [
    "Yoga", "HIIT", "Strength", "Cardio", "Dance", "Boxing", "Spinning", "Pilates",
];

pub const MAX_CAPACITY: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionForm {
    pub description: String,
    pub trainer_name: String,
    pub category_name: String,
    /// 24-hour `HH:MM`
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub capacity: u32,
    booked: u32,
    status: SessionStatus,
    date: String,
}

impl SessionForm {
    /// Blank form, defaulting to the first trainer.
    pub fn new(trainers: &[Trainer]) -> Self {
        let (start_time, end_time) = TimeWindow::default().to_24h();
        Self {
            description: String::new(),
            trainer_name: trainers.first().map(|t| t.name.clone()).unwrap_or_default(),
            category_name: CATEGORIES[0].to_string(),
            start_time,
            end_time,
            location: None,
            capacity: 20,
            booked: 0,
            status: SessionStatus::Available,
            date: "Today".to_string(),
        }
    }

    pub fn edit(session: &ClassSession, trainers: &[Trainer]) -> Self {
        let (start_time, end_time) = session.time.to_24h();
        let trainer_name = if session.trainer_name.is_empty() {
            trainers.first().map(|t| t.name.clone()).unwrap_or_default()
        } else {
            session.trainer_name.clone()
        };
        Self {
            description: session.description.clone(),
            trainer_name,
            category_name: session.category_name.clone(),
            start_time,
            end_time,
            location: session.location.clone(),
            capacity: session.capacity,
            booked: session.booked,
            status: session.status,
            date: session.date.clone(),
        }
    }

    /// Booked count and status carry over from the edited session.
    pub fn validate(&self, trainers: &[Trainer]) -> Result<ClassSessionDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        if trainers.is_empty() {
            errors.add(
                "trainer_name",
                "No trainers available. Please add a trainer first.",
            );
        }
        if blank(&self.description) {
            errors.add("description", "Description is required");
        }
        if !(1..=MAX_CAPACITY).contains(&self.capacity) {
            errors.add(
                "capacity",
                format!("Capacity must be between 1 and {MAX_CAPACITY}"),
            );
        }

        let time = match TimeWindow::from_24h(&self.start_time, &self.end_time) {
            Ok(window) if window.duration_minutes() > 0 => Some(window),
            Ok(_) => {
                errors.add("time", "End time must be after start time");
                None
            }
            Err(_) => {
                errors.add("time", "Please enter a valid time");
                None
            }
        };

        errors.into_result()?;

        // Unknown names fall back to the first trainer.
        let trainer = trainers
            .iter()
            .find(|t| t.name == self.trainer_name)
            .or_else(|| trainers.first());

        Ok(ClassSessionDraft {
            description: self.description.trim().to_string(),
            trainer_name: trainer.map(|t| t.name.clone()).unwrap_or_default(),
            trainer_avatar: trainer.and_then(|t| t.avatar.clone()),
            category_name: self.category_name.clone(),
            time: time.unwrap_or_default(),
            date: self.date.clone(),
            location: self.location.clone().filter(|l| !blank(l)),
            capacity: self.capacity,
            booked: self.booked.min(self.capacity),
            status: self.status,
        })
    }
}
