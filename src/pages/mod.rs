// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Page state for the admin and member screens.
//!
//! Each page fetches its collection once on load, filters it locally and
//! splices records returned by mutations back into its list by id.

pub mod auth;
pub mod badge;
pub mod bookings;
pub mod dashboard;
pub mod members;
pub mod plans;
pub mod profile;
pub mod sessions;
pub mod settings;
pub mod subscribe;
pub mod trainers;

pub use auth::{LoginPage, RegisterPage};
pub use badge::StatusBadge;
pub use bookings::{BookingTab, BookingsPage};
pub use dashboard::{DashboardPage, DashboardStats};
pub use members::MembersPage;
pub use plans::{PlansPage, PlansStore};
pub use profile::ProfilePage;
pub use sessions::{SessionView, SessionsPage};
pub use settings::{NotificationSettings, SettingsPage};
pub use subscribe::SubscribePage;
pub use trainers::{TrainerView, TrainersPage};

use crate::forms::FieldErrors;
use crate::models::Record;

/// Result of a page action that may fail validation or the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    /// Rejected locally; nothing was sent.
    Invalid(FieldErrors),
    /// The request failed; carries the toast text.
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            _ => None,
        }
    }
}

/// Locally held copy of one collection.
#[derive(Debug, Clone)]
pub struct ResourceList<R> {
    items: Vec<R>,
}

impl<R> Default for ResourceList<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: Record> ResourceList<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, items: Vec<R>) {
        self.items = items;
    }

    /// Replace the row with the same id, or append it.
    pub fn upsert(&mut self, record: R) {
        match self.items.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => self.items.push(record),
        }
    }

    /// Drop exactly the row with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// `Showing 3 of 6 members`
pub fn showing_label(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {shown} of {total} {noun}")
}

/// Avatar fallback: first letter of each word, at most two.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Booking, BookingMember};

    fn booking(id: u64, session: &str) -> Booking {
        Booking {
            id,
            member: BookingMember {
                id: None,
                name: "Sarah Johnson".to_string(),
                avatar: None,
            },
            session: session.to_string(),
            trainer: String::new(),
            date: "2024-03-14".to_string(),
            time: "06:00 AM".to_string(),
            location: String::new(),
            attendance: Default::default(),
        }
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut list = ResourceList::new();
        list.upsert(booking(1, "Yoga"));
        list.upsert(booking(2, "HIIT"));
        list.upsert(booking(1, "Pilates"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().session, "Pilates");
    }

    #[test]
    fn test_remove_exact_id() {
        let mut list = ResourceList::new();
        list.replace_all(vec![booking(1, "a"), booking(2, "b"), booking(3, "c")]);

        assert!(list.remove(2));
        assert!(!list.remove(2));
        let ids: Vec<u64> = list.items().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_helpers() {
        assert!(matches_query("Sarah Johnson", "  SARAH "));
        assert!(matches_query("anything", ""));
        assert!(!matches_query("Sarah", "mike"));
        assert_eq!(showing_label(2, 6, "members"), "Showing 2 of 6 members");
        assert_eq!(initials("sarah lynn johnson"), "SL");
        assert_eq!(initials(""), "");
    }
}
