// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Bookings and attendance page.

use crate::client::ApiClient;
use crate::models::{Attendance, Booking};
use crate::pages::{ResourceList, StatusBadge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingTab {
    #[default]
    All,
    Attended,
    Missed,
    Pending,
}

impl BookingTab {
    fn admits(&self, attendance: Attendance) -> bool {
        match self {
            BookingTab::All => true,
            BookingTab::Attended => attendance == Attendance::Attended,
            BookingTab::Missed => attendance == Attendance::Missed,
            BookingTab::Pending => attendance == Attendance::Pending,
        }
    }
}

/// Summary cards at the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceCounts {
    pub total: usize,
    pub attended: usize,
    pub missed: usize,
    pub pending: usize,
}

pub struct BookingsPage {
    api: ApiClient,
    bookings: ResourceList<Booking>,
    pub tab: BookingTab,
}

impl BookingsPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            bookings: ResourceList::new(),
            tab: BookingTab::All,
        }
    }

    /// A failed fetch leaves the page empty.
    pub async fn load(&mut self) {
        match self.api.list::<Booking>().await {
            Ok(bookings) => self.bookings.replace_all(bookings),
            Err(e) => {
                tracing::warn!(error = %e, "Could not load bookings");
                self.bookings.clear();
            }
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        self.bookings.items()
    }

    pub fn visible(&self) -> Vec<&Booking> {
        self.bookings
            .items()
            .iter()
            .filter(|b| self.tab.admits(b.attendance))
            .collect()
    }

    pub fn counts(&self) -> AttendanceCounts {
        self.bookings
            .items()
            .iter()
            .fold(AttendanceCounts::default(), |mut acc, b| {
                acc.total += 1;
                match b.attendance {
                    Attendance::Attended => acc.attended += 1,
                    Attendance::Missed => acc.missed += 1,
                    Attendance::Pending => acc.pending += 1,
                }
                acc
            })
    }
}

pub fn badge(booking: &Booking) -> StatusBadge {
    booking.attendance.into()
}

/// Row actions: pending bookings can be checked in or cancelled.
pub fn actions(booking: &Booking) -> &'static [&'static str] {
    match booking.attendance {
        Attendance::Pending => &["Check In", "Cancel"],
        _ => &["View Details"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingMember;

    fn booking(id: u64, attendance: Attendance) -> Booking {
        Booking {
            id,
            member: BookingMember {
                id: Some(id),
                name: "Sarah Johnson".to_string(),
                avatar: None,
            },
            session: "Morning Yoga Flow".to_string(),
            trainer: "Alexandra Kim".to_string(),
            date: "2024-03-14".to_string(),
            time: "06:00 AM".to_string(),
            location: "Studio A".to_string(),
            attendance,
        }
    }

    fn page() -> BookingsPage {
        let mut page = BookingsPage::new(ApiClient::new("http://127.0.0.1:9").unwrap());
        page.bookings.replace_all(vec![
            booking(1, Attendance::Attended),
            booking(2, Attendance::Attended),
            booking(3, Attendance::Missed),
            booking(4, Attendance::Pending),
        ]);
        page
    }

    #[test]
    fn test_counts_and_tabs() {
        let mut page = page();
        assert_eq!(
            page.counts(),
            AttendanceCounts {
                total: 4,
                attended: 2,
                missed: 1,
                pending: 1
            }
        );
        page.tab = BookingTab::Missed;
        assert_eq!(page.visible().len(), 1);
        page.tab = BookingTab::All;
        assert_eq!(page.visible().len(), 4);
    }

    #[test]
    fn test_row_actions_and_badge() {
        let pending = booking(9, Attendance::Pending);
        assert_eq!(actions(&pending), &["Check In", "Cancel"]);
        assert_eq!(badge(&pending), StatusBadge::Pending);
        assert_eq!(actions(&booking(1, Attendance::Missed)), &["View Details"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_empty() {
        let mut page = page();
        page.load().await;
        assert!(page.bookings().is_empty());
    }
}
