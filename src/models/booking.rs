//! Booking model: a member's reservation against a class.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Attendance outcome. Unknown values from the backend read as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Attended,
    Missed,
    #[default]
    #[serde(other)]
    Pending,
}

impl Attendance {
    pub fn label(&self) -> &'static str {
        match self {
            Attendance::Attended => "Attended",
            Attendance::Missed => "Missed",
            Attendance::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BookingMember {
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Reservation row on the bookings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Booking {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub member: BookingMember,
    /// Class description
    pub session: String,
    #[serde(default)]
    pub trainer: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub attendance: Attendance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_attendance_is_pending() {
        let json = r#"{"id":1,"member":{"name":"Sarah Johnson"},"session":"Morning Yoga Flow",
            "date":"2024-03-14","time":"06:00 AM","attendance":"cancelled"}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.attendance, Attendance::Pending);
        assert_eq!(booking.member.id, None);
        assert!(booking.location.is_empty());
    }
}
