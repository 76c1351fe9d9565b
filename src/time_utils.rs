// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Shared helpers for date/time formatting and arithmetic.

use chrono::{DateTime, Months, NaiveDate, NaiveTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `13:05` -> `01:05 PM`
pub fn format_clock_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// `01:05 PM` -> `13:05`. Accepts lowercase meridiems.
pub fn parse_clock_12h(raw: &str) -> Result<NaiveTime, String> {
    let normalized = raw.trim().to_ascii_uppercase();
    NaiveTime::parse_from_str(&normalized, "%I:%M %p").map_err(|_| format!("invalid time: {raw}"))
}

/// Calendar-month addition; clamps to the last day of shorter months
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(start: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// `2024-01-15` -> `Jan 15, 2024`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clock_formatting() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let midnight = NaiveTime::from_hms_opt(0, 15, 0).unwrap();
        assert_eq!(format_clock_12h(noon), "12:00 PM");
        assert_eq!(format_clock_12h(midnight), "12:15 AM");
        assert_eq!(parse_clock_12h("12:15 am").unwrap(), midnight);
        assert!(parse_clock_12h("13:15 PM").is_err());
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        let jan31 = Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap();
        let end = add_months(jan31, 1);
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 29, 10, 0, 0).unwrap());

        let twelve = add_months(jan31, 12);
        assert_eq!(twelve, Utc.with_ymd_and_hms(2025, 1, 31, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_display_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        assert_eq!(format_display_date(d), "Mar 8, 2024");
        let t = Utc.with_ymd_and_hms(2024, 3, 8, 6, 30, 0).unwrap();
        assert_eq!(format_utc_rfc3339(t), "2024-03-08T06:30:00Z");
    }
}
