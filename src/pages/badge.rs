// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Status badges shown next to members, sessions, plans and bookings.

use crate::models::{Attendance, MemberStatus, Plan, SessionStatus, TrainerStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusBadge {
    #[default]
    Active,
    Expired,
    Pending,
    Full,
    Upcoming,
    Available,
    Inactive,
}

/// Color family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Destructive,
    Warning,
    Info,
    Muted,
}

impl StatusBadge {
    pub fn tone(&self) -> Tone {
        match self {
            StatusBadge::Active | StatusBadge::Available => Tone::Success,
            StatusBadge::Expired | StatusBadge::Full => Tone::Destructive,
            StatusBadge::Pending => Tone::Warning,
            StatusBadge::Upcoming => Tone::Info,
            StatusBadge::Inactive => Tone::Muted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBadge::Active => "Active",
            StatusBadge::Expired => "Expired",
            StatusBadge::Pending => "Pending",
            StatusBadge::Full => "Full",
            StatusBadge::Upcoming => "Upcoming",
            StatusBadge::Available => "Available",
            StatusBadge::Inactive => "Inactive",
        }
    }
}

impl From<MemberStatus> for StatusBadge {
    fn from(status: MemberStatus) -> Self {
        match status {
            MemberStatus::Active => StatusBadge::Active,
            MemberStatus::Expired => StatusBadge::Expired,
            MemberStatus::Pending => StatusBadge::Pending,
        }
    }
}

impl From<SessionStatus> for StatusBadge {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Full => StatusBadge::Full,
            SessionStatus::Upcoming => StatusBadge::Upcoming,
            SessionStatus::Available => StatusBadge::Available,
        }
    }
}

impl From<TrainerStatus> for StatusBadge {
    fn from(status: TrainerStatus) -> Self {
        match status {
            TrainerStatus::Active => StatusBadge::Active,
            TrainerStatus::Inactive => StatusBadge::Inactive,
        }
    }
}

/// Attended reads as active, missed as expired, anything else pending.
impl From<Attendance> for StatusBadge {
    fn from(attendance: Attendance) -> Self {
        match attendance {
            Attendance::Attended => StatusBadge::Active,
            Attendance::Missed => StatusBadge::Expired,
            Attendance::Pending => StatusBadge::Pending,
        }
    }
}

impl From<&Plan> for StatusBadge {
    fn from(plan: &Plan) -> Self {
        if plan.is_active {
            StatusBadge::Active
        } else {
            StatusBadge::Inactive
        }
    }
}
