// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Data models exchanged with the REST API.

pub mod booking;
pub mod class_session;
pub mod member;
pub mod plan;
pub mod subscription;
pub mod trainer;
pub mod user;

pub use booking::{Attendance, Booking, BookingMember};
pub use class_session::{ClassSession, ClassSessionDraft, SessionStatus, TimeWindow};
pub use member::{Address, Member, MemberDraft, MemberStatus, PhotoUpload};
pub use plan::{Period, Plan, PlanDraft, PlanFeature, PlanStatusUpdate};
pub use subscription::{PaymentMethod, SubscriberProfile, Subscription};
pub use trainer::{Trainer, TrainerDraft, TrainerStatus};
pub use user::{AuthSession, Credentials, Gender, Registration, User, UserRole};

/// A record addressed by numeric id under a REST collection path.
pub trait Record: Clone + serde::de::DeserializeOwned + Send + Sync + 'static {
    /// Collection path, e.g. `"members"`.
    const COLLECTION: &'static str;

    fn id(&self) -> u64;
}

impl Record for Member {
    const COLLECTION: &'static str = "members";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Trainer {
    const COLLECTION: &'static str = "trainers";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Plan {
    const COLLECTION: &'static str = "plans";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for ClassSession {
    const COLLECTION: &'static str = "sessions";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Booking {
    const COLLECTION: &'static str = "bookings";

    fn id(&self) -> u64 {
        self.id
    }
}
