// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Startup data: the admin account plus optional demo records.

use crate::db::MemoryDb;
use crate::models::plan::DEFAULT_FEATURES;
use crate::models::{
    Address, Attendance, Booking, BookingMember, ClassSession, Gender, Member, MemberStatus,
    Period, Plan, PlanFeature, SessionStatus, TimeWindow, Trainer, TrainerStatus, UserRole,
};
use crate::services::password::hash_password;
use chrono::NaiveDate;

pub const ADMIN_EMAIL: &str = "admin@ironpulse.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const DEMO_MEMBER_EMAIL: &str = "member@ironpulse.com";
pub const DEMO_MEMBER_PASSWORD: &str = "member123";

/// Create the admin account, and demo data when `demo` is set.
pub fn seed(db: &MemoryDb, demo: bool) -> anyhow::Result<()> {
    if !db.email_taken(ADMIN_EMAIL) {
        db.create_user(
            "Admin",
            ADMIN_EMAIL,
            UserRole::Admin,
            hash_password(ADMIN_PASSWORD)?,
        )?;
    }

    if !demo {
        return Ok(());
    }

    if !db.email_taken(DEMO_MEMBER_EMAIL) {
        db.create_user(
            "Sarah Johnson",
            DEMO_MEMBER_EMAIL,
            UserRole::Member,
            hash_password(DEMO_MEMBER_PASSWORD)?,
        )?;
    }

    if db.plans().is_empty() {
        seed_plans(db);
    }
    if db.trainers().is_empty() {
        seed_trainers(db);
    }
    if db.sessions().is_empty() {
        seed_sessions(db)?;
    }
    if db.members().is_empty() {
        seed_members(db);
    }
    if db.bookings().is_empty() {
        seed_bookings(db);
    }

    tracing::info!(
        plans = db.plans().len(),
        trainers = db.trainers().len(),
        sessions = db.sessions().len(),
        members = db.members().len(),
        bookings = db.bookings().len(),
        "Seeded demo data"
    );
    Ok(())
}

/// The default checklist with the first `included` features ticked.
fn features(included: usize) -> Vec<PlanFeature> {
    DEFAULT_FEATURES
        .iter()
        .enumerate()
        .map(|(i, name)| PlanFeature::new(name, i < included))
        .collect()
}

fn seed_plans(db: &MemoryDb) {
    let now = crate::time_utils::format_utc_rfc3339(chrono::Utc::now());
    let plans = [
        ("Basic", "Everything you need to get started", 29.0, 2, false),
        ("Gold", "Our most popular membership", 49.0, 4, true),
        ("Premium", "Full access with personal coaching", 79.0, 6, false),
    ];
    for (name, description, price, included, popular) in plans {
        db.plans().insert_with(|id| Plan {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            price,
            duration: 1,
            period: Period::Month,
            features: features(included),
            popular,
            is_active: true,
            active_members: 0,
            created_at: Some(now.clone()),
            updated_at: Some(now.clone()),
        });
    }
}

fn seed_trainers(db: &MemoryDb) {
    let trainers = [
        ("Alexandra Kim", "alexandra.k@ironpulse.com", "Yoga, Pilates", Gender::Female),
        ("Marcus Williams", "marcus.w@ironpulse.com", "Strength Training, HIIT", Gender::Male),
        ("Sophia Lee", "sophia.l@ironpulse.com", "Cardio, Spin", Gender::Female),
        ("Emma Rodriguez", "emma.r@ironpulse.com", "Dance, Zumba", Gender::Female),
        ("Jordan Mitchell", "jordan.m@ironpulse.com", "Boxing, Conditioning", Gender::Male),
    ];
    for (i, (name, email, specialties, gender)) in trainers.into_iter().enumerate() {
        db.trainers().insert_with(|id| Trainer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: format!("0100000010{i}"),
            specialties: crate::models::trainer::split_specialties(specialties),
            hire_date: NaiveDate::from_ymd_opt(2023, 1 + i as u32, 15),
            sessions: 0,
            status: TrainerStatus::Active,
            gender,
            date_of_birth: NaiveDate::from_ymd_opt(1988 + i as i32, 6, 1),
            avatar: None,
        });
    }
}

fn seed_sessions(db: &MemoryDb) -> anyhow::Result<()> {
    let sessions = [
        ("Morning Yoga Flow", "Alexandra Kim", "Yoga", "06:00", "07:00", "Studio A", 20, 18, SessionStatus::Upcoming),
        ("HIIT Blast", "Marcus Williams", "HIIT", "08:00", "09:00", "Main Floor", 15, 15, SessionStatus::Full),
        ("Strength & Conditioning", "Marcus Williams", "Strength", "10:00", "11:30", "Weight Room", 12, 8, SessionStatus::Available),
        ("Spin Class", "Sophia Lee", "Cardio", "12:00", "13:00", "Spin Room", 25, 20, SessionStatus::Upcoming),
        ("Zumba Party", "Emma Rodriguez", "Dance", "17:00", "18:00", "Studio B", 30, 24, SessionStatus::Upcoming),
        ("Boxing Fundamentals", "Jordan Mitchell", "Boxing", "19:00", "20:30", "Combat Zone", 10, 6, SessionStatus::Available),
    ];
    for (description, trainer, category, start, end, location, capacity, booked, status) in
        sessions
    {
        let time = TimeWindow::from_24h(start, end).map_err(anyhow::Error::msg)?;
        db.sessions().insert_with(|id| ClassSession {
            id,
            description: description.to_string(),
            trainer_name: trainer.to_string(),
            trainer_avatar: None,
            category_name: category.to_string(),
            time,
            date: "Today".to_string(),
            location: Some(location.to_string()),
            capacity,
            booked,
            status,
        });
    }
    Ok(())
}

fn seed_members(db: &MemoryDb) {
    let members = [
        ("Sarah Johnson", "sarah.j@email.com", "Premium", MemberStatus::Active, Gender::Female),
        ("Michael Chen", "michael.c@email.com", "Gold", MemberStatus::Active, Gender::Male),
        ("Emily Rodriguez", "emily.r@email.com", "Premium", MemberStatus::Expired, Gender::Female),
        ("David Kim", "david.k@email.com", "Basic", MemberStatus::Active, Gender::Male),
        ("Jessica Brown", "jessica.b@email.com", "Gold", MemberStatus::Pending, Gender::Female),
        ("Ryan Taylor", "ryan.t@email.com", "Basic", MemberStatus::Active, Gender::Male),
    ];
    for (i, (name, email, plan, status, gender)) in members.into_iter().enumerate() {
        db.members().insert_with(|id| Member {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: format!("+1 234 567 89{i}"),
            plan: plan.to_string(),
            status,
            join_date: NaiveDate::from_ymd_opt(2024, 1 + i as u32, 10),
            photo: None,
            gender: Some(gender),
            date_of_birth: None,
            height: None,
            weight: None,
            blood_type: None,
            note: None,
            address: Some(Address {
                city: Some("Cairo".to_string()),
                ..Default::default()
            }),
        });
    }
}

fn seed_bookings(db: &MemoryDb) {
    let members = db.members().list();
    let sessions = db.sessions().list();
    let attendance = [
        Attendance::Attended,
        Attendance::Attended,
        Attendance::Missed,
        Attendance::Pending,
        Attendance::Pending,
    ];
    for ((member, session), attendance) in members.iter().zip(sessions.iter()).zip(attendance) {
        db.bookings().insert_with(|id| Booking {
            id,
            member: BookingMember {
                id: Some(member.id),
                name: member.name.clone(),
                avatar: member.photo.clone(),
            },
            session: session.description.clone(),
            trainer: session.trainer_name.clone(),
            date: "2024-03-14".to_string(),
            time: crate::time_utils::format_clock_12h(session.time.start),
            location: session.location.clone().unwrap_or_default(),
            attendance,
        });
    }
}
