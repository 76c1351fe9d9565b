// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! In-memory database with typed collections.
//!
//! Provides operations for:
//! - Users (accounts with password hashes, unique by email)
//! - Members, trainers, plans, sessions, bookings (id-keyed records)

use crate::error::AppError;
use crate::models::{Booking, ClassSession, Member, Plan, Trainer, User, UserRole};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Id-keyed records with a monotonically increasing id sequence.
#[derive(Debug)]
pub struct Collection<T> {
    rows: DashMap<u64, T>,
    seq: AtomicU64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            seq: AtomicU64::new(0),
        }
    }
}

impl<T: Clone> Collection<T> {
    fn next_id(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Allocate an id and store the record `build` makes for it.
    pub fn insert_with(&self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id();
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.rows.get(&id).map(|r| r.value().clone())
    }

    /// All records, ordered by id.
    pub fn list(&self) -> Vec<T> {
        let mut rows: Vec<(u64, T)> = self
            .rows
            .iter()
            .map(|r| (*r.key(), r.value().clone()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, row)| row).collect()
    }

    /// Mutate a record in place. `None` if the id is unknown.
    pub fn update(&self, id: u64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut row = self.rows.get_mut(&id)?;
        apply(row.value_mut());
        Some(row.value().clone())
    }

    pub fn remove(&self, id: u64) -> Option<T> {
        self.rows.remove(&id).map(|(_, row)| row)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Account row: the public user plus its credential.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

#[derive(Default)]
struct Inner {
    users: Collection<UserRecord>,
    /// Lower-cased email -> user id
    emails: DashMap<String, u64>,
    members: Collection<Member>,
    trainers: Collection<Trainer>,
    plans: Collection<Plan>,
    sessions: Collection<ClassSession>,
    bookings: Collection<Booking>,
}

/// Shared database handle. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Inner>,
}

fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Create an account. Fails with `Conflict` if the email is taken.
    pub fn create_user(
        &self,
        name: &str,
        email: &str,
        role: UserRole,
        password_hash: String,
    ) -> Result<User, AppError> {
        match self.inner.emails.entry(email_key(email)) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "The email {} has already been taken",
                email.trim()
            ))),
            Entry::Vacant(slot) => {
                let record = self.inner.users.insert_with(|id| UserRecord {
                    user: User {
                        id,
                        name: name.trim().to_string(),
                        email: email.trim().to_string(),
                        role,
                        avatar: None,
                    },
                    password_hash,
                });
                slot.insert(record.user.id);
                tracing::debug!(user_id = record.user.id, role = role.as_str(), "Created user");
                Ok(record.user)
            }
        }
    }

    pub fn email_taken(&self, email: &str) -> bool {
        self.inner.emails.contains_key(&email_key(email))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<UserRecord> {
        let id = *self.inner.emails.get(&email_key(email))?;
        self.inner.users.get(id)
    }

    pub fn get_user(&self, id: u64) -> Option<User> {
        self.inner.users.get(id).map(|r| r.user)
    }

    /// Replace the credential of the account registered under `email`.
    pub fn set_password_hash(&self, email: &str, password_hash: String) -> bool {
        let Some(id) = self.inner.emails.get(&email_key(email)).map(|r| *r) else {
            return false;
        };
        self.inner
            .users
            .update(id, |record| record.password_hash = password_hash)
            .is_some()
    }

    /// Delete the account registered under `email`, if any.
    pub fn delete_user_by_email(&self, email: &str) -> Option<User> {
        let (_, id) = self.inner.emails.remove(&email_key(email))?;
        self.inner.users.remove(id).map(|r| r.user)
    }

    /// Delete the account under `email` only if it has `role`.
    pub fn delete_user_with_role(&self, email: &str, role: UserRole) -> Option<User> {
        let (_, id) = self
            .inner
            .emails
            .remove_if(&email_key(email), |_, id| {
                self.inner.users.get(*id).is_some_and(|r| r.user.role == role)
            })?;
        self.inner.users.remove(id).map(|r| r.user)
    }

    /// Move the account registered under `old` to `new`.
    ///
    /// Returns `Ok(false)` when no account uses `old`, and `Conflict` when
    /// `new` belongs to a different account.
    pub fn update_user_email(&self, old: &str, new: &str) -> Result<bool, AppError> {
        let Some(id) = self.inner.emails.get(&email_key(old)).map(|r| *r) else {
            return Ok(false);
        };

        let new_key = email_key(new);
        if new_key != email_key(old) {
            // The entry guard must be gone before the old key is removed:
            // both keys may live in the same shard.
            match self.inner.emails.entry(new_key) {
                Entry::Occupied(taken) if *taken.get() != id => {
                    return Err(AppError::Conflict(format!(
                        "The email {} has already been taken",
                        new.trim()
                    )));
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
            self.inner.emails.remove(&email_key(old));
        }

        self.inner
            .users
            .update(id, |record| record.user.email = new.trim().to_string());
        tracing::debug!(user_id = id, "Moved account to new email");
        Ok(true)
    }

    // ─── Resource Collections ────────────────────────────────────

    pub fn members(&self) -> &Collection<Member> {
        &self.inner.members
    }

    pub fn trainers(&self) -> &Collection<Trainer> {
        &self.inner.trainers
    }

    pub fn plans(&self) -> &Collection<Plan> {
        &self.inner.plans
    }

    pub fn sessions(&self) -> &Collection<ClassSession> {
        &self.inner.sessions
    }

    pub fn bookings(&self) -> &Collection<Booking> {
        &self.inner.bookings
    }

    // ─── Derived Counts ──────────────────────────────────────────

    /// Active members on the plan named `plan_name` (case-insensitive).
    pub fn active_members_on(&self, plan_name: &str) -> u32 {
        let count = self
            .inner
            .members
            .rows
            .iter()
            .filter(|m| {
                m.status == crate::models::MemberStatus::Active
                    && m.plan.eq_ignore_ascii_case(plan_name)
            })
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Sessions led by the trainer named `trainer_name`.
    pub fn sessions_led_by(&self, trainer_name: &str) -> u32 {
        let count = self
            .inner
            .sessions
            .rows
            .iter()
            .filter(|s| s.trainer_name.eq_ignore_ascii_case(trainer_name))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Point every member on plan `old` at `new`. Returns how many moved.
    pub fn rename_member_plans(&self, old: &str, new: &str) -> usize {
        let mut moved = 0;
        for mut member in self.inner.members.rows.iter_mut() {
            if member.plan.eq_ignore_ascii_case(old) {
                member.plan = new.to_string();
                moved += 1;
            }
        }
        moved
    }

    /// Roster row with `email` (case-insensitive).
    pub fn member_by_email(&self, email: &str) -> Option<Member> {
        self.inner
            .members
            .rows
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email.trim()))
            .map(|m| m.value().clone())
    }

    pub fn trainer_by_name(&self, name: &str) -> Option<Trainer> {
        self.inner
            .trainers
            .rows
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
            .map(|t| t.value().clone())
    }
}
