// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Admin dashboard and reports.

use futures_util::future;

use crate::client::{ApiClient, ClientResult};
use crate::models::{
    Attendance, Booking, ClassSession, Member, MemberStatus, Period, Plan, Trainer, TrainerStatus,
};

/// Stat cards on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_members: usize,
    pub active_trainers: usize,
    pub sessions: usize,
    pub active_memberships: usize,
    /// Share of members with an active membership, 0..=100
    pub active_membership_pct: f64,
    /// Monthly revenue from active members on active plans
    pub monthly_revenue: f64,
    pub check_ins: usize,
}

/// One slice of the plan distribution report.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanShare {
    pub plan: String,
    pub members: usize,
    pub pct: f64,
}

impl DashboardStats {
    pub fn compute(
        members: &[Member],
        trainers: &[Trainer],
        sessions: &[ClassSession],
        plans: &[Plan],
        bookings: &[Booking],
    ) -> Self {
        let active: Vec<&Member> = members
            .iter()
            .filter(|m| m.status == MemberStatus::Active)
            .collect();

        let monthly_revenue: f64 = active
            .iter()
            .filter_map(|m| {
                plans
                    .iter()
                    .find(|p| p.is_active && p.name.eq_ignore_ascii_case(&m.plan))
            })
            .map(monthly_price)
            .sum();

        Self {
            total_members: members.len(),
            active_trainers: trainers
                .iter()
                .filter(|t| t.status == TrainerStatus::Active)
                .count(),
            sessions: sessions.len(),
            active_memberships: active.len(),
            active_membership_pct: percent(active.len(), members.len()),
            monthly_revenue,
            check_ins: bookings
                .iter()
                .filter(|b| b.attendance == Attendance::Attended)
                .count(),
        }
    }
}

fn monthly_price(plan: &Plan) -> f64 {
    match plan.period {
        Period::Month => plan.price,
        Period::Year => plan.price / 12.0,
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64 * 1000.0).round() / 10.0
    }
}

/// Members per plan, in plan order.
pub fn plan_distribution(members: &[Member], plans: &[Plan]) -> Vec<PlanShare> {
    plans
        .iter()
        .map(|plan| {
            let count = members
                .iter()
                .filter(|m| m.plan.eq_ignore_ascii_case(&plan.name))
                .count();
            PlanShare {
                plan: plan.name.clone(),
                members: count,
                pct: percent(count, members.len()),
            }
        })
        .collect()
}

pub struct DashboardPage {
    api: ApiClient,
    stats: Option<DashboardStats>,
    distribution: Vec<PlanShare>,
}

impl DashboardPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            stats: None,
            distribution: Vec::new(),
        }
    }

    /// Fetch every collection concurrently; any failure fails the load.
    pub async fn load(&mut self) -> ClientResult<&DashboardStats> {
        let (members, trainers, sessions, plans, bookings) = future::try_join5(
            self.api.list::<Member>(),
            self.api.list::<Trainer>(),
            self.api.list::<ClassSession>(),
            self.api.list::<Plan>(),
            self.api.list::<Booking>(),
        )
        .await?;

        self.distribution = plan_distribution(&members, &plans);
        let stats = self.stats.insert(DashboardStats::compute(
            &members, &trainers, &sessions, &plans, &bookings,
        ));
        Ok(&*stats)
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn distribution(&self) -> &[PlanShare] {
        &self.distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::default_features;

    fn plan(name: &str, price: f64, period: Period, is_active: bool) -> Plan {
        Plan {
            id: 0,
            name: name.to_string(),
            description: None,
            price,
            duration: 1,
            period,
            features: default_features(),
            popular: false,
            is_active,
            active_members: 0,
            created_at: None,
            updated_at: None,
        }
    }

    fn member(plan: &str, status: MemberStatus) -> Member {
        Member {
            id: 0,
            name: "M".to_string(),
            email: "m@example.com".to_string(),
            phone: "1".to_string(),
            plan: plan.to_string(),
            status,
            join_date: None,
            photo: None,
            gender: None,
            date_of_birth: None,
            height: None,
            weight: None,
            blood_type: None,
            note: None,
            address: None,
        }
    }

    #[test]
    fn test_revenue_counts_active_members_on_active_plans() {
        let plans = vec![
            plan("Basic", 29.0, Period::Month, true),
            plan("Premium", 840.0, Period::Year, true),
            plan("Legacy", 10.0, Period::Month, false),
        ];
        let members = vec![
            member("Basic", MemberStatus::Active),
            member("premium", MemberStatus::Active),
            member("Legacy", MemberStatus::Active),
            member("Basic", MemberStatus::Expired),
        ];

        let stats = DashboardStats::compute(&members, &[], &[], &plans, &[]);
        assert_eq!(stats.total_members, 4);
        assert_eq!(stats.active_memberships, 3);
        assert_eq!(stats.active_membership_pct, 75.0);
        assert_eq!(stats.monthly_revenue, 29.0 + 70.0);
    }

    #[test]
    fn test_distribution() {
        let plans = vec![
            plan("Basic", 29.0, Period::Month, true),
            plan("Gold", 49.0, Period::Month, true),
        ];
        let members = vec![
            member("Basic", MemberStatus::Active),
            member("Basic", MemberStatus::Pending),
            member("Gold", MemberStatus::Active),
        ];
        let shares = plan_distribution(&members, &plans);
        assert_eq!(shares[0].members, 2);
        assert_eq!(shares[0].pct, 66.7);
        assert_eq!(shares[1].pct, 33.3);
    }

    #[test]
    fn test_empty_is_zero() {
        let stats = DashboardStats::compute(&[], &[], &[], &[], &[]);
        assert_eq!(stats, DashboardStats::default());
    }
}
