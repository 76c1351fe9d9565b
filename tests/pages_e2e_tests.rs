// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Admin page flows end to end: a signed-in session drives page models
//! against a live local server.

use ironpulse::client::ApiClient;
use ironpulse::db::seed::{ADMIN_EMAIL, ADMIN_PASSWORD, DEMO_MEMBER_EMAIL, DEMO_MEMBER_PASSWORD};
use ironpulse::forms::{LoginForm, MemberForm};
use ironpulse::guard::{post_login_redirect, ADMIN_HOME_PATH};
use ironpulse::models::{Gender, MemberStatus, Registration, UserRole};
use ironpulse::notify::Notifier;
use ironpulse::pages::{
    BookingTab, BookingsPage, DashboardPage, LoginPage, MembersPage, Outcome, PlansPage,
    StatusBadge,
};
use ironpulse::session::SessionStore;
use ironpulse::storage::MemoryStore;
use std::sync::Arc;

mod common;

use common::spawn_server;

async fn signed_in(base_url: &str, email: &str, password: &str) -> Arc<SessionStore> {
    let session = SessionStore::new(
        ApiClient::new(base_url).unwrap(),
        Arc::new(MemoryStore::new()),
    );
    session.restore();
    assert!(session.login(email, password).await.is_success());
    Arc::new(session)
}

#[tokio::test]
async fn test_login_page_routes_admin_home() {
    let (base_url, _) = spawn_server().await;
    let session = Arc::new(SessionStore::new(
        ApiClient::new(&base_url).unwrap(),
        Arc::new(MemoryStore::new()),
    ));
    session.restore();
    let notifier = Notifier::new();

    let mut page = LoginPage::new(session.clone(), notifier.clone());
    page.form = LoginForm::new(ADMIN_EMAIL, ADMIN_PASSWORD);

    assert_eq!(page.submit().await.as_deref(), Some(ADMIN_HOME_PATH));
    assert_eq!(notifier.last().unwrap().title, "Welcome back!");
    assert!(session.is_admin());
}

#[tokio::test]
async fn test_login_page_honors_return_path() {
    let (base_url, _) = spawn_server().await;
    let session = Arc::new(SessionStore::new(
        ApiClient::new(&base_url).unwrap(),
        Arc::new(MemoryStore::new()),
    ));
    session.restore();

    let mut page = LoginPage::new(session, Notifier::new());
    page.form = LoginForm::new(DEMO_MEMBER_EMAIL, DEMO_MEMBER_PASSWORD);
    page.redirect = Some("%2Fsubscribe%2F2".to_string());

    assert_eq!(page.submit().await.as_deref(), Some("/subscribe/2"));
    assert_eq!(post_login_redirect(UserRole::Member, None), "/");
}

#[tokio::test]
async fn test_plan_status_toggle_round_trip() {
    let (base_url, state) = spawn_server().await;
    let session = signed_in(&base_url, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let notifier = Notifier::new();

    let mut page = PlansPage::new(session.api().clone(), notifier.clone());
    page.load().await;
    assert_eq!(page.plans().len(), 3);
    assert_eq!(page.badge(1), Some(StatusBadge::Active));

    let plan = page.toggle_status(1).await.done().unwrap();
    assert!(!plan.is_active);
    assert_eq!(page.badge(1), Some(StatusBadge::Inactive));
    assert!(!state.db.plans().get(1).unwrap().is_active);

    let toast = notifier.last().unwrap();
    assert_eq!(toast.title, "Status Updated");
    assert_eq!(toast.description, "Basic is now Inactive");

    page.toggle_status(1).await.done().unwrap();
    assert_eq!(page.badge(1), Some(StatusBadge::Active));
    assert_eq!(notifier.last().unwrap().description, "Basic is now Active");
    assert!(state.db.plans().get(1).unwrap().is_active);
}

#[tokio::test]
async fn test_plan_toggle_forbidden_for_member() {
    let (base_url, state) = spawn_server().await;
    let session = signed_in(&base_url, DEMO_MEMBER_EMAIL, DEMO_MEMBER_PASSWORD).await;
    let notifier = Notifier::new();

    // Plans are public, so the member can load them.
    let mut page = PlansPage::new(session.api().clone(), notifier.clone());
    page.load().await;
    assert_eq!(page.plans().len(), 3);

    assert!(matches!(page.toggle_status(2).await, Outcome::Failed(_)));
    assert_eq!(page.badge(2), Some(StatusBadge::Active));
    assert!(notifier.last().unwrap().is_error());
    assert!(state.db.plans().get(2).unwrap().is_active);
}

#[tokio::test]
async fn test_create_then_delete_member() {
    let (base_url, state) = spawn_server().await;
    let session = signed_in(&base_url, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let notifier = Notifier::new();

    let mut page = MembersPage::new(session.api().clone(), notifier.clone());
    page.load().await;
    let before = page.members().len();
    assert_eq!(before, state.db.members().len());

    let mut form = MemberForm::default();
    form.first_name = "Karim".to_string();
    form.last_name = "Fouad".to_string();
    form.email = "karim.f@email.com".to_string();
    form.phone = "01055511122".to_string();
    form.plan = "gold".to_string();
    form.status = MemberStatus::Active;
    let member = page.save(None, &form).await.done().unwrap();
    assert_eq!(member.name, "Karim Fouad");
    assert_eq!(member.plan, "Gold");

    // Exactly one new row, locally and on the server, and one toast.
    assert_eq!(page.members().len(), before + 1);
    assert_eq!(state.db.members().len(), before + 1);
    assert_eq!(notifier.len(), 1);
    assert_eq!(
        notifier.last().unwrap().description,
        "Karim Fouad has been added successfully."
    );

    assert!(page.delete(member.id).await.is_done());
    assert_eq!(page.members().len(), before);
    assert!(page.members().iter().all(|m| m.id != member.id));
    assert!(state.db.members().get(member.id).is_none());
    assert_eq!(notifier.last().unwrap().title, "Member Deleted");
}

#[tokio::test]
async fn test_roster_email_edit_moves_member_login() {
    let (base_url, _) = spawn_server().await;
    let api = ApiClient::new(&base_url).unwrap();
    let registration = Registration {
        name: "Nour Hassan".to_string(),
        email: "nour.h@email.com".to_string(),
        password: "N0urPass!".to_string(),
        password_confirmation: "N0urPass!".to_string(),
        phone: "01022233344".to_string(),
        gender: Gender::Female,
        date_of_birth: chrono::NaiveDate::from_ymd_opt(1999, 5, 14).unwrap(),
        role: UserRole::Member,
    };
    api.register(&registration).await.unwrap();

    let session = signed_in(&base_url, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let mut page = MembersPage::new(session.api().clone(), Notifier::new());
    page.load().await;
    let member = page
        .members()
        .iter()
        .find(|m| m.email == "nour.h@email.com")
        .cloned()
        .unwrap();

    let mut form = MemberForm::edit(&member);
    form.email = "nour.hassan@email.com".to_string();
    form.plan = "gold".to_string();
    assert!(page.save(Some(member.id), &form).await.is_done());

    assert!(api.login("nour.hassan@email.com", "N0urPass!").await.is_ok());
    assert!(api.login("nour.h@email.com", "N0urPass!").await.is_err());
}

#[tokio::test]
async fn test_member_server_rejection_is_toasted() {
    let (base_url, _) = spawn_server().await;
    let session = signed_in(&base_url, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let notifier = Notifier::new();

    let mut page = MembersPage::new(session.api().clone(), notifier.clone());
    page.load().await;
    let before = page.members().len();

    // Email already on the roster.
    let mut form = MemberForm::default();
    form.first_name = "Sarah".to_string();
    form.last_name = "Copy".to_string();
    form.email = "sarah.j@email.com".to_string();
    form.phone = "01000000000".to_string();
    assert!(matches!(page.save(None, &form).await, Outcome::Failed(_)));
    assert_eq!(page.members().len(), before);
    assert!(notifier.last().unwrap().is_error());
}

#[tokio::test]
async fn test_dashboard_loads_all_collections() {
    let (base_url, state) = spawn_server().await;
    let session = signed_in(&base_url, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let mut page = DashboardPage::new(session.api().clone());
    let stats = page.load().await.unwrap().clone();

    assert_eq!(stats.total_members, state.db.members().len());
    assert_eq!(stats.active_trainers, 5);
    assert_eq!(stats.sessions, 6);
    assert!(stats.monthly_revenue > 0.0);
    assert!(stats.active_membership_pct > 0.0 && stats.active_membership_pct <= 100.0);
    assert_eq!(page.stats(), Some(&stats));
    assert!(!page.distribution().is_empty());
}

#[tokio::test]
async fn test_dashboard_fails_for_member() {
    let (base_url, _) = spawn_server().await;
    let session = signed_in(&base_url, DEMO_MEMBER_EMAIL, DEMO_MEMBER_PASSWORD).await;

    let mut page = DashboardPage::new(session.api().clone());
    let err = page.load().await.unwrap_err();
    assert!(err.is_forbidden());
    assert!(page.stats().is_none());
}

#[tokio::test]
async fn test_bookings_tabs_and_counts() {
    let (base_url, _) = spawn_server().await;
    let session = signed_in(&base_url, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let mut page = BookingsPage::new(session.api().clone());
    page.load().await;

    let counts = page.counts();
    assert_eq!(counts.total, page.bookings().len());
    assert_eq!(counts.attended, 2);
    assert_eq!(counts.missed, 1);
    assert_eq!(counts.pending, 2);

    page.tab = BookingTab::Pending;
    assert_eq!(page.visible().len(), 2);
    page.tab = BookingTab::All;
    assert_eq!(page.visible().len(), counts.total);
}
