// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Client-side session store.
//!
//! Owns the signed-in user, their token and their subscription. State is
//! mirrored to durable storage so it survives restarts, and the token is
//! pushed into the shared [`ApiClient`] so every request carries it.
//!
//! The role flags here only drive navigation. The API enforces access.

use chrono::Utc;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::client::ApiClient;
use crate::config::Config;
use crate::forms::{FieldErrors, RegisterForm};
use crate::models::{Subscription, User, UserRole};
use crate::storage::{get_json, keys, set_json, FileStore, KeyValueStore, StorageError};

/// Whether persisted state has been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Loading,
    Ready,
}

/// Point-in-time view of the session, for guards and pages.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub lifecycle: Lifecycle,
    pub user: Option<User>,
    pub is_subscribed: bool,
}

impl SessionSnapshot {
    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Result of [`SessionStore::login`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success { user: User },
    Failure { error: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success { .. })
    }
}

/// Result of [`SessionStore::register`].
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// Account created and signed in.
    Registered { user: User },
    /// Local or server-side field errors; nothing changed.
    Invalid(FieldErrors),
    Failed { error: String },
}

#[derive(Debug)]
struct SessionState {
    lifecycle: Lifecycle,
    user: Option<User>,
    token: Option<String>,
    subscription: Option<Subscription>,
}

/// Injectable session store over any [`KeyValueStore`].
pub struct SessionStore {
    api: ApiClient,
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(api: ApiClient, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            api,
            storage,
            state: RwLock::new(SessionState {
                lifecycle: Lifecycle::Loading,
                user: None,
                token: None,
                subscription: None,
            }),
        }
    }

    /// Client against `config.api_base_url`, persisted at `config.storage_path`.
    /// Already restored.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let api = ApiClient::new(&config.api_base_url)?;
        let storage = FileStore::open(&config.storage_path)?;
        let store = Self::new(api, Arc::new(storage));
        store.restore();
        Ok(store)
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Load persisted state. Only the first call does anything; the
    /// lifecycle always ends `Ready`.
    pub fn restore(&self) {
        let mut state = self.write();
        if state.lifecycle == Lifecycle::Ready {
            return;
        }

        let token = self.storage.get(keys::TOKEN).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read stored token");
            None
        });
        let user = get_json::<User>(self.storage.as_ref(), keys::USER).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable stored user");
            None
        });

        if let (Some(token), Some(user)) = (token, user) {
            self.api.set_bearer_token(Some(token.clone()));
            tracing::debug!(user_id = user.id, "Restored session");
            state.token = Some(token);
            state.user = Some(user);

            state.subscription =
                get_json::<Subscription>(self.storage.as_ref(), keys::SUBSCRIPTION)
                    .unwrap_or_else(|e| {
                        tracing::warn!(error = %e, "Discarding unreadable stored subscription");
                        None
                    });
        }

        state.lifecycle = Lifecycle::Ready;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.read().lifecycle
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.read();
        SessionSnapshot {
            lifecycle: state.lifecycle,
            user: state.user.clone(),
            is_subscribed: state
                .subscription
                .as_ref()
                .is_some_and(|s| s.is_active_at(Utc::now())),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.read().user.as_ref().is_some_and(User::is_admin)
    }

    /// The signed-in user, only when they are an admin.
    pub fn admin_profile(&self) -> Option<User> {
        self.read().user.clone().filter(User::is_admin)
    }

    // ─── Login / Logout ──────────────────────────────────────────

    /// Sign in. On failure nothing is stored and the state is unchanged.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let session = match self.api.login(email, password).await {
            Ok(session) => session,
            Err(e) => {
                return LoginOutcome::Failure {
                    error: e.user_message("Login failed"),
                }
            }
        };

        if let Err(e) = self.persist_login(&session.token, &session.user) {
            tracing::warn!(error = %e, "Failed to persist session");
        }

        self.api.set_bearer_token(Some(session.token.clone()));
        {
            let mut state = self.write();
            state.token = Some(session.token);
            state.user = Some(session.user.clone());
            state.lifecycle = Lifecycle::Ready;
        }

        tracing::info!(user_id = session.user.id, role = session.user.role.as_str(), "Logged in");
        LoginOutcome::Success { user: session.user }
    }

    fn persist_login(&self, token: &str, user: &User) -> Result<(), StorageError> {
        self.storage.set(keys::TOKEN, token)?;
        set_json(self.storage.as_ref(), keys::USER, user)
    }

    /// Sign out locally. No server call.
    pub fn logout(&self) {
        {
            let mut state = self.write();
            state.user = None;
            state.token = None;
            state.subscription = None;
        }
        self.api.set_bearer_token(None);

        for key in [keys::TOKEN, keys::USER, keys::SUBSCRIPTION] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "Failed to clear stored session");
            }
        }
        tracing::info!("Logged out");
    }

    // ─── Registration ────────────────────────────────────────────

    /// Validate, create the account, then sign in with the same credentials.
    /// Invalid forms never reach the network.
    pub async fn register(&self, form: &RegisterForm) -> RegisterOutcome {
        let registration = match form.validate() {
            Ok(registration) => registration,
            Err(errors) => return RegisterOutcome::Invalid(errors),
        };

        if let Err(e) = self.api.register(&registration).await {
            if e.is_validation() {
                if let Some(fields) = e.field_errors() {
                    return RegisterOutcome::Invalid(FieldErrors::from_server(fields));
                }
            }
            return RegisterOutcome::Failed {
                error: e.user_message("Something went wrong."),
            };
        }

        match self.login(&registration.email, &registration.password).await {
            LoginOutcome::Success { user } => RegisterOutcome::Registered { user },
            LoginOutcome::Failure { error } => RegisterOutcome::Failed { error },
        }
    }

    // ─── Subscription ────────────────────────────────────────────

    /// Record the user's single active subscription.
    pub fn subscribe(&self, subscription: Subscription) -> Result<(), StorageError> {
        set_json(self.storage.as_ref(), keys::SUBSCRIPTION, &subscription)?;
        tracing::info!(plan_id = subscription.plan_id, plan = %subscription.plan_name, "Subscribed");
        self.write().subscription = Some(subscription);
        Ok(())
    }

    pub fn subscription(&self) -> Option<Subscription> {
        self.read().subscription.clone()
    }

    pub fn is_subscribed(&self) -> bool {
        self.read()
            .subscription
            .as_ref()
            .is_some_and(|s| s.is_active_at(Utc::now()))
    }

    // ─── Profile ─────────────────────────────────────────────────

    /// Update the cached user's name and avatar. `None` if signed out.
    pub fn update_profile(
        &self,
        name: &str,
        avatar: Option<String>,
    ) -> Result<Option<User>, StorageError> {
        let updated = {
            let mut state = self.write();
            let Some(user) = state.user.as_mut() else {
                return Ok(None);
            };
            user.name = name.trim().to_string();
            user.avatar = avatar;
            user.clone()
        };
        set_json(self.storage.as_ref(), keys::USER, &updated)?;
        Ok(Some(updated))
    }
}
