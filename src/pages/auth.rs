// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Sign-in and sign-up pages.

use std::sync::Arc;

use crate::forms::{FieldErrors, LoginForm, RegisterForm};
use crate::guard::post_login_redirect;
use crate::notify::Notifier;
use crate::session::{LoginOutcome, RegisterOutcome, SessionStore};

pub struct LoginPage {
    session: Arc<SessionStore>,
    notifier: Notifier,
    pub form: LoginForm,
    /// Raw `?redirect=` value, if the page was opened with one
    pub redirect: Option<String>,
    errors: FieldErrors,
}

impl LoginPage {
    pub fn new(session: Arc<SessionStore>, notifier: Notifier) -> Self {
        Self {
            session,
            notifier,
            form: LoginForm::default(),
            redirect: None,
            errors: FieldErrors::new(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Sign in. Returns where to navigate on success.
    pub async fn submit(&mut self) -> Option<String> {
        let credentials = match self.form.validate() {
            Ok(credentials) => credentials,
            Err(errors) => {
                self.errors = errors;
                return None;
            }
        };
        self.errors = FieldErrors::new();

        match self
            .session
            .login(&credentials.email, &credentials.password)
            .await
        {
            LoginOutcome::Success { user } => {
                self.notifier
                    .success("Welcome back!", "You have successfully logged in.");
                Some(post_login_redirect(user.role, self.redirect.as_deref()))
            }
            LoginOutcome::Failure { error } => {
                self.notifier.error("Login failed", error);
                None
            }
        }
    }
}

pub struct RegisterPage {
    session: Arc<SessionStore>,
    notifier: Notifier,
    pub form: RegisterForm,
    errors: FieldErrors,
}

impl RegisterPage {
    pub fn new(session: Arc<SessionStore>, notifier: Notifier) -> Self {
        Self {
            session,
            notifier,
            form: RegisterForm::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Create the account and sign in. Returns where to navigate.
    pub async fn submit(&mut self) -> Option<String> {
        match self.session.register(&self.form).await {
            RegisterOutcome::Registered { .. } => {
                self.errors = FieldErrors::new();
                self.notifier
                    .success("Registration successful!", "Welcome to Iron Pulse!");
                Some("/".to_string())
            }
            RegisterOutcome::Invalid(errors) => {
                self.errors = errors;
                None
            }
            RegisterOutcome::Failed { error } => {
                self.errors = FieldErrors::new();
                self.notifier.error("Registration failed", error);
                None
            }
        }
    }
}
