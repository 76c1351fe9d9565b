// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! IronPulse: gym management for members, trainers, plans and classes.
//!
//! This crate provides the client SDK used by the IronPulse front end
//! (HTTP client, session store, route guard, forms and page state) and the
//! reference REST API it talks to.

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod guard;
pub mod middleware;
pub mod models;
pub mod notify;
pub mod pages;
pub mod routes;
pub mod services;
pub mod session;
pub mod storage;
pub mod time_utils;

use config::Config;
use db::MemoryDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemoryDb,
}

impl AppState {
    /// State over a fresh database, seeded according to `config`.
    pub fn seeded(config: Config) -> anyhow::Result<Self> {
        let db = MemoryDb::new();
        db::seed::seed(&db, config.seed_demo_data)?;
        Ok(Self { config, db })
    }
}
