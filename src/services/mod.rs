// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Services module - business logic shared by the API handlers.

pub mod password;

pub use password::{hash_password, verify_password};
