// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Database layer (in-memory).

pub mod memory;
pub mod seed;

pub use memory::{Collection, MemoryDb, UserRecord};
