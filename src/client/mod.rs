// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! HTTP client for the IronPulse REST API.

pub mod error;
pub mod http;

pub use error::{ClientError, ClientResult};
pub use http::{decode_payload, ApiClient};
