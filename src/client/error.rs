// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Errors surfaced by the REST client.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS, ...
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("request failed"))]
    Api {
        status: u16,
        message: Option<String>,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// The body did not match the expected schema.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// `message` from the error body, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for an error toast: the server message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Per-field messages from a 422 body.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            ClientError::Api { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.status() == Some(422)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldMessage {
    One(String),
    Many(Vec<String>),
}

/// Loose error body: `{ "message": ..., "errors": { field: msg | [msg] } }`.
#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, FieldMessage>>,
}

/// Build an `Api` error from a status and raw body. Non-JSON bodies are
/// tolerated; the message is then left empty.
pub(crate) fn api_error(status: u16, body: &[u8]) -> ClientError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let errors = parsed
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|(field, msg)| {
            let messages = match msg {
                FieldMessage::One(m) => vec![m],
                FieldMessage::Many(ms) => ms,
            };
            (field, messages)
        })
        .collect();

    ClientError::Api {
        status,
        message: parsed.message,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_reads_message_and_fields() {
        let err = api_error(
            422,
            br#"{"message":"The given data was invalid","errors":{"email":["taken"],"phone":"bad"}}"#,
        );
        assert!(err.is_validation());
        assert_eq!(err.user_message("fallback"), "The given data was invalid");
        let fields = err.field_errors().unwrap();
        assert_eq!(fields["email"], vec!["taken"]);
        assert_eq!(fields["phone"], vec!["bad"]);
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = api_error(500, b"<html>oops</html>");
        assert_eq!(err.user_message("Login failed"), "Login failed");
        assert!(err.field_errors().is_none());

        let blank = api_error(400, br#"{"message":"  "}"#);
        assert_eq!(blank.user_message("Something went wrong"), "Something went wrong");
    }
}
