// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Typed REST client for the gym API.
//!
//! One configured `reqwest::Client` shared by every store and page. The
//! bearer token lives in a shared cell: when it is set, every subsequent
//! request carries `Authorization: Bearer <token>`; when cleared, none do.

use crate::client::error::{api_error, ClientError, ClientResult};
use crate::models::{
    AuthSession, Credentials, Member, MemberDraft, Plan, PlanStatusUpdate, Record, Registration,
    User,
};
use reqwest::{header, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Success bodies come either wrapped (`{ "data": ... }`) or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(value) => value,
        }
    }
}

/// Decode a success body in either shape.
pub fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> ClientResult<T> {
    serde_json::from_slice::<Payload<T>>(body)
        .map(Payload::into_inner)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// REST API client.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install or clear the default bearer token.
    pub fn set_bearer_token(&self, token: Option<String>) {
        *self.bearer.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.bearer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether requests currently carry an `Authorization` header.
    pub fn has_auth_header(&self) -> bool {
        self.bearer_token().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json");
        if let Some(token) = self.bearer_token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send, check status, return the raw body.
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Vec<u8>> {
        let req = req.build()?;
        let method = req.method().clone();
        let url = req.url().path().to_string();

        let response = self.http.execute(req).await.map_err(|e| {
            tracing::warn!(%method, path = %url, error = %e, "Request failed");
            ClientError::Network(e)
        })?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(%method, path = %url, status = status.as_u16(), "API response");

        if !status.is_success() {
            let err = api_error(status.as_u16(), &body);
            tracing::warn!(%method, path = %url, status = status.as_u16(), error = %err, "API error");
            return Err(err);
        }

        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let body = self.execute(req).await?;
        decode_payload(&body)
    }

    // ─── Generic verbs ───────────────────────────────────────────

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send_json(self.request(Method::GET, path)).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    // ─── Auth ────────────────────────────────────────────────────

    /// `POST /login`. Does not touch the bearer cell; the session store does.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthSession> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("login", &credentials).await
    }

    /// `POST /register`
    pub async fn register(&self, registration: &Registration) -> ClientResult<User> {
        self.post_json("register", registration).await
    }

    // ─── Collections ─────────────────────────────────────────────

    /// `GET /{collection}`
    pub async fn list<R: Record>(&self) -> ClientResult<Vec<R>> {
        self.get_json(R::COLLECTION).await
    }

    /// `GET /{collection}/{id}`
    pub async fn fetch<R: Record>(&self, id: u64) -> ClientResult<R> {
        self.get_json(&format!("{}/{}", R::COLLECTION, id)).await
    }

    /// `POST /{collection}` with a JSON body.
    pub async fn create<R: Record, B: Serialize + ?Sized>(&self, body: &B) -> ClientResult<R> {
        self.post_json(R::COLLECTION, body).await
    }

    /// `PUT /{collection}/{id}` with a JSON body.
    pub async fn update<R: Record, B: Serialize + ?Sized>(
        &self,
        id: u64,
        body: &B,
    ) -> ClientResult<R> {
        self.put_json(&format!("{}/{}", R::COLLECTION, id), body)
            .await
    }

    /// `DELETE /{collection}/{id}`
    pub async fn remove<R: Record>(&self, id: u64) -> ClientResult<()> {
        self.delete(&format!("{}/{}", R::COLLECTION, id)).await
    }

    // ─── Members (multipart) ─────────────────────────────────────

    fn member_form(draft: &MemberDraft) -> ClientResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (key, value) in draft.text_fields() {
            form = form.text(key, value);
        }
        if let Some(photo) = &draft.photo {
            let part = reqwest::multipart::Part::bytes(photo.bytes.clone())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.content_type)
                .map_err(|e| ClientError::InvalidRequest(format!("photo content type: {e}")))?;
            form = form.part("photo", part);
        }
        Ok(form)
    }

    /// `POST /members` (multipart)
    pub async fn create_member(&self, draft: &MemberDraft) -> ClientResult<Member> {
        let form = Self::member_form(draft)?;
        self.send_json(self.request(Method::POST, Member::COLLECTION).multipart(form))
            .await
    }

    /// `PUT /members/{id}` (multipart)
    pub async fn update_member(&self, id: u64, draft: &MemberDraft) -> ClientResult<Member> {
        let form = Self::member_form(draft)?;
        let path = format!("{}/{}", Member::COLLECTION, id);
        self.send_json(self.request(Method::PUT, &path).multipart(form))
            .await
    }

    // ─── Plans ───────────────────────────────────────────────────

    /// `PATCH /plans/{id}/status`
    pub async fn set_plan_status(&self, id: u64, is_active: bool) -> ClientResult<Plan> {
        self.patch_json(
            &format!("{}/{}/status", Plan::COLLECTION, id),
            &PlanStatusUpdate { is_active },
        )
        .await
    }

    /// `PATCH /plans/{id}` with only the fields to change.
    pub async fn patch_plan(&self, id: u64, changes: &serde_json::Value) -> ClientResult<Plan> {
        self.patch_json(&format!("{}/{}", Plan::COLLECTION, id), changes)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payload_accepts_both_shapes() {
        let wrapped: Vec<u32> = decode_payload(br#"{"data":[1,2]}"#).unwrap();
        let bare: Vec<u32> = decode_payload(b"[1,2]").unwrap();
        assert_eq!(wrapped, bare);

        let err = decode_payload::<Vec<u32>>(br#"{"items":[1]}"#).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_bearer_cell_shared_between_clones() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        let handle = client.clone();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/plans"), "http://localhost:8080/plans");

        handle.set_bearer_token(Some("abc".to_string()));
        assert!(client.has_auth_header());

        client.set_bearer_token(None);
        assert!(!handle.has_auth_header());
    }
}
