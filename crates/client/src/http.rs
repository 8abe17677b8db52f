//! Authenticated request wrapper
//!
//! Builds JSON requests against the backend, attaching the bearer token
//! when one is held. Response decoding is declared per endpoint: JSON
//! endpoints deserialize typed payloads, export endpoints return raw bytes.
//! There is no retry, no backoff and no client-side timeout policy; every
//! failure is surfaced immediately.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::{FileSessionStore, SessionStore};
use crate::token::TokenStore;

/// The one path whose 401 must surface as a credentials error instead of a
/// forced logout.
pub(crate) const LOGIN_PATH: &str = "/admin/login";

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    token: TokenStore,
    store: Arc<dyn SessionStore>,
}

/// Authenticated backend client. Cheap to clone; clones share the token
/// store and session store.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<ClientInner>,
}

impl AdminClient {
    /// Client persisting its session to the configured file.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let store = Arc::new(FileSessionStore::new(config.session_file.clone()));
        Self::with_store(config, store)
    }

    /// Client with an injected session store (tests use the in-memory one).
    pub fn with_store(config: &ClientConfig, store: Arc<dyn SessionStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.api_url.trim_end_matches('/').to_string(),
                token: TokenStore::new(),
                store,
            }),
        })
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.inner.token
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.inner.store
    }

    fn build(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.inner.base_url, path);
        let mut req = self.inner.http.request(method, url);
        if let Some(token) = self.inner.token.get() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send and apply the shared response contract:
    /// - 401/403 on any path except login clears the in-memory token and
    ///   the persisted session, then fails with [`ApiError::SessionExpired`];
    /// - other non-2xx statuses fail with the backend's `detail`/`message`
    ///   field, falling back to `Error <status>`.
    async fn execute(&self, req: RequestBuilder, path: &str) -> ApiResult<Response> {
        let res = req.send().await?;
        let status = res.status();

        if (status == 401 || status == 403) && path != LOGIN_PATH {
            tracing::warn!(path, status = status.as_u16(), "Session rejected by backend");
            self.inner.token.clear();
            if let Err(e) = self.inner.store.clear() {
                tracing::warn!(error = %e, "Failed to clear persisted session");
            }
            return Err(ApiError::SessionExpired);
        }

        if !status.is_success() {
            let message = res
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("detail")
                        .or_else(|| body.get("message"))
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("Error {}", status.as_u16()));
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let req = self.build(Method::GET, path).query(query);
        Ok(self.execute(req, path).await?.json().await?)
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let req = self.build(Method::POST, path).json(body);
        Ok(self.execute(req, path).await?.json().await?)
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let req = self.build(Method::POST, path);
        Ok(self.execute(req, path).await?.json().await?)
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let req = self.build(Method::PUT, path).json(body);
        Ok(self.execute(req, path).await?.json().await?)
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let req = self.build(Method::DELETE, path);
        Ok(self.execute(req, path).await?.json().await?)
    }

    /// Declared-binary endpoint (spreadsheet/PDF exports): resolves with the
    /// raw payload, never attempts JSON decoding.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<Bytes> {
        let req = self.build(Method::GET, path).query(query);
        Ok(self.execute(req, path).await?.bytes().await?)
    }
}
