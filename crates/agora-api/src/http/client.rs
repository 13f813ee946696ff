//! Shared HTTP client for the gateway implementations
//!
//! Wraps `reqwest::Client` with base-url joining, bearer auth sourced from
//! the session store, and uniform error mapping. No request timeouts are
//! configured; a hung request resolves whenever the transport gives up.

use std::sync::Arc;

use agora_common::SessionStore;
use agora_core::{DomainError, GatewayResult};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Shared HTTP client state
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl HttpClient {
    /// Create a client rooted at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            session,
        }
    }

    /// The session store backing this client's auth
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The stored auth token, or [`DomainError::MissingAuthToken`]
    pub(crate) fn require_token(&self) -> GatewayResult<String> {
        self.session
            .auth_token()
            .ok_or(DomainError::MissingAuthToken)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.auth_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let builder = self.authorize(self.client.get(self.url(path)));
        Self::read_json(Self::send(builder).await?).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let builder = self.authorize(self.client.post(self.url(path)).json(body));
        Self::read_json(Self::send(builder).await?).await
    }

    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<()> {
        let builder = self.authorize(self.client.post(self.url(path)).json(body));
        Self::send(builder).await.map(drop)
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let builder = self.authorize(self.client.put(self.url(path)).json(body));
        Self::read_json(Self::send(builder).await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> GatewayResult<()> {
        let builder = self.authorize(self.client.delete(self.url(path)));
        Self::send(builder).await.map(drop)
    }

    async fn send(builder: RequestBuilder) -> GatewayResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|err| DomainError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(DomainError::Remote {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|err| DomainError::MalformedResponse(err.to_string()))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Map a 404 from the remote onto a specific not-found error
pub(crate) fn map_not_found(err: DomainError, not_found: DomainError) -> DomainError {
    match err {
        DomainError::Remote { status: 404, .. } => not_found,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let session = Arc::new(SessionStore::in_memory());
        let client = HttpClient::new("http://localhost:8080/api/", session);
        assert_eq!(client.url("/logs"), "http://localhost:8080/api/logs");
    }

    #[test]
    fn test_require_token_without_session_token() {
        let session = Arc::new(SessionStore::in_memory());
        let client = HttpClient::new("http://localhost:8080", session);
        assert!(matches!(
            client.require_token(),
            Err(DomainError::MissingAuthToken)
        ));
    }
}
