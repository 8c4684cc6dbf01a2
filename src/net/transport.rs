//! HTTP transports that deliver a [`RankingMutation`] to the ranking service.
//!
//! Browser (hydrate): `gloo-net` fetch.
//! Native: `reqwest`, used by host binaries and tests.
//!
//! Both transports leave timeouts at the HTTP stack's defaults. Response
//! parsing lives in [`parse_response`] so it can be tested without a socket.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::types::{RankingMutation, RankingResponse, SubmitError};

// =============================================================================
// TRANSPORT TRAIT
// =============================================================================

/// Sends one vote to the ranking service. Enables mocking in tests.
///
/// Futures are `?Send` because browser fetch futures are bound to the UI thread.
#[async_trait::async_trait(?Send)]
pub trait RankingTransport {
    /// POST `mutation` as JSON and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the request cannot be sent, the service
    /// answers with a non-success status, or the body is not ranking JSON.
    async fn post_mutation(&self, mutation: &RankingMutation) -> Result<RankingResponse, SubmitError>;
}

// =============================================================================
// PARSING
// =============================================================================

/// Decode a ranking service reply.
///
/// # Errors
///
/// Non-2xx statuses map to [`SubmitError::Status`]; malformed JSON maps to
/// [`SubmitError::Parse`]. An empty success body decodes as an empty response.
pub fn parse_response(status: u16, body: &str) -> Result<RankingResponse, SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::Status { status, body: body.to_owned() });
    }
    if body.trim().is_empty() {
        return Ok(RankingResponse::default());
    }
    serde_json::from_str(body).map_err(|e| SubmitError::Parse(e.to_string()))
}

// =============================================================================
// NATIVE
// =============================================================================

/// `reqwest`-backed transport for native hosts.
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpTransport {
    /// Build a transport posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SubmitError::ClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl RankingTransport for HttpTransport {
    async fn post_mutation(&self, mutation: &RankingMutation) -> Result<RankingResponse, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(mutation)
            .send()
            .await
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        parse_response(status, &text)
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `gloo-net`-backed transport for the hydrated browser build.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    endpoint: String,
}

#[cfg(feature = "hydrate")]
impl BrowserTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl RankingTransport for BrowserTransport {
    async fn post_mutation(&self, mutation: &RankingMutation) -> Result<RankingResponse, SubmitError> {
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .json(mutation)
            .map_err(|e| SubmitError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Request(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| SubmitError::Request(e.to_string()))?;
        parse_response(status, &text)
    }
}
