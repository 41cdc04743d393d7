//! HTTP transport for the UF series backend.
//!
//! One GET per call, no retry, no caching, no request deduplication. The
//! response body is decoded into [`RawPayload`] right here, so everything
//! past this boundary works with typed shapes.

mod error;

pub use error::ClientError;

use crate::query::QueryTarget;
use crate::series::RawPayload;
use serde::Deserialize;
use std::time::Duration;

/// Structured error body the backend sends on non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the series API.
pub struct UfClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl UfClient {
    /// Build a client for the given base URL (including the `/api/uf`
    /// prefix) with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform exactly one request for the target and decode the payload.
    pub async fn fetch(&self, target: &QueryTarget) -> Result<RawPayload, ClientError> {
        let url = format!("{}{}", self.base_url, target.resource_path());
        tracing::debug!(url = %url, "Requesting UF series");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout.as_millis() as u64)
            } else {
                ClientError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = upstream_message(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), message = %message, "Backend rejected the query");
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("Failed to parse series payload: {e}")))
    }
}

/// Failure message for a non-success response: the body's `error` field if
/// it parses as the structured shape, otherwise a generic status string.
fn upstream_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => format!("HTTP error! status: {status}"),
    }
}
