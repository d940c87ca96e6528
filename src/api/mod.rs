//! HTTP client for the campaign API
//!
//! Four GET endpoints, JSON bodies, no auth. The client performs no
//! retries and absorbs no failures; recovery is entirely the caller's
//! concern.

mod operations;

#[cfg(test)]
mod tests;

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Default base URL of the campaign API.
pub const DEFAULT_API_URL: &str = "https://mixo-fe-backend-task.vercel.app";

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status, with the most descriptive message available.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// Transport-level failure (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// The status was fine but the body could not be decoded.
    #[error("invalid response body: {0}")]
    Body(String),
}

/// Client for the campaign API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: ureq::Agent,
}

impl ApiClient {
    /// Create a client against [`DEFAULT_API_URL`].
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_url(base_url: impl Into<String>) -> Self {
        let client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .build();

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url, client }
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// On a non-success status the error message is `HTTP <status>:`
    /// followed by `fallback`; endpoints with richer error bodies handle
    /// the response themselves instead of going through here.
    fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        match self.client.get(&url).call() {
            Ok(response) => response
                .into_json::<T>()
                .map_err(|e| ApiError::Body(e.to_string())),
            Err(ureq::Error::Status(status, _)) => Err(ApiError::Status {
                status,
                message: format!("HTTP {}: {}", status, fallback),
            }),
            Err(ureq::Error::Transport(transport)) => Err(ApiError::Network(transport.to_string())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
