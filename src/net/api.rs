//! HTTP client for the identity service.
//!
//! Thin wrapper over `GET /api/user/get/login`. Pure parsing in
//! `parse_lookup_response` for testability.

use std::time::Duration;

use super::types::{IdentityError, IdentityLookup, LookupEnvelope, LookupOutcome};

const LOGIN_USER_PATH: &str = "/api/user/get/login";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// CLIENT
// =============================================================================

/// Identity lookup over HTTP.
pub struct HttpIdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIdentityClient {
    /// Build a client against `base_url` (scheme + host, with or without
    /// a trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::HttpClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(base_url: String) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        Ok(Self { http, base_url })
    }
}

#[async_trait::async_trait]
impl IdentityLookup for HttpIdentityClient {
    async fn current_user(&self) -> LookupOutcome {
        let url = format!("{}{LOGIN_USER_PATH}", self.base_url);

        let response = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(e) => return LookupOutcome::TransportError(e.to_string()),
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(t) => t,
            Err(e) => return LookupOutcome::TransportError(e.to_string()),
        };

        if status != 200 {
            return LookupOutcome::TransportError(format!("identity service returned status {status}"));
        }

        parse_lookup_response(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Classify one identity-service response body.
///
/// A non-zero `code` and an absent `data` payload are both
/// [`LookupOutcome::EmptyOrInvalid`]; only a body that fails to
/// deserialize counts as a transport failure.
#[must_use]
pub fn parse_lookup_response(json: &str) -> LookupOutcome {
    let envelope: LookupEnvelope = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => return LookupOutcome::TransportError(format!("response parse failed: {e}")),
    };

    if envelope.code != 0 {
        return LookupOutcome::EmptyOrInvalid;
    }

    match envelope.data {
        Some(patch) => LookupOutcome::User(patch),
        None => LookupOutcome::EmptyOrInvalid,
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
