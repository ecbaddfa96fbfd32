//! Identity lookup seam, outcome variants, and wire envelope.

use serde::Deserialize;

use crate::state::login_user::LoginUserPatch;

// =============================================================================
// ERROR
// =============================================================================

/// Errors from constructing an identity client.
///
/// Lookup failures at runtime are not errors here; they surface as
/// [`LookupOutcome`] variants and never reach callers of the store.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The underlying HTTP client could not be built.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of one remote identity lookup.
///
/// `EmptyOrInvalid` and `TransportError` both map to the same logged-out
/// fallback commit; only `TransportError` additionally logs. Keeping them
/// distinct leaves room for a retry affordance without touching the wire
/// layer.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupOutcome {
    /// The service identified a logged-in user.
    User(LoginUserPatch),
    /// The call completed but carried no usable identity: a non-success
    /// code or a missing data payload.
    EmptyOrInvalid,
    /// The call itself failed: connection error, non-success HTTP status,
    /// or an undeserializable body.
    TransportError(String),
}

// =============================================================================
// WIRE
// =============================================================================

/// Response envelope of the identity service: `code == 0` plus a present
/// `data` payload signals success.
#[derive(Debug, Deserialize)]
pub struct LookupEnvelope {
    pub code: i64,
    #[serde(default)]
    pub data: Option<LoginUserPatch>,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// LOOKUP TRAIT
// =============================================================================

/// Async seam for the remote identity service. Enables mocking in tests.
#[async_trait::async_trait]
pub trait IdentityLookup: Send + Sync {
    /// Fetch the currently logged-in user, folding every failure mode
    /// into a [`LookupOutcome`].
    async fn current_user(&self) -> LookupOutcome;
}
