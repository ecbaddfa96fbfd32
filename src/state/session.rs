//! Session store: the single owner of the current-user record.
//!
//! ARCHITECTURE
//! ============
//! The store is an explicitly owned handle injected into whatever needs
//! it, constructed at session start and dropped at session end. Every
//! change funnels through [`SessionStore::commit`], so there is exactly
//! one auditable point where state can change shape, and interleaved
//! callers resolve by commit order (last write wins).
//!
//! ERROR HANDLING
//! ==============
//! `refresh` never surfaces an error. A failed or empty lookup commits
//! the canonical logged-out fallback instead, so readers only ever see a
//! valid user or the sentinel record. The one trace of a transport
//! failure is a diagnostic `warn!`, which is best-effort and not part of
//! the functional contract.

use crate::net::types::{IdentityLookup, LookupOutcome};
use crate::state::login_user::{LoginUser, LoginUserPatch};

/// Owner of the current-user record for one client session.
#[derive(Clone, Debug)]
pub struct SessionStore {
    current: LoginUser,
}

impl SessionStore {
    /// Create a store holding the sentinel "not logged in" record.
    #[must_use]
    pub fn new() -> Self {
        Self { current: LoginUser::default() }
    }

    /// Read the current user. Mutation goes through [`Self::commit`].
    #[must_use]
    pub fn current(&self) -> &LoginUser {
        &self.current
    }

    /// Sole mutation primitive: overlay `patch` onto the stored record.
    pub fn commit(&mut self, patch: LoginUserPatch) {
        self.current.merge(patch);
    }

    /// Refresh the current user from the remote identity service.
    ///
    /// One lookup, then exactly one commit: the returned user on success,
    /// or the logged-out fallback when the lookup carried no usable
    /// identity or failed outright. Only the failure arm logs.
    pub async fn refresh<L: IdentityLookup + ?Sized>(&mut self, lookup: &L) {
        match lookup.current_user().await {
            LookupOutcome::User(patch) => self.commit(patch),
            LookupOutcome::EmptyOrInvalid => self.commit(LoginUserPatch::logged_out()),
            LookupOutcome::TransportError(error) => {
                tracing::warn!(%error, "login user lookup failed");
                self.commit(LoginUserPatch::logged_out());
            }
        }
    }

    /// Apply a user record the caller already obtained (e.g. from a login
    /// response). Trusts the caller completely: a plain merge-and-commit
    /// with no validation and no failure path.
    pub fn apply_user_info(&mut self, info: LoginUserPatch) {
        self.commit(info);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
