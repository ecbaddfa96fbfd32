//! Login-user record, partial patch, and merge semantics.
//!
//! DESIGN
//! ======
//! The record is a structured type with explicit modeled fields instead of
//! an open string-keyed map. The flattened `extra` map carries whatever
//! else the identity service sends, so unmodeled fields still round-trip
//! and survive merges.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder for identity fields while nobody is logged in.
pub const NOT_LOGGED_IN: &str = "not logged in";

// =============================================================================
// ACCESS ROLE
// =============================================================================

/// Access level attached to the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessRole {
    /// Anonymous / unauthenticated session.
    NotLogin,
    /// Ordinary signed-in user.
    User,
    /// Administrator.
    Admin,
}

// =============================================================================
// RECORD
// =============================================================================

/// The current-user record.
///
/// Exactly one lives in each [`SessionStore`]. It is never absent: before
/// any remote call completes it holds the [`NOT_LOGGED_IN`] sentinels and
/// no role.
///
/// [`SessionStore`]: crate::state::session::SessionStore
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    /// Display name.
    pub user_name: String,
    /// Account identifier.
    pub user_account: String,
    /// Access role; unset until the identity service or a fallback sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<AccessRole>,
    /// Identity fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for LoginUser {
    fn default() -> Self {
        Self {
            user_name: NOT_LOGGED_IN.to_owned(),
            user_account: NOT_LOGGED_IN.to_owned(),
            user_role: None,
            extra: Map::new(),
        }
    }
}

impl LoginUser {
    /// Overlay `patch` onto this record, field by field.
    ///
    /// Present patch fields win; absent fields are untouched. Extra keys
    /// are inserted or replaced individually, never cleared wholesale.
    pub fn merge(&mut self, patch: LoginUserPatch) {
        if let Some(name) = patch.user_name {
            self.user_name = name;
        }
        if let Some(account) = patch.user_account {
            self.user_account = account;
        }
        if let Some(role) = patch.user_role {
            self.user_role = Some(role);
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}

// =============================================================================
// PATCH
// =============================================================================

/// Partial user record: zero or more fields to overlay onto [`LoginUser`].
///
/// Deserializes from any subset of the record's JSON, including `{}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<AccessRole>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginUserPatch {
    /// Fallback patch committed when a lookup fails or carries no user:
    /// sentinel identity fields plus the [`AccessRole::NotLogin`] role, in
    /// one patch so the reset lands atomically in a single commit.
    #[must_use]
    pub fn logged_out() -> Self {
        Self {
            user_name: Some(NOT_LOGGED_IN.to_owned()),
            user_account: Some(NOT_LOGGED_IN.to_owned()),
            user_role: Some(AccessRole::NotLogin),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
#[path = "login_user_test.rs"]
mod tests;
