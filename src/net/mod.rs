//! Remote identity service access.
//!
//! `types` defines the lookup seam and its outcome variants; `api` is the
//! HTTP implementation against the identity service's REST envelope.

pub mod api;
pub mod types;
