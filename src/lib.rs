//! # user-session
//!
//! Client-side session state for the current logged-in user, kept in sync
//! with a remote identity service.
//!
//! The [`state::session::SessionStore`] owns the single in-memory user
//! record and funnels every change through one merge-based commit
//! primitive. The [`net`] module defines the remote lookup seam and an
//! HTTP implementation of it; lookup failures never escape that layer —
//! they collapse into the canonical "not logged in" record.

pub mod net;
pub mod state;
