//! Session state modules.
//!
//! DESIGN
//! ======
//! Split by concern: `login_user` defines the record shape and its merge
//! semantics, `session` owns the record and the operations that change it.

pub mod login_user;
pub mod session;
