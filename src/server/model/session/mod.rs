//! Session data models.
//!
//! Type-safe wrappers for the values the application keeps in the tower-sessions store:
//! the signed-in username and a one-shot notice carried across a redirect.

pub mod notice;
pub mod user;
