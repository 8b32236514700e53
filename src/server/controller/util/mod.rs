//! Helpers shared by the page and JSON handlers.
//!
//! Session gates for protected and admin pages, `302 Found` redirects, and degraded loading of
//! page data when the database cannot be reached.

pub mod access;
pub mod load;
pub mod redirect;
