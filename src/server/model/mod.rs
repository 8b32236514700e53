//! Server application models.
//!
//! Application state shared by every handler, the typed session entries and the form
//! payloads accepted by the HTML pages.

pub mod app;
pub mod form;
pub mod session;
