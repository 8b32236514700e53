//! HTTP handlers for the dealership.
//!
//! Page handlers render HTML with [`crate::view`]; the handlers in [`data`] return JSON and are
//! documented with utoipa. Protected pages go through the gates in [`util::access`].

pub mod account;
pub mod admin;
pub mod auth;
pub mod data;
pub mod home;
pub mod util;
