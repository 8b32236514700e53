//! Tests for HTTP controller endpoints.
//!
//! Requests go through the complete router with a session layer, so redirects, session cookies
//! and the rendered pages are checked the way a browser would see them.

mod account;
mod admin;
mod auth;
mod data;
mod home;

use axum::http::StatusCode;
use dealership_test_utils::prelude::*;

use crate::util::{TestContextExt, ADMIN};
