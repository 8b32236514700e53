//! Service layer for business logic.
//!
//! Services validate user input, coordinate repositories and translate storage results into
//! the DTOs rendered by the pages and returned by the JSON endpoints.

pub mod auth;
pub mod inventory;
pub mod password;
pub mod purchase;
pub mod report;
pub mod user;
