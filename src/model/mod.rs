//! Data transfer objects shared by the JSON endpoints and the rendered pages.

pub mod api;
pub mod order;
pub mod user;
pub mod vehicle;
