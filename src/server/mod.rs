//! Server application core modules.
//!
//! HTTP routing and handlers, session gates, the service layer with the dealership's business
//! rules, and sea-orm repositories over users, vehicles, orders and payment details.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
