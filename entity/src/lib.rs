//! sea-orm entity models for the dealership database.

pub mod prelude;

pub mod dealership_user;
pub mod user_payment;
pub mod vehicle;
pub mod vehicle_order;
