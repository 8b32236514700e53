//! Database fixtures inserted during test execution.
//!
//! - `user` - Dealership user accounts
//! - `vehicle` - Inventory entries
//! - `order` - Orders placed for a vehicle
//! - `payment` - Stored payment details

pub mod order;
pub mod payment;
pub mod user;
pub mod vehicle;
