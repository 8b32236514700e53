//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table. They are generic over [`ConnectionTrait`]
//! so the same repository runs against a pooled connection or inside a transaction.
//!
//! [`ConnectionTrait`]: sea_orm::ConnectionTrait

pub mod order;
pub mod payment;
pub mod user;
pub mod vehicle;
