use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::bad_request;

/// Reasons a purchase is refused. The transaction is rolled back for all of them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("Please choose a quantity between 1 and {max}.")]
    InvalidQuantity { max: i32 },
    #[error("Please choose a vehicle to purchase.")]
    NoVehicleSelected,
    #[error("Vehicle {0} is not in our inventory.")]
    VehicleNotFound(i32),
    #[error("Only {available} of that vehicle left in stock, {requested} requested.")]
    OutOfStock { requested: i32, available: i32 },
    #[error("No customer account found for {0:?}; please sign up before purchasing.")]
    UnknownCustomer(String),
    #[error("That order is too large to process; please order fewer units.")]
    TotalTooLarge,
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        bad_request(self.to_string())
    }
}
