use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::bad_request;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
    #[error("Vehicle {0} is not in our inventory.")]
    VehicleNotFound(i32),
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        bad_request(self.to_string())
    }
}
