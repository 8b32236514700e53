//! Form payloads posted by the rendered pages.
//!
//! Every field defaults to an empty string so an incomplete post reaches the handler and is
//! answered with an in-band message instead of an extractor rejection.

use serde::Deserialize;

use crate::server::error::order::OrderError;

/// Largest number of vehicles accepted in a single order.
pub const MAX_ORDER_QUANTITY: i32 = 10;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignUpForm {
    #[serde(default, rename = "first-name")]
    pub first_name: String,
    #[serde(default, rename = "last-name")]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PurchaseForm {
    #[serde(default, rename = "vehicle-id")]
    pub vehicle_id: String,
    #[serde(default)]
    pub quantity: String,
}

impl PurchaseForm {
    /// Parses the selected vehicle ID and quantity.
    ///
    /// # Returns
    /// - `Ok((vehicle_id, quantity))` - Both fields parsed and quantity within 1..=[`MAX_ORDER_QUANTITY`]
    /// - `Err(OrderError::NoVehicleSelected)` - Vehicle ID missing or not a number
    /// - `Err(OrderError::InvalidQuantity)` - Quantity missing, not a number or out of range
    pub fn parse(&self) -> Result<(i32, i32), OrderError> {
        let vehicle_id = self
            .vehicle_id
            .trim()
            .parse::<i32>()
            .map_err(|_| OrderError::NoVehicleSelected)?;

        let quantity = self
            .quantity
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|quantity| (1..=MAX_ORDER_QUANTITY).contains(quantity))
            .ok_or(OrderError::InvalidQuantity {
                max: MAX_ORDER_QUANTITY,
            })?;

        Ok((vehicle_id, quantity))
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PaymentForm {
    #[serde(default, rename = "card-holder")]
    pub card_holder: String,
    #[serde(default, rename = "card-number")]
    pub card_number: String,
    #[serde(default, rename = "card-expiry")]
    pub card_expiry: String,
    #[serde(default, rename = "mailing-address")]
    pub mailing_address: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VehicleForm {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RestockForm {
    #[serde(default, rename = "vehicle-id")]
    pub vehicle_id: String,
    #[serde(default)]
    pub stock: String,
    /// Leave empty to keep the current price.
    #[serde(default)]
    pub price: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateUserForm {
    #[serde(default)]
    pub username: String,
    #[serde(default, rename = "first-name")]
    pub first_name: String,
    #[serde(default, rename = "last-name")]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeleteUserForm {
    #[serde(default)]
    pub username: String,
}
