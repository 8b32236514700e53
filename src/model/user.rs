use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::order::OrderDto;

/// Profile, payment summary and order history of a single user.
///
/// `Default` is the payload returned when the data layer cannot be reached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDataDto {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub payment: Option<PaymentDto>,
    pub orders: Vec<OrderDto>,
}

/// Stored payment details; only the last four card digits are ever kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentDto {
    pub card_holder: String,
    pub card_last_four: String,
    pub card_expiry: String,
    pub mailing_address: String,
}

/// Row of the admin user table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Request body of the admin user lookup.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserLookupDto {
    pub username: String,
}

impl From<entity::dealership_user::Model> for UserDto {
    fn from(user: entity::dealership_user::Model) -> Self {
        Self {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

impl From<entity::user_payment::Model> for PaymentDto {
    fn from(payment: entity::user_payment::Model) -> Self {
        Self {
            card_holder: payment.card_holder,
            card_last_four: payment.card_last_four,
            card_expiry: payment.card_expiry,
            mailing_address: payment.mailing_address,
        }
    }
}
