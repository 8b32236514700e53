use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::bad_request;

/// Account validation and credential failures.
///
/// The display text of each variant is shown to the user as-is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("Usernames must be 3 to 32 characters of letters, digits or underscores.")]
    InvalidUsername,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Passwords must be at least 8 characters long.")]
    WeakPassword,
    #[error("That username is already taken.")]
    UsernameTaken,
    #[error("An account with that email address already exists.")]
    EmailTaken,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("No account found for {0:?}.")]
    UserNotFound(String),
    #[error("Card numbers must be 12 to 19 digits.")]
    InvalidCardNumber,
    #[error("Card expiry must be in MM/YY format.")]
    InvalidCardExpiry,
    #[error("The administrator account cannot be deleted.")]
    ProtectedAccount,
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        bad_request(self.to_string())
    }
}
