//! Error types for the dealership server.
//!
//! Domain errors (accounts, orders, inventory, authorization, configuration) are defined in
//! submodules and aggregated into [`Error`], which converts into an HTTP response. Domain
//! errors are usually handled in-band by controllers and rendered as a notice on the page;
//! the `IntoResponse` mappings here are the fallback for anything that escapes a handler.

pub mod account;
pub mod auth;
pub mod config;
pub mod inventory;
pub mod order;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        account::AccountError, auth::AuthError, config::ConfigError, inventory::InventoryError,
        order::OrderError,
    },
};

/// Main error type for the dealership server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization gate rejected the request.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Sign-up, sign-in, profile or payment validation failure.
    #[error(transparent)]
    AccountError(#[from] AccountError),
    /// Purchase could not be completed.
    #[error(transparent)]
    OrderError(#[from] OrderError),
    /// Vehicle inventory form could not be applied.
    #[error(transparent)]
    InventoryError(#[from] InventoryError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Listener or server I/O error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 302 Found - Anonymous request to a protected page (redirect to sign-in)
/// - 200 OK - Signed-in user without admin rights (in-band "no permission" page)
/// - 400 Bad Request - Account, order or inventory validation errors
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::AccountError(err) => err.into_response(),
            Self::OrderError(err) => err.into_response(),
            Self::InventoryError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a 400 Bad Request JSON response carrying the error's message.
pub(crate) fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
}
