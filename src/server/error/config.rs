use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration read by [`Config::from_env`](crate::server::config::Config::from_env).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `DATABASE_URL` or `VALKEY_URL` is unset or blank.
    #[error("{0} must be set")]
    MissingEnvVar(String),
    /// A variable is set but unusable, e.g. a `BIND_ADDRESS` that is not `host:port`.
    #[error("{var} is invalid: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

// Logged, answered with a generic 500
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
