use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the server listens on when `BIND_ADDRESS` is not set.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Administrative identity used when `ADMIN_USERNAME` is not set.
pub const DEFAULT_ADMIN_USERNAME: &str = "Admin";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: SocketAddr,
    /// Session username that is granted access to the admin pages.
    pub admin_username: String,
    /// When set, the admin account is created (or its password reset) at startup.
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of a variable, `None` when it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - `BIND_ADDRESS` does not parse or `ADMIN_USERNAME` is blank
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let bind_address = lookup("BIND_ADDRESS")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let admin_username = match lookup("ADMIN_USERNAME") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "ADMIN_USERNAME".to_string(),
                    reason: "must not be blank".to_string(),
                })
            }
            Some(value) => value.trim().to_string(),
            None => DEFAULT_ADMIN_USERNAME.to_string(),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address,
            admin_username,
            admin_password: lookup("ADMIN_PASSWORD").filter(|value| !value.is_empty()),
        })
    }
}
