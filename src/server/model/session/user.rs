use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the signed-in username.
pub const SESSION_USERNAME_KEY: &str = "username";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUsername(pub String);

impl SessionUsername {
    /// Insert username into session
    pub async fn insert(session: &Session, username: &str) -> Result<(), Error> {
        session
            .insert(SESSION_USERNAME_KEY, SessionUsername(username.to_string()))
            .await?;

        Ok(())
    }

    /// Get username from session
    ///
    /// An empty username counts as signed out.
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionUsername>(SESSION_USERNAME_KEY)
            .await?
            .map(|SessionUsername(username)| username)
            .filter(|username| !username.is_empty()))
    }
}
