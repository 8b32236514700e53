use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding a message to show on the next rendered page.
pub const SESSION_NOTICE_KEY: &str = "notice";

/// One-shot message carried across a redirect, e.g. "account created" after sign-up.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionNotice(pub String);

impl SessionNotice {
    /// Stores `message`, replacing any notice not yet shown.
    pub async fn insert(session: &Session, message: &str) -> Result<(), Error> {
        session
            .insert(SESSION_NOTICE_KEY, SessionNotice(message.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the pending notice so it is only shown once.
    pub async fn take(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionNotice>(SESSION_NOTICE_KEY)
            .await?
            .map(|SessionNotice(message)| message))
    }
}
