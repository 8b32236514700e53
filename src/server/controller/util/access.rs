use tower_sessions::Session;

use crate::{
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUsername},
    },
    view::components::Viewer,
};

/// Username of the signed-in user
///
/// # Returns
/// - `Ok(String)` - A username is present in session
/// - `Err(Error::AuthError(AuthError::UserNotInSession))` - Anonymous request, rendered as a
///   redirect to the sign-in page
/// - `Err(Error::SessionError)` - Session could not be loaded
pub async fn require_user(session: &Session) -> Result<String, Error> {
    SessionUsername::get(session)
        .await?
        .ok_or(Error::AuthError(AuthError::UserNotInSession))
}

/// Username of the signed-in admin
///
/// Anonymous requests are redirected like [`require_user`]; signed-in users that are not the
/// admin get [`AuthError::NoPermission`], rendered in-band with a 200 status.
pub async fn require_admin(state: &AppState, session: &Session) -> Result<String, Error> {
    let username = require_user(session).await?;

    if !state.is_admin(&username) {
        return Err(AuthError::NoPermission(username).into());
    }

    Ok(username)
}

/// Viewer for pages that are open to everyone
pub async fn current_viewer(state: &AppState, session: &Session) -> Result<Viewer, Error> {
    Ok(match SessionUsername::get(session).await? {
        Some(username) => {
            let is_admin = state.is_admin(&username);

            Viewer::signed_in(username, is_admin)
        }
        None => Viewer::anonymous(),
    })
}

/// Viewer for a username that already passed a gate
pub fn viewer_for(state: &AppState, username: &str) -> Viewer {
    Viewer::signed_in(username, state.is_admin(username))
}
