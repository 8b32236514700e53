use axum::response::{IntoResponse, Response};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    server::controller::util::redirect::found,
    view::{components::Viewer, render, routes::NoPermissionPage},
};

/// Path anonymous visitors are sent to when they request a protected page.
pub const SIGN_IN_PATH: &str = "/sign-in";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username is not present in session")]
    UserNotInSession,
    #[error("User {0:?} has no permission to access an admin page")]
    NoPermission(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                found(SIGN_IN_PATH)
            }
            Self::NoPermission(username) => {
                tracing::info!(username = %username, "Denied access to admin page");

                let viewer = Viewer::signed_in(username, false);

                render(rsx! {
                    NoPermissionPage { viewer: viewer }
                })
                .into_response()
            }
        }
    }
}
