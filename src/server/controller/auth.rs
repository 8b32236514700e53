use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::{access::current_viewer, redirect::found},
        error::{auth::SIGN_IN_PATH, Error},
        model::{
            app::AppState,
            form::{ForgotPasswordForm, SignInForm, SignUpForm},
            session::{notice::SessionNotice, user::SessionUsername},
        },
        service::auth::AuthService,
    },
    view::{
        components::Notice,
        render,
        routes::{auth::SignUpValues, ForgotPasswordPage, SignInPage, SignUpPage},
    },
};

const ACCOUNT_CREATED: &str = "Your account has been created, please sign in.";
const RESET_ACKNOWLEDGEMENT: &str =
    "If an account exists for that email address, password reset instructions are on their way.";

fn unavailable(action: &str) -> Notice {
    Notice::error(format!(
        "{action} is temporarily unavailable, please try again later."
    ))
}

/// Sign-in form
///
/// Shows the one-shot notice left by a previous redirect, such as a completed sign-up.
///
/// # Responses
/// - 200 (OK): Sign-in page
pub async fn sign_in_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let viewer = current_viewer(&state, &session).await?;
    let notice = SessionNotice::take(&session).await?.map(Notice::success);

    Ok(render(rsx! {
        SignInPage { viewer, notice, username: "" }
    })
    .into_response())
}

/// Checks credentials and signs the user in
///
/// The session ID is cycled before the username is stored.
///
/// # Responses
/// - 302 (Found): Signed in, redirect to the home page
/// - 200 (OK): Sign-in page with an error notice for invalid credentials or an unavailable
///   database
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignInForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db, &state.admin_username);

    let notice = match auth_service.sign_in(&form.username, &form.password).await {
        Ok(username) => {
            session.cycle_id().await?;
            SessionUsername::insert(&session, &username).await?;

            tracing::debug!(username = %username, "User signed in");

            return Ok(found("/"));
        }
        Err(Error::AccountError(e)) => Notice::error(e.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Sign-in failed");

            unavailable("Sign-in")
        }
    };

    let viewer = current_viewer(&state, &session).await?;

    Ok(render(rsx! {
        SignInPage { viewer, notice: Some(notice), username: form.username.trim() }
    })
    .into_response())
}

/// Sign-up form
///
/// # Responses
/// - 200 (OK): Sign-up page
pub async fn sign_up_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let viewer = current_viewer(&state, &session).await?;

    Ok(render(rsx! {
        SignUpPage { viewer, notice: None, values: SignUpValues::default() }
    })
    .into_response())
}

/// Creates an account from the sign-up form
///
/// # Responses
/// - 302 (Found): Account created, redirect to the sign-in page which shows a confirmation
/// - 200 (OK): Sign-up page with the entered values and an error notice
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignUpForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db, &state.admin_username);

    let notice = match auth_service.sign_up(&form).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "Account created");

            SessionNotice::insert(&session, ACCOUNT_CREATED).await?;

            return Ok(found(SIGN_IN_PATH));
        }
        Err(Error::AccountError(e)) => Notice::error(e.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Sign-up failed");

            unavailable("Sign-up")
        }
    };

    let viewer = current_viewer(&state, &session).await?;
    let values = SignUpValues {
        first_name: form.first_name,
        last_name: form.last_name,
        username: form.username,
        email: form.email,
    };

    Ok(render(rsx! {
        SignUpPage { viewer, notice: Some(notice), values }
    })
    .into_response())
}

/// Forgot-password form
///
/// # Responses
/// - 200 (OK): Forgot-password page
pub async fn forgot_password_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let viewer = current_viewer(&state, &session).await?;

    Ok(render(rsx! {
        ForgotPasswordPage { viewer, notice: None }
    })
    .into_response())
}

/// Records a password reset request
///
/// The acknowledgement is identical whether or not the email belongs to an account.
///
/// # Responses
/// - 200 (OK): Forgot-password page with the acknowledgement
pub async fn forgot_password(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ForgotPasswordForm>,
) -> Result<Response, Error> {
    let auth_service = AuthService::new(&state.db, &state.admin_username);

    if let Err(e) = auth_service.request_password_reset(&form.email).await {
        tracing::warn!(error = %e, "Failed to record password reset request");
    }

    let viewer = current_viewer(&state, &session).await?;

    Ok(render(rsx! {
        ForgotPasswordPage { viewer, notice: Some(Notice::info(RESET_ACKNOWLEDGEMENT)) }
    })
    .into_response())
}

/// Logs the user out by flushing their session
///
/// # Responses
/// - 302 (Found): Redirect to the sign-in page
/// - 500 (Internal Server Error): The session store could not be reached
pub async fn logout(session: Session) -> Result<Response, Error> {
    // Only flush when there is a signed-in user to remove
    if SessionUsername::get(&session).await?.is_some() {
        session.flush().await?;
    }

    Ok(found(SIGN_IN_PATH))
}
