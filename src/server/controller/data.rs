use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        order::OrderDto,
        user::{UserDataDto, UserLookupDto},
        vehicle::VehicleDto,
    },
    server::{
        controller::util::access::require_user,
        error::Error,
        model::app::AppState,
        service::{inventory::InventoryService, report::ReportService, user::UserService},
    },
};

pub static DATA_TAG: &str = "data";

/// Get the whole vehicle inventory
///
/// Answers with an empty list when the inventory cannot be loaded.
#[utoipa::path(
    get,
    path = "/get-data",
    tag = DATA_TAG,
    responses(
        (status = 200, description = "Vehicle inventory, empty when unavailable", body = Vec<VehicleDto>),
    ),
)]
pub async fn get_data(State(state): State<AppState>) -> impl IntoResponse {
    let vehicles = match InventoryService::new(&state.db).list().await {
        Ok(vehicles) => vehicles,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load vehicle data");

            Vec::new()
        }
    };

    (StatusCode::OK, Json(vehicles))
}

/// Get every order with the make and model of its vehicle
///
/// Answers with an empty list when the orders cannot be loaded.
#[utoipa::path(
    get,
    path = "/get-order-data",
    tag = DATA_TAG,
    responses(
        (status = 200, description = "Orders, empty when unavailable", body = Vec<OrderDto>),
    ),
)]
pub async fn get_order_data(State(state): State<AppState>) -> impl IntoResponse {
    let orders = match ReportService::new(&state.db).order_data().await {
        Ok(orders) => orders,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load order data");

            Vec::new()
        }
    };

    (StatusCode::OK, Json(orders))
}

async fn load_user_data(state: &AppState, username: String) -> Option<UserDataDto> {
    match UserService::new(&state.db).get_user_data(&username).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(error = %e, username = %username, "Failed to load user data");

            Some(UserDataDto {
                username,
                ..Default::default()
            })
        }
    }
}

/// Get profile, payment summary and orders of the signed-in user
///
/// # Responses
/// - 200 (OK): User data; only the username is filled in when the data cannot be loaded
/// - 302 (Found): Anonymous request, redirect to the sign-in page
#[utoipa::path(
    get,
    path = "/get-user-data",
    tag = DATA_TAG,
    responses(
        (status = 200, description = "Data of the signed-in user", body = UserDataDto),
        (status = 302, description = "Not signed in, redirect to the sign-in page"),
    ),
)]
pub async fn get_user_data(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let username = require_user(&session).await?;

    let data = match load_user_data(&state, username.clone()).await {
        Some(data) => data,
        None => UserDataDto {
            username,
            ..Default::default()
        },
    };

    Ok((StatusCode::OK, Json(data)).into_response())
}

/// Look up the data of any user (admin only)
///
/// # Responses
/// - 200 (OK): User data, or an `ErrorDto` with a no-permission message for non-admins
/// - 302 (Found): Anonymous request, redirect to the sign-in page
/// - 400 / 415: Admin request with a missing or malformed JSON body
/// - 404 (Not Found): No user with the requested username
///
/// The body is only inspected after the session gates, so anonymous requests are redirected
/// whatever they send.
#[utoipa::path(
    post,
    path = "/get-user-data",
    tag = DATA_TAG,
    request_body = UserLookupDto,
    responses(
        (status = 200, description = "Data of the requested user, or a no-permission error for non-admins", body = UserDataDto),
        (status = 302, description = "Not signed in, redirect to the sign-in page"),
        (status = 400, description = "Malformed JSON body"),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn lookup_user_data(
    State(state): State<AppState>,
    session: Session,
    lookup: Result<Json<UserLookupDto>, JsonRejection>,
) -> Result<Response, Error> {
    let username = require_user(&session).await?;

    if !state.is_admin(&username) {
        tracing::info!(username = %username, "Denied user data lookup");

        return Ok((
            StatusCode::OK,
            Json(ErrorDto {
                error: "You have no permission to look up other users.".to_string(),
            }),
        )
            .into_response());
    }

    let Json(lookup) = match lookup {
        Ok(lookup) => lookup,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    let requested = lookup.username.trim().to_string();
    let Some(data) = load_user_data(&state, requested.clone()).await else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: format!("No account found for {requested:?}."),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(data)).into_response())
}
