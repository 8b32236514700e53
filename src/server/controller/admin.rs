use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use dioxus::prelude::*;
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::{
            access::{require_admin, viewer_for},
            load::{or_unavailable, outcome_notice},
        },
        error::Error,
        model::{
            app::AppState,
            form::{DeleteUserForm, RestockForm, UpdateUserForm, VehicleForm},
        },
        service::{inventory::InventoryService, report::ReportService, user::UserService},
    },
    view::{
        components::Notice,
        render,
        routes::{SalesReportPage, UpdateUserPage, VehicleInventoryPage},
    },
};

/// Sales per vehicle with overall totals
///
/// # Responses
/// - 200 (OK): Sales report for the admin, or the no-permission page for other users
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn sales_report(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let username = require_admin(&state, &session).await?;

    let (report, notice) = or_unavailable(
        ReportService::new(&state.db).sales_report().await,
        "sales report",
    );

    Ok(render(rsx! {
        SalesReportPage { viewer: viewer_for(&state, &username), report, notice }
    })
    .into_response())
}

async fn render_inventory(
    state: &AppState,
    username: &str,
    notice: Option<Notice>,
) -> Response {
    let (vehicles, load_notice) = or_unavailable(
        InventoryService::new(&state.db).list().await,
        "vehicle inventory",
    );

    render(rsx! {
        VehicleInventoryPage {
            viewer: viewer_for(state, username),
            vehicles,
            notice: notice.or(load_notice),
        }
    })
    .into_response()
}

/// Inventory table with the add and restock forms
///
/// # Responses
/// - 200 (OK): Inventory page for the admin, or the no-permission page for other users
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn vehicle_inventory_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let username = require_admin(&state, &session).await?;

    Ok(render_inventory(&state, &username, None).await)
}

/// Adds a vehicle to the inventory
///
/// # Responses
/// - 200 (OK): Inventory page with a confirmation or an error notice
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn add_vehicle(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<VehicleForm>,
) -> Result<Response, Error> {
    let username = require_admin(&state, &session).await?;

    let result = InventoryService::new(&state.db).add_vehicle(&form).await;
    let notice = outcome_notice(result, "add the vehicle", |vehicle| {
        format!(
            "Added {} {} {} with {} in stock.",
            vehicle.year, vehicle.make, vehicle.model, vehicle.stock
        )
    });

    Ok(render_inventory(&state, &username, Some(notice)).await)
}

/// Sets the stock level and optionally the price of a vehicle
///
/// # Responses
/// - 200 (OK): Inventory page with a confirmation or an error notice
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn restock_vehicle(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RestockForm>,
) -> Result<Response, Error> {
    let username = require_admin(&state, &session).await?;

    let result = InventoryService::new(&state.db).restock(&form).await;
    let notice = outcome_notice(result, "restock the vehicle", |vehicle| {
        format!(
            "{} {} {} now has {} in stock.",
            vehicle.year, vehicle.make, vehicle.model, vehicle.stock
        )
    });

    Ok(render_inventory(&state, &username, Some(notice)).await)
}

async fn render_users(state: &AppState, username: &str, notice: Option<Notice>) -> Response {
    let (users, load_notice) = or_unavailable(
        UserService::new(&state.db).list_users().await,
        "user list",
    );

    render(rsx! {
        UpdateUserPage {
            viewer: viewer_for(state, username),
            users,
            notice: notice.or(load_notice),
        }
    })
    .into_response()
}

/// User table with the edit and delete forms
///
/// # Responses
/// - 200 (OK): User management page for the admin, or the no-permission page for other users
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn update_user_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let username = require_admin(&state, &session).await?;

    Ok(render_users(&state, &username, None).await)
}

/// Updates the profile of a user
///
/// # Responses
/// - 200 (OK): User management page with a confirmation or an error notice
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateUserForm>,
) -> Result<Response, Error> {
    let username = require_admin(&state, &session).await?;

    let result = UserService::new(&state.db).update_user(&form).await;
    let notice = outcome_notice(result, "update the user", |user| {
        format!("Updated the profile of {}.", user.username)
    });

    Ok(render_users(&state, &username, Some(notice)).await)
}

/// Deletes a user along with their orders and payment details
///
/// # Responses
/// - 200 (OK): User management page with a confirmation or an error notice
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteUserForm>,
) -> Result<Response, Error> {
    let username = require_admin(&state, &session).await?;

    let result = UserService::new(&state.db)
        .delete_user(&form.username, &state.admin_username)
        .await;
    let notice = outcome_notice(result, "delete the user", |()| {
        format!("Deleted the account of {}.", form.username.trim())
    });

    Ok(render_users(&state, &username, Some(notice)).await)
}
