use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::{access::current_viewer, load::or_unavailable},
        error::Error,
        model::app::AppState,
        service::inventory::InventoryService,
    },
    view::{render, routes::HomePage},
};

/// Home page listing the vehicles in stock
///
/// # Responses
/// - 200 (OK): Home page, with an "unavailable" notice when the inventory cannot be loaded
pub async fn home(State(state): State<AppState>, session: Session) -> Result<Response, Error> {
    let viewer = current_viewer(&state, &session).await?;

    let (vehicles, notice) = or_unavailable(
        InventoryService::new(&state.db).list_in_stock().await,
        "vehicle inventory",
    );

    Ok(render(rsx! {
        HomePage { viewer, vehicles, notice }
    })
    .into_response())
}
