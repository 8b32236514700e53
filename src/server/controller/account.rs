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
            access::{require_user, viewer_for},
            load::{or_unavailable, outcome_notice},
        },
        error::Error,
        model::{
            app::AppState,
            form::{PaymentForm, PurchaseForm},
        },
        service::{inventory::InventoryService, purchase::PurchaseService, user::UserService},
    },
    view::{
        format::format_price,
        render,
        routes::{PurchasePage, UpdatePaymentPage},
    },
};

/// Purchase page listing the vehicles that can be bought
///
/// # Responses
/// - 200 (OK): Purchase page
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn purchase_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let username = require_user(&session).await?;

    let (vehicles, notice) = or_unavailable(
        InventoryService::new(&state.db).list_in_stock().await,
        "vehicle inventory",
    );

    Ok(render(rsx! {
        PurchasePage { viewer: viewer_for(&state, &username), vehicles, notice }
    })
    .into_response())
}

/// Places an order for the signed-in user
///
/// # Responses
/// - 200 (OK): Purchase page with a confirmation or an error notice
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn purchase(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PurchaseForm>,
) -> Result<Response, Error> {
    let username = require_user(&session).await?;

    let result = match form.parse() {
        Ok((vehicle_id, quantity)) => {
            PurchaseService::new(&state.db)
                .purchase(&username, vehicle_id, quantity)
                .await
        }
        Err(e) => Err(e.into()),
    };
    let notice = outcome_notice(result, "place your order", |order| {
        format!(
            "Order #{} placed: {} x {} {} for {}.",
            order.id,
            order.quantity,
            order.make,
            order.model,
            format_price(order.total_cents)
        )
    });

    let (vehicles, _) = or_unavailable(
        InventoryService::new(&state.db).list_in_stock().await,
        "vehicle inventory",
    );

    Ok(render(rsx! {
        PurchasePage {
            viewer: viewer_for(&state, &username),
            vehicles,
            notice: Some(notice),
        }
    })
    .into_response())
}

/// Payment and mailing address form, pre-filled with the stored details
///
/// # Responses
/// - 200 (OK): Update payment page
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn update_payment_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let username = require_user(&session).await?;

    let (payment, notice) = or_unavailable(
        UserService::new(&state.db).get_payment(&username).await,
        "payment information",
    );

    Ok(render(rsx! {
        UpdatePaymentPage { viewer: viewer_for(&state, &username), payment, notice }
    })
    .into_response())
}

/// Stores the payment details of the signed-in user
///
/// # Responses
/// - 200 (OK): Update payment page with a confirmation or an error notice
/// - 302 (Found): Anonymous request, redirect to the sign-in page
pub async fn update_payment(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PaymentForm>,
) -> Result<Response, Error> {
    let username = require_user(&session).await?;
    let user_service = UserService::new(&state.db);

    let result = user_service.update_payment(&username, &form).await;
    let notice = outcome_notice(result, "update your payment details", |payment| {
        format!(
            "Payment details saved for the card ending in {}.",
            payment.card_last_four
        )
    });

    let (payment, _) = or_unavailable(
        user_service.get_payment(&username).await,
        "payment information",
    );

    Ok(render(rsx! {
        UpdatePaymentPage {
            viewer: viewer_for(&state, &username),
            payment,
            notice: Some(notice),
        }
    })
    .into_response())
}
