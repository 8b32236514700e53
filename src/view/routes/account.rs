use dioxus::prelude::*;

use crate::{
    model::{user::PaymentDto, vehicle::VehicleDto},
    server::model::form::MAX_ORDER_QUANTITY,
    view::{
        components::{Layout, Notice, Viewer},
        format::format_price,
    },
};

#[component]
pub fn PurchasePage(
    viewer: Viewer,
    vehicles: Vec<VehicleDto>,
    #[props(!optional)] notice: Option<Notice>,
) -> Element {
    let options: Vec<(i32, String)> = vehicles
        .iter()
        .map(|vehicle| {
            (
                vehicle.id,
                format!(
                    "{} {} {} ({}, {} left)",
                    vehicle.year,
                    vehicle.make,
                    vehicle.model,
                    format_price(vehicle.price_cents),
                    vehicle.stock
                ),
            )
        })
        .collect();

    rsx!(
        Layout { title: "Purchase", viewer, notice,
            h1 { class: "text-2xl", "Purchase a Vehicle" }
            if options.is_empty() {
                p { class: "italic", "No vehicles are available for purchase right now." }
            } else {
                form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/purchase",
                    label { "Vehicle"
                        select { class: "select", name: "vehicle-id", required: true,
                            for (id, label) in options {
                                option { key: "{id}", value: "{id}", "{label}" }
                            }
                        }
                    }
                    label { "Quantity"
                        input {
                            class: "input",
                            r#type: "number",
                            name: "quantity",
                            min: "1",
                            max: "{MAX_ORDER_QUANTITY}",
                            value: "1",
                            required: true,
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Purchase" }
                }
            }
        }
    )
}

#[component]
pub fn UpdatePaymentPage(
    viewer: Viewer,
    #[props(!optional)] payment: Option<PaymentDto>,
    #[props(!optional)] notice: Option<Notice>,
) -> Element {
    let card_holder = payment.as_ref().map(|p| p.card_holder.clone()).unwrap_or_default();
    let card_expiry = payment.as_ref().map(|p| p.card_expiry.clone()).unwrap_or_default();
    let mailing_address = payment
        .as_ref()
        .map(|p| p.mailing_address.clone())
        .unwrap_or_default();

    rsx!(
        Layout { title: "Update Payment", viewer, notice,
            h1 { class: "text-2xl", "Update Payment & Mailing Address" }
            if let Some(payment) = payment.as_ref() {
                p { "Card on file ending in {payment.card_last_four}, expires {payment.card_expiry}." }
            } else {
                p { class: "italic", "No payment details on file." }
            }
            form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/update-payment",
                label { "Card holder"
                    input { class: "input", r#type: "text", name: "card-holder", value: "{card_holder}", required: true }
                }
                label { "Card number"
                    input { class: "input", r#type: "text", name: "card-number", inputmode: "numeric", autocomplete: "cc-number", required: true }
                }
                label { "Expiry (MM/YY)"
                    input { class: "input", r#type: "text", name: "card-expiry", value: "{card_expiry}", placeholder: "MM/YY", required: true }
                }
                label { "Mailing address"
                    textarea { class: "textarea", name: "mailing-address", required: true, "{mailing_address}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Save payment details" }
            }
        }
    )
}
