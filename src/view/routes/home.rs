use dioxus::prelude::*;

use crate::{
    model::vehicle::VehicleDto,
    view::{
        components::{Layout, Notice, Viewer},
        format::format_price,
    },
};

#[component]
pub fn HomePage(
    viewer: Viewer,
    vehicles: Vec<VehicleDto>,
    #[props(!optional)] notice: Option<Notice>,
) -> Element {
    rsx!(
        Layout { title: "Home", viewer, notice,
            h1 { class: "text-2xl", "Welcome to the Dealership" }
            p { "Browse the vehicles currently on the lot. Sign in to purchase." }
            if vehicles.is_empty() {
                p { class: "italic", "No vehicles are in stock right now." }
            } else {
                ul { class: "grid gap-2",
                    for vehicle in vehicles.iter() {
                        li { key: "{vehicle.id}", class: "card shadow-sm p-4",
                            h2 { class: "card-title", "{vehicle.year} {vehicle.make} {vehicle.model}" }
                            p { {format_price(vehicle.price_cents)} }
                            p { class: "text-sm", "{vehicle.stock} in stock" }
                        }
                    }
                }
            }
        }
    )
}
