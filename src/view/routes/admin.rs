use dioxus::prelude::*;

use crate::{
    model::{order::SalesReportDto, user::UserDto, vehicle::VehicleDto},
    view::{
        components::{Layout, Notice, Viewer},
        format::format_price,
    },
};

#[component]
pub fn SalesReportPage(
    viewer: Viewer,
    report: SalesReportDto,
    #[props(!optional)] notice: Option<Notice>,
) -> Element {
    let total_revenue = format_price(report.total_revenue_cents);

    rsx!(
        Layout { title: "Sales Report", viewer, notice,
            h1 { class: "text-2xl", "Sales Report" }
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Vehicle" }
                        th { "Units sold" }
                        th { "Revenue" }
                    }
                }
                tbody {
                    for row in report.rows.iter() {
                        tr { key: "{row.vehicle_id}",
                            td { "{row.year} {row.make} {row.model}" }
                            td { "{row.units_sold}" }
                            td { {format_price(row.revenue_cents)} }
                        }
                    }
                }
                tfoot {
                    tr {
                        th { "Total" }
                        th { "{report.total_units}" }
                        th { "{total_revenue}" }
                    }
                }
            }
        }
    )
}

#[component]
pub fn VehicleInventoryPage(
    viewer: Viewer,
    vehicles: Vec<VehicleDto>,
    #[props(!optional)] notice: Option<Notice>,
) -> Element {
    rsx!(
        Layout { title: "Vehicle Inventory", viewer, notice,
            h1 { class: "text-2xl", "Vehicle Inventory" }
            table { class: "table table-md",
                thead {
                    tr {
                        th { "ID" }
                        th { "Vehicle" }
                        th { "Price" }
                        th { "Stock" }
                    }
                }
                tbody {
                    for vehicle in vehicles.iter() {
                        tr { key: "{vehicle.id}",
                            td { "{vehicle.id}" }
                            td { "{vehicle.year} {vehicle.make} {vehicle.model}" }
                            td { {format_price(vehicle.price_cents)} }
                            td { "{vehicle.stock}" }
                        }
                    }
                }
            }

            h2 { class: "text-xl", "Add a vehicle" }
            form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/vehicle-inventory",
                label { "Make"
                    input { class: "input", r#type: "text", name: "make", required: true }
                }
                label { "Model"
                    input { class: "input", r#type: "text", name: "model", required: true }
                }
                label { "Year"
                    input { class: "input", r#type: "number", name: "year", required: true }
                }
                label { "Price (USD)"
                    input { class: "input", r#type: "text", name: "price", placeholder: "24999.00", required: true }
                }
                label { "Stock"
                    input { class: "input", r#type: "number", name: "stock", min: "0", value: "0", required: true }
                }
                button { class: "btn btn-primary", r#type: "submit", "Add vehicle" }
            }

            h2 { class: "text-xl", "Restock" }
            form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/vehicle-inventory/restock",
                label { "Vehicle ID"
                    input { class: "input", r#type: "number", name: "vehicle-id", required: true }
                }
                label { "New stock level"
                    input { class: "input", r#type: "number", name: "stock", min: "0", required: true }
                }
                label { "New price (leave empty to keep)"
                    input { class: "input", r#type: "text", name: "price" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Update stock" }
            }
        }
    )
}

#[component]
pub fn UpdateUserPage(
    viewer: Viewer,
    users: Vec<UserDto>,
    #[props(!optional)] notice: Option<Notice>,
) -> Element {
    rsx!(
        Layout { title: "Update User", viewer, notice,
            h1 { class: "text-2xl", "Update User" }
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Username" }
                        th { "Name" }
                        th { "Email" }
                        th { "Joined" }
                    }
                }
                tbody {
                    for user in users.iter() {
                        tr { key: "{user.username}",
                            td { "{user.username}" }
                            td { "{user.first_name} {user.last_name}" }
                            td { "{user.email}" }
                            td { {user.created_at.format("%Y-%m-%d").to_string()} }
                        }
                    }
                }
            }

            h2 { class: "text-xl", "Edit profile" }
            form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/update-user",
                label { "Username"
                    input { class: "input", r#type: "text", name: "username", required: true }
                }
                label { "First name"
                    input { class: "input", r#type: "text", name: "first-name", required: true }
                }
                label { "Last name"
                    input { class: "input", r#type: "text", name: "last-name", required: true }
                }
                label { "Email"
                    input { class: "input", r#type: "email", name: "email", required: true }
                }
                button { class: "btn btn-primary", r#type: "submit", "Save" }
            }

            h2 { class: "text-xl", "Delete account" }
            form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/update-user/delete",
                label { "Username"
                    input { class: "input", r#type: "text", name: "username", required: true }
                }
                button { class: "btn btn-error", r#type: "submit", "Delete" }
            }
        }
    )
}
