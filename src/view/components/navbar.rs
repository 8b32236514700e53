use dioxus::prelude::*;

use crate::view::components::Viewer;

#[component]
pub fn Navbar(viewer: Viewer) -> Element {
    rsx! {
        nav {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                a { class: "text-xl", href: "/", "Dealership" }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-2",
                    li { a { href: "/", "Home" } }
                    li { a { href: "/purchase", "Purchase" } }
                    li { a { href: "/update-payment", "Update Payment" } }
                    if viewer.is_admin {
                        li { a { href: "/sales-report", "Sales Report" } }
                        li { a { href: "/vehicle-inventory", "Vehicle Inventory" } }
                        li { a { href: "/update-user", "Update User" } }
                    }
                }
            }
            div {
                class: "navbar-end",
                if let Some(username) = viewer.username.as_ref() {
                    span { class: "text-sm", "Signed in as {username}" }
                    a { class: "btn btn-ghost", href: "/logout", "Logout" }
                } else {
                    a { class: "btn btn-ghost", href: "/sign-in", "Sign in" }
                    a { class: "btn btn-primary", href: "/sign-up", "Sign up" }
                }
            }
        }
    }
}
