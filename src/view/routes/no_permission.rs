use dioxus::prelude::*;

use crate::view::components::{Layout, Viewer};

/// Shown to signed-in users who request an admin page.
#[component]
pub fn NoPermissionPage(viewer: Viewer) -> Element {
    rsx!(
        Layout { title: "Access denied", viewer, notice: None,
            h1 { class: "text-2xl", "Access denied" }
            p { "You have no permission to view this page." }
            a { class: "link", href: "/", "Back to the home page" }
        }
    )
}
