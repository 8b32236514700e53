//! Server-rendered HTML pages.
//!
//! Pages are `dioxus` components rendered to a string per request with `dioxus-ssr`; there is
//! no client-side hydration.

pub mod components;
pub mod format;
pub mod routes;

use axum::response::Html;
use dioxus::prelude::*;

/// Renders a page element into a complete HTML document.
pub fn render(element: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>{}",
        dioxus_ssr::render_element(element)
    ))
}
