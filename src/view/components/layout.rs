use dioxus::prelude::*;

use crate::view::components::{Navbar, Notice, NoticeBanner, Viewer};

/// Document shell shared by every page.
#[component]
pub fn Layout(
    #[props(into)] title: String,
    viewer: Viewer,
    #[props(!optional)] notice: Option<Notice>,
    children: Element,
) -> Element {
    rsx!(
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{title} | Dealership" }
            }
            body {
                Navbar { viewer }
                main { class: "min-h-screen p-4 flex flex-col items-center gap-4",
                    NoticeBanner { notice }
                    {children}
                }
            }
        }
    )
}
