use dioxus::prelude::*;

use crate::components::layout::PortfolioLayout;
use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        PortfolioLayout {}
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the portfolio" }
        }
    }
}
