use dioxus::prelude::*;

use crate::components::navigation::{ExternalLink, NavLink};
use crate::view::SidebarView;
use crate::Route;

/// Collapsible top navbar for narrow widths
#[component]
pub fn MobileNavbar(view: SidebarView) -> Element {
    let mut is_expanded = use_signal(|| false);

    rsx! {
        header { class: "mobile-navbar",
            div { class: "mobile-navbar-bar",
                Link {
                    to: Route::Home {},
                    class: "mobile-navbar-brand",
                    "{view.brand}"
                }
                button {
                    class: "navbar-toggler",
                    "aria-controls": "mobile-navbar-links",
                    "aria-expanded": if is_expanded() { "true" } else { "false" },
                    title: "Toggle navigation",
                    onclick: move |_| is_expanded.set(!is_expanded()),
                    i { class: if is_expanded() { "bi bi-x-lg" } else { "bi bi-list" } }
                }
            }

            if is_expanded() {
                nav { class: "mobile-navbar-links", id: "mobile-navbar-links",
                    for item in view.items.iter() {
                        NavLink { key: "{item.entry.id}", item: item.clone(), compact: true }
                    }

                    if !view.external.is_empty() {
                        div { class: "mobile-navbar-divider" }
                    }

                    for entry in view.external.iter() {
                        ExternalLink { key: "{entry.id}", entry: entry.clone(), compact: true }
                    }
                }
            }
        }
    }
}
