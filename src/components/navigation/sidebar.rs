use dioxus::prelude::*;

use crate::components::navigation::{ExternalLink, NavLink, SidebarFooter};
use crate::view::SidebarView;
use crate::Route;

/// Fixed left sidebar for desktop widths
#[component]
pub fn Sidebar(view: SidebarView) -> Element {
    rsx! {
        aside { class: "sidebar",
            Link {
                to: Route::Home {},
                class: "sidebar-brand",
                span { "{view.brand}" }
            }

            nav { class: "sidebar-nav",
                for item in view.items.iter() {
                    NavLink { key: "{item.entry.id}", item: item.clone(), compact: false }
                }

                if !view.external.is_empty() {
                    div { class: "sidebar-heading", "External Links" }
                }

                for entry in view.external.iter() {
                    ExternalLink { key: "{entry.id}", entry: entry.clone(), compact: false }
                }
            }

            SidebarFooter { brand: view.brand.clone(), social: view.social.clone() }
        }
    }
}
