use dioxus::prelude::*;

use crate::dom;
use crate::notice;
use crate::types::ExternalEntry;

#[component]
pub fn ExternalLink(entry: ExternalEntry, compact: bool) -> Element {
    let coming_soon = notice::coming_soon(&entry);

    rsx! {
        a {
            class: if compact { "nav-link text-muted px-3" } else { "nav-link-custom text-muted mb-2" },
            href: "{entry.url}",
            onclick: move |evt: MouseEvent| {
                // Placeholder pages: never leave the site
                evt.prevent_default();
                dom::show_notice(&coming_soon);
            },

            if compact {
                i { class: "bi {entry.icon} me-2" }
                "{entry.title}"
            } else {
                div { class: "d-flex align-items-center",
                    i { class: "bi {entry.icon} me-3" }
                    span { "{entry.title}" }
                }
            }
        }
    }
}
