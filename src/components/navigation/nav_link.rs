use dioxus::prelude::*;

use crate::hooks::SidebarState;
use crate::view::NavItem;

#[component]
pub fn NavLink(item: NavItem, compact: bool) -> Element {
    let mut state = use_context::<SidebarState>();
    let id = item.entry.id.clone();

    let class = match (compact, item.is_active) {
        (true, true) => "nav-link active px-3",
        (true, false) => "nav-link px-3",
        (false, true) => "nav-link-custom mb-2 active",
        (false, false) => "nav-link-custom mb-2",
    };
    let icon_class = if compact {
        format!("bi {} me-2", item.entry.icon)
    } else {
        format!("bi {} me-3", item.entry.icon)
    };

    rsx! {
        a {
            class: class,
            href: "{item.href}",
            "aria-current": if item.is_active { "true" } else { "false" },
            onclick: move |_| state.select_section(&id),

            if compact {
                i { class: "{icon_class}" }
                "{item.entry.title}"
            } else {
                div { class: "d-flex align-items-center",
                    i { class: "{icon_class}" }
                    span { "{item.entry.title}" }
                }
            }
        }
    }
}
