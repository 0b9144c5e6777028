use dioxus::prelude::*;

use crate::types::SocialLink;

#[component]
pub fn SidebarFooter(brand: String, social: Vec<SocialLink>) -> Element {
    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        div { class: "sidebar-footer",
            p { class: "mb-0", "© {year} {brand}" }
            div { class: "social-icons",
                for link in social.iter() {
                    a {
                        key: "{link.label}",
                        class: "me-2 text-dark",
                        href: "{link.url}",
                        title: "{link.label}",
                        i { class: "bi {link.icon}" }
                    }
                }
            }
        }
    }
}
