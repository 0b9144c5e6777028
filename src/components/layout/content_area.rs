use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::SiteConfig;

/// One anchored section per navigation entry; these are what the tracker measures
#[component]
pub fn ContentArea() -> Element {
    let config = use_context::<Rc<SiteConfig>>();

    rsx! {
        main { class: "content-area",
            for entry in config.sections().iter() {
                section {
                    key: "{entry.id}",
                    id: "{entry.id}",
                    class: "content-section",
                    h2 { class: "content-section-title",
                        i { class: "bi {entry.icon} me-2" }
                        "{entry.title}"
                    }
                }
            }
        }
    }
}
