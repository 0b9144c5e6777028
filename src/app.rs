use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::pages::{Home, PageNotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

#[component]
pub fn App() -> Element {
    // site.json is compiled in and covered by config tests
    use_context_provider(|| {
        Rc::new(SiteConfig::embedded().expect("bundled site.json must be valid"))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: BOOTSTRAP_ICONS_CSS }

        Router::<Route> {}
    }
}
