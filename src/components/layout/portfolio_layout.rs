use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::hooks::use_sidebar_state;
use crate::layout::LayoutVariant;

#[component]
pub fn PortfolioLayout() -> Element {
    let config = use_context::<Rc<SiteConfig>>();
    let sidebar_state = use_sidebar_state(config);
    use_context_provider(|| sidebar_state.clone());

    let view = sidebar_state.view();
    let is_compact = view.variant == LayoutVariant::Compact;

    // Only the navigation swaps on a breakpoint crossing; the content stays mounted
    rsx! {
        div {
            class: if is_compact { "portfolio-container portfolio-compact" } else { "portfolio-container portfolio-fixed" },

            if is_compact {
                crate::components::navigation::MobileNavbar { view: view.clone() }
            } else {
                crate::components::navigation::Sidebar { view: view.clone() }
            }

            crate::components::layout::ContentArea {}
        }
    }
}
