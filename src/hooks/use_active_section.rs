use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::dom::DomProbe;
use crate::hooks::use_window_listener::use_window_listener;
use crate::tracker::ActiveSection;

fn refresh(mut active: Signal<ActiveSection>, config: &SiteConfig) {
    let probe = match DomProbe::current() {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!("Cannot measure sections: {}", e);
            return;
        }
    };

    let mut next = active.peek().clone();
    if next.track(config.sections(), &probe, config.visibility_threshold()) {
        active.set(next);
    }
}

/// Tracks the section in view, recomputed on scroll, on resize and once after mount
pub fn use_active_section(config: Rc<SiteConfig>) -> Signal<ActiveSection> {
    let active = use_signal(|| ActiveSection::new(&config));

    let recompute = move || refresh(active, &config);

    use_window_listener(&["scroll", "resize"], recompute.clone());

    // Sections exist in the DOM only after the first render
    use_effect(move || recompute());

    active
}
