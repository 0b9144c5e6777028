use dioxus::prelude::*;

use crate::dom;
use crate::hooks::use_window_listener::use_window_listener;
use crate::types::ViewportState;

fn current_width(breakpoint: f64) -> f64 {
    // Without a measurable window fall back to the desktop layout
    dom::window_width().unwrap_or(breakpoint + 1.0)
}

pub fn use_viewport(breakpoint: f64) -> Signal<ViewportState> {
    let mut viewport = use_signal(|| ViewportState::from_width(current_width(breakpoint), breakpoint));

    use_window_listener(&["resize"], move || {
        // Only re-render when crossing the breakpoint
        let next = viewport.peek().after_resize(current_width(breakpoint), breakpoint);
        if let Some(next) = next {
            tracing::debug!("Viewport is_mobile -> {}", next.is_mobile);
            viewport.set(next);
        }
    });

    viewport
}
