use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::hooks::use_active_section::use_active_section;
use crate::hooks::use_viewport::use_viewport;
use crate::layout::LayoutVariant;
use crate::tracker::ActiveSection;
use crate::types::ViewportState;
use crate::view::SidebarView;

#[derive(Clone)]
pub struct SidebarState {
    pub config: Rc<SiteConfig>,
    pub viewport: Signal<ViewportState>,
    pub active: Signal<ActiveSection>,
}

pub fn use_sidebar_state(config: Rc<SiteConfig>) -> SidebarState {
    let viewport = use_viewport(config.mobile_breakpoint());
    let active = use_active_section(config.clone());

    SidebarState {
        config,
        viewport,
        active,
    }
}

impl SidebarState {
    pub fn layout(&self) -> LayoutVariant {
        self.viewport.read().layout()
    }

    /// Highlight the clicked entry right away; the next scroll recomputes it
    pub fn select_section(&mut self, id: &str) {
        // Work on a copy so reselecting the active entry does not re-render
        let mut next = self.active.peek().clone();
        match next.select(self.config.sections(), id) {
            Ok(true) => self.active.set(next),
            Ok(false) => {}
            Err(e) => tracing::warn!("{}", e),
        }
    }

    pub fn view(&self) -> SidebarView {
        let active = self.active.read();
        SidebarView::build(&self.config, self.layout(), &active)
    }
}
