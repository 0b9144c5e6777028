//! Browser bindings: section geometry, window listeners and alerts

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Window};

use crate::error::{SidebarError, SidebarResult};
use crate::notice::ComingSoonNotice;
use crate::tracker::SectionProbe;
use crate::types::SectionGeometry;

/// Snapshot of the live document used to measure sections
pub struct DomProbe {
    document: Document,
    viewport_height: f64,
}

impl DomProbe {
    pub fn current() -> SidebarResult<Self> {
        let window = web_sys::window().ok_or(SidebarError::NoWindow)?;
        let document = window.document().ok_or(SidebarError::NoWindow)?;
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        Ok(Self {
            document,
            viewport_height,
        })
    }
}

impl SectionProbe for DomProbe {
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn geometry(&self, id: &str) -> Option<SectionGeometry> {
        let rect = self.document.get_element_by_id(id)?.get_bounding_client_rect();
        Some(SectionGeometry::new(rect.top(), rect.bottom()))
    }
}

pub fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Shows the notice as a browser alert. Failures are logged only.
pub fn show_notice(notice: &ComingSoonNotice) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("No window to show notice for {}", notice.title);
        return;
    };
    if let Err(e) = window.alert_with_message(&notice.message) {
        tracing::warn!("Failed to show notice for {}: {:?}", notice.title, e);
    }
}

/// A window event listener that is removed when dropped
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn attach(event: &'static str, handler: impl FnMut(Event) + 'static) -> SidebarResult<Self> {
        let window = web_sys::window().ok_or(SidebarError::NoWindow)?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| SidebarError::Listener {
                event,
                reason: format!("{:?}", e),
            })?;

        tracing::debug!("Attached window '{}' listener", event);
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        match removed {
            Ok(()) => tracing::debug!("Removed window '{}' listener", self.event),
            Err(e) => tracing::warn!("Failed to remove '{}' listener: {:?}", self.event, e),
        }
    }
}
