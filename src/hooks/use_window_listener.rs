use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom::WindowListener;
use crate::error::SidebarResult;

/// Attaches one listener per event. Events that fail to attach are logged and skipped.
fn attach_all<L>(
    events: &[&'static str],
    mut attach: impl FnMut(&'static str) -> SidebarResult<L>,
) -> Vec<L> {
    events
        .iter()
        .copied()
        .filter_map(|event| match attach(event) {
            Ok(listener) => Some(listener),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .collect()
}

/// Runs `handler` on each of the given window events for the lifetime of the
/// calling component. Listeners are attached once on mount and removed on unmount.
pub fn use_window_listener(events: &'static [&'static str], handler: impl FnMut() + Clone + 'static) {
    // use_hook runs its initializer on the first render only
    let listeners = use_hook(|| {
        let attached = attach_all(events, |event| {
            let mut handler = handler.clone();
            WindowListener::attach(event, move |_| handler())
        });
        Rc::new(RefCell::new(attached))
    });

    use_drop(move || {
        // Dropping the guards removes the listeners
        listeners.borrow_mut().clear();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SidebarError;

    #[test]
    fn test_each_event_attached_once() {
        let mut calls = Vec::new();
        let attached = attach_all(&["scroll", "resize"], |event| {
            calls.push(event);
            Ok(event)
        });
        assert_eq!(calls, vec!["scroll", "resize"]);
        assert_eq!(attached, vec!["scroll", "resize"]);
    }

    #[test]
    fn test_failed_attach_is_skipped() {
        let attached = attach_all(&["scroll", "resize"], |event| {
            if event == "scroll" {
                Err(SidebarError::Listener {
                    event,
                    reason: "denied".to_string(),
                })
            } else {
                Ok(event)
            }
        });
        assert_eq!(attached, vec!["resize"]);
    }
}
