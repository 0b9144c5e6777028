//! Scroll position to active navigation entry
//!
//! The tracker asks a [`SectionProbe`] for the on-screen geometry of every
//! section and picks the lowest one that is sufficiently visible:
//! - sections are scanned from the last declared to the first
//! - the last section wins on any overlap with the viewport
//! - every other section needs a visible fraction above the threshold
//! - when nothing qualifies the previous active id is kept

use crate::config::SiteConfig;
use crate::error::{SidebarError, SidebarResult};
use crate::types::{NavigationEntry, SectionGeometry};

/// Read access to section geometry, backed by the DOM in the browser
pub trait SectionProbe {
    fn viewport_height(&self) -> f64;

    /// `None` when no element with this id exists
    fn geometry(&self, id: &str) -> Option<SectionGeometry>;
}

/// Returns the id of the section that should become active, if any qualifies
pub fn scan_active<'a, P: SectionProbe + ?Sized>(
    sections: &'a [NavigationEntry],
    probe: &P,
    threshold: f64,
) -> Option<&'a str> {
    let viewport_height = probe.viewport_height();
    let last = sections.len().checked_sub(1)?;

    sections
        .iter()
        .enumerate()
        .rev()
        .find(|(index, section)| {
            let Some(geometry) = probe.geometry(&section.id) else {
                return false;
            };
            if *index == last {
                geometry.visible_height(viewport_height) > 0.0
            } else {
                geometry.visible_fraction(viewport_height) > threshold
            }
        })
        .map(|(_, section)| section.id.as_str())
}

/// The currently highlighted navigation entry
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSection {
    active_id: String,
}

impl ActiveSection {
    /// Starts on the first configured section
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            active_id: config.first_section().id.clone(),
        }
    }

    /// Starts on the first entry of an arbitrary list, `None` when it is empty
    pub fn first_of(sections: &[NavigationEntry]) -> Option<Self> {
        sections.first().map(|entry| Self {
            active_id: entry.id.clone(),
        })
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id == id
    }

    /// Recompute from current geometry. Returns true when the active id changed.
    pub fn track<P: SectionProbe + ?Sized>(
        &mut self,
        sections: &[NavigationEntry],
        probe: &P,
        threshold: f64,
    ) -> bool {
        match scan_active(sections, probe, threshold) {
            Some(id) if id != self.active_id => {
                tracing::debug!("Active section {} -> {}", self.active_id, id);
                self.active_id = id.to_string();
                true
            }
            _ => false,
        }
    }

    /// Direct selection from a navigation click, independent of geometry.
    /// Returns true when the active id changed.
    pub fn select(&mut self, sections: &[NavigationEntry], id: &str) -> SidebarResult<bool> {
        if !sections.iter().any(|s| s.id == id) {
            return Err(SidebarError::UnknownSection(id.to_string()));
        }
        if self.active_id == id {
            return Ok(false);
        }
        self.active_id = id.to_string();
        Ok(true)
    }
}
