use serde::Deserialize;

/// A main navigation entry. `id` doubles as the DOM id of the page section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavigationEntry {
    pub id: String,
    pub title: String,
    pub icon: String, // Bootstrap Icons class, e.g. "bi-person"
}

impl NavigationEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
        }
    }

    /// In-page anchor target for this entry
    pub fn href(&self) -> String {
        format!("/#{}", self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExternalEntry {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub url: String, // placeholder until the pages exist
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub is_mobile: bool,
}

/// Bounding box of a section relative to the top of the viewport,
/// in the same coordinates `getBoundingClientRect` reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub bottom: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Height of the part of the section inside `[0, viewport_height]`
    pub fn visible_height(&self, viewport_height: f64) -> f64 {
        let top = self.top.max(0.0);
        let bottom = self.bottom.min(viewport_height);
        (bottom - top).max(0.0)
    }

    /// Share of the section's own height that is on screen, in `[0, 1]`
    pub fn visible_fraction(&self, viewport_height: f64) -> f64 {
        let height = self.height();
        if height <= 0.0 {
            return 0.0;
        }
        self.visible_height(viewport_height) / height
    }
}
