//! Portfolio Sidebar - responsive navigation for a single-page portfolio
//!
//! A Dioxus web app with two navigation presentations:
//! - a fixed sidebar on desktop widths
//! - a collapsible navbar at or below the mobile breakpoint
//!
//! The entry matching the section currently in view is highlighted, recomputed
//! on every scroll and resize. The pure pieces (`layout`, `tracker`, `view`,
//! `config`) carry no DOM dependency and are tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod layout;
pub mod notice;
pub mod pages;
pub mod tracker;
pub mod types;
pub mod view;

pub use app::{App, Route};

pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::error::{SidebarError, SidebarResult};
    pub use crate::layout::LayoutVariant;
    pub use crate::notice::{coming_soon, ComingSoonNotice};
    pub use crate::tracker::{scan_active, ActiveSection, SectionProbe};
    pub use crate::types::{ExternalEntry, NavigationEntry, SectionGeometry, SocialLink, ViewportState};
    pub use crate::view::{NavItem, SidebarView};
}
