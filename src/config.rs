//! Site configuration
//!
//! The navigation entries, brand and tracking knobs live in `assets/site.json`,
//! which is embedded into the binary at compile time.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{SidebarError, SidebarResult};
use crate::types::{ExternalEntry, NavigationEntry, SocialLink};

static SITE_JSON: &str = include_str!("../assets/site.json");

/// Widths at or below this many pixels get the compact layout
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Sections other than the last must show more than this share of their height
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.3;

fn default_mobile_breakpoint() -> f64 {
    DEFAULT_MOBILE_BREAKPOINT
}

fn default_visibility_threshold() -> f64 {
    DEFAULT_VISIBILITY_THRESHOLD
}

/// Configuration document as written in `site.json`, before validation
#[derive(Deserialize)]
struct SiteConfigFile {
    brand: String,
    #[serde(default = "default_mobile_breakpoint")]
    mobile_breakpoint: f64,
    #[serde(default = "default_visibility_threshold")]
    visibility_threshold: f64,
    sections: Vec<NavigationEntry>,
    #[serde(default)]
    external_links: Vec<ExternalEntry>,
    #[serde(default)]
    social_links: Vec<SocialLink>,
}

impl SiteConfigFile {
    fn validate(&self) -> SidebarResult<()> {
        if self.sections.is_empty() {
            return Err(SidebarError::InvalidConfig(
                "at least one navigation section is required".to_string(),
            ));
        }

        if !(self.mobile_breakpoint > 0.0) {
            return Err(SidebarError::InvalidConfig(format!(
                "mobile_breakpoint must be positive, got {}",
                self.mobile_breakpoint
            )));
        }

        if !(self.visibility_threshold > 0.0 && self.visibility_threshold < 1.0) {
            return Err(SidebarError::InvalidConfig(format!(
                "visibility_threshold must lie in (0, 1), got {}",
                self.visibility_threshold
            )));
        }

        // Section ids are DOM ids, external ids are list keys; both share one namespace
        let mut seen = HashSet::new();
        let ids = self
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .chain(self.external_links.iter().map(|e| e.id.as_str()));
        for id in ids {
            if id.trim().is_empty() {
                return Err(SidebarError::InvalidConfig("entry ids must not be empty".to_string()));
            }
            if !seen.insert(id) {
                return Err(SidebarError::InvalidConfig(format!("duplicate entry id '{id}'")));
            }
        }

        let titles = self
            .sections
            .iter()
            .map(|s| (s.id.as_str(), s.title.as_str()))
            .chain(self.external_links.iter().map(|e| (e.id.as_str(), e.title.as_str())));
        for (id, title) in titles {
            if title.trim().is_empty() {
                return Err(SidebarError::InvalidConfig(format!("entry '{id}' has no title")));
            }
        }

        Ok(())
    }
}

/// Validated site configuration. Only obtainable through validation, so the
/// section list is never empty.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "SiteConfigFile")]
pub struct SiteConfig {
    brand: String,
    mobile_breakpoint: f64,
    visibility_threshold: f64,
    sections: Vec<NavigationEntry>,
    external_links: Vec<ExternalEntry>,
    social_links: Vec<SocialLink>,
}

impl TryFrom<SiteConfigFile> for SiteConfig {
    type Error = SidebarError;

    fn try_from(file: SiteConfigFile) -> SidebarResult<Self> {
        file.validate()?;
        Ok(Self {
            brand: file.brand,
            mobile_breakpoint: file.mobile_breakpoint,
            visibility_threshold: file.visibility_threshold,
            sections: file.sections,
            external_links: file.external_links,
            social_links: file.social_links,
        })
    }
}

impl SiteConfig {
    /// Load the configuration bundled with the binary
    pub fn embedded() -> SidebarResult<Self> {
        Self::from_json(SITE_JSON)
    }

    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> SidebarResult<Self> {
        let file: SiteConfigFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn mobile_breakpoint(&self) -> f64 {
        self.mobile_breakpoint
    }

    pub fn visibility_threshold(&self) -> f64 {
        self.visibility_threshold
    }

    pub fn sections(&self) -> &[NavigationEntry] {
        &self.sections
    }

    pub fn external_links(&self) -> &[ExternalEntry] {
        &self.external_links
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    /// The entry highlighted before any scroll event fires
    pub fn first_section(&self) -> &NavigationEntry {
        // Non-empty: every SiteConfig went through SiteConfigFile::validate
        &self.sections[0]
    }

    pub fn section(&self, id: &str) -> Option<&NavigationEntry> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(sections: &str) -> String {
        format!(r#"{{ "brand": "Test", "sections": {sections} }}"#)
    }

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.brand, "Argha Chakraborty");
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.visibility_threshold, 0.3);
        assert_eq!(config.first_section().id, "about");
        assert_eq!(config.sections.last().unwrap().id, "schedule");
        assert_eq!(config.external_links.len(), 3);
        assert_eq!(config.social_links.len(), 3);
    }

    #[test]
    fn test_defaults_apply() {
        let json = minimal(r#"[{ "id": "about", "title": "About", "icon": "bi-person" }]"#);
        let config = SiteConfig::from_json(&json).unwrap();
        assert_eq!(config.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT);
        assert_eq!(config.visibility_threshold, DEFAULT_VISIBILITY_THRESHOLD);
        assert!(config.external_links.is_empty());
        assert!(config.social_links.is_empty());
    }

    #[test]
    fn test_empty_sections_rejected() {
        let result = SiteConfig::from_json(&minimal("[]"));
        assert!(matches!(result, Err(SidebarError::InvalidConfig(_))));
    }

    #[test]
    fn test_direct_deserialize_validates() {
        // Going through serde directly must not yield a config without sections
        let result = serde_json::from_str::<SiteConfig>(r#"{ "brand": "x", "sections": [] }"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("at least one navigation section is required"));
    }

    #[test]
    fn test_direct_deserialize_accepts_valid_config() {
        let json = minimal(r#"[{ "id": "about", "title": "About", "icon": "bi-person" }]"#);
        let config: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.first_section().id, "about");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = minimal(
            r#"[
                { "id": "about", "title": "About", "icon": "bi-person" },
                { "id": "about", "title": "Again", "icon": "bi-person" }
            ]"#,
        );
        let err = SiteConfig::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate entry id 'about'"));
    }

    #[test]
    fn test_external_id_clash_rejected() {
        let json = r##"{
            "brand": "Test",
            "sections": [{ "id": "blog", "title": "Blog", "icon": "bi-rss" }],
            "external_links": [{ "id": "blog", "title": "Blog", "icon": "bi-rss", "url": "#" }]
        }"##;
        assert!(SiteConfig::from_json(json).is_err());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let json = r#"{
            "brand": "Test",
            "visibility_threshold": 1.5,
            "sections": [{ "id": "about", "title": "About", "icon": "bi-person" }]
        }"#;
        assert!(matches!(
            SiteConfig::from_json(json),
            Err(SidebarError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(SidebarError::Config(_))
        ));
    }

    #[test]
    fn test_section_lookup() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.section("projects").unwrap().title, "Projects");
        assert!(config.section("hobbies").is_none());
    }
}
