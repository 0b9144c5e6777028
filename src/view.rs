//! Render model consumed by the navigation components

use crate::config::SiteConfig;
use crate::layout::LayoutVariant;
use crate::tracker::ActiveSection;
use crate::types::{ExternalEntry, NavigationEntry, SocialLink};

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub entry: NavigationEntry,
    pub href: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarView {
    pub variant: LayoutVariant,
    pub brand: String,
    pub items: Vec<NavItem>,
    pub external: Vec<ExternalEntry>,
    pub social: Vec<SocialLink>,
}

impl SidebarView {
    pub fn build(config: &SiteConfig, variant: LayoutVariant, active: &ActiveSection) -> Self {
        let items = config
            .sections()
            .iter()
            .map(|entry| NavItem {
                href: entry.href(),
                is_active: active.is_active(&entry.id),
                entry: entry.clone(),
            })
            .collect();

        Self {
            variant,
            brand: config.brand().to_string(),
            items,
            external: config.external_links().to_vec(),
            social: config.social_links().to_vec(),
        }
    }

    pub fn active_item(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_item_active() {
        let config = SiteConfig::embedded().unwrap();
        let mut active = ActiveSection::new(&config);
        active.select(config.sections(), "publications").unwrap();

        let view = SidebarView::build(&config, LayoutVariant::Fixed, &active);
        assert_eq!(view.items.iter().filter(|item| item.is_active).count(), 1);
        assert_eq!(view.active_item().unwrap().entry.id, "publications");
        assert_eq!(view.active_item().unwrap().href, "/#publications");
    }

    #[test]
    fn test_view_carries_config_lists() {
        let config = SiteConfig::embedded().unwrap();
        let active = ActiveSection::new(&config);

        let view = SidebarView::build(&config, LayoutVariant::Compact, &active);
        assert_eq!(view.variant, LayoutVariant::Compact);
        assert_eq!(view.brand, config.brand());
        assert_eq!(view.items.len(), config.sections().len());
        assert_eq!(view.external, config.external_links());
        assert_eq!(view.social, config.social_links());
    }
}
