//! Portfolio page structure: navigation entries and section labels.
//!
//! Only translation keys live here; the strings themselves come from the
//! locale files.

use folio_i18n::Translator;

/// Key of the brand shown at the start of the navigation bar
pub const BRAND_KEY: &str = "navigation.brand";

/// One entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Section anchor, or page path segment when `is_page` is set
    pub id: &'static str,
    /// Translation key of the label
    pub label_key: &'static str,
    /// Links to a separate page instead of scrolling to a section
    pub is_page: bool,
}

impl NavItem {
    const fn section(id: &'static str, label_key: &'static str) -> Self {
        Self {
            id,
            label_key,
            is_page: false,
        }
    }

    const fn page(id: &'static str, label_key: &'static str) -> Self {
        Self {
            id,
            label_key,
            is_page: true,
        }
    }

    /// Link target: `/<id>` for pages, `#<id>` for sections
    pub fn href(&self) -> String {
        if self.is_page {
            format!("/{}", self.id)
        } else {
            format!("#{}", self.id)
        }
    }
}

const NAV_ITEMS: [NavItem; 6] = [
    NavItem::section("overview", "navigation.links.overview"),
    NavItem::section("stack", "navigation.links.stack"),
    NavItem::section("experience", "navigation.links.experience"),
    NavItem::page("projects", "navigation.links.projects"),
    NavItem::section("certifications", "navigation.links.certifications"),
    NavItem::section("contact", "navigation.links.contact"),
];

/// Navigation entries in display order
pub fn navigation() -> &'static [NavItem] {
    &NAV_ITEMS
}

/// A page section and the labels it renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Section anchor
    pub id: &'static str,
    /// Translation keys of the section's fixed labels
    pub label_keys: &'static [&'static str],
}

const SECTIONS: [Section; 2] = [
    Section {
        id: "experience",
        label_keys: &[
            "experience.tagText",
            "experience.heading",
            "experience.description",
            "experience.keyAchievementsTitle",
            "experience.techTitle",
            "experience.stats.years",
            "experience.stats.projects",
            "experience.stats.success",
        ],
    },
    Section {
        id: "projects",
        label_keys: &[
            "projects.tagText",
            "projects.heading",
            "projects.description",
            "projects.ctaText",
            "projects.viewRepository",
            "projects.liveDemo",
            "projects.featuresTitle",
            "projects.deliverablesTitle",
            "projects.techTitle",
        ],
    },
];

/// Sections with fixed labels, in page order
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

/// Every key the site renders
pub fn required_keys() -> impl Iterator<Item = &'static str> {
    std::iter::once(BRAND_KEY)
        .chain(navigation().iter().map(|item| item.label_key))
        .chain(sections().iter().flat_map(|section| section.label_keys.iter().copied()))
}

/// A navigation entry with its label resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Display text
    pub label: String,
    /// Link target
    pub href: String,
}

/// Resolve the brand and navigation labels in the active locale
pub fn render_navigation(translator: &Translator) -> (String, Vec<NavLink>) {
    let brand = translator.t(BRAND_KEY).to_string();
    let links = navigation()
        .iter()
        .map(|item| NavLink {
            label: translator.t(item.label_key).to_string(),
            href: item.href(),
        })
        .collect();
    (brand, links)
}

/// Resolve one section's labels in the active locale
pub fn render_section(translator: &Translator, section: &Section) -> Vec<String> {
    section
        .label_keys
        .iter()
        .map(|key| translator.t(key).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs() {
        let hrefs: Vec<String> = navigation().iter().map(NavItem::href).collect();
        assert_eq!(
            hrefs,
            vec!["#overview", "#stack", "#experience", "/projects", "#certifications", "#contact"]
        );
    }

    #[test]
    fn test_label_keys_follow_ids() {
        for item in navigation() {
            assert_eq!(item.label_key, format!("navigation.links.{}", item.id));
        }
    }

    #[test]
    fn test_required_keys() {
        let keys: Vec<&str> = required_keys().collect();
        assert_eq!(keys.len(), 1 + 6 + 8 + 9);
        assert_eq!(keys[0], BRAND_KEY);
        assert!(keys.contains(&"projects.liveDemo"));
    }
}
