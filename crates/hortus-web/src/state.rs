//! Shared application state.

use std::sync::Arc;

use hortus_core::{ContentSource, FooterLink};

use crate::error::Result;
use crate::render;

/// Site-wide presentation settings.
///
/// These cover everything about the site that is not content: naming,
/// canonical URLs, the locale used when querying the content source, and
/// the footer links shown when a page carries no footer section of its own.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site name used in titles and OpenGraph metadata.
    pub site_name: String,
    /// Description used when a page has none.
    pub site_description: String,
    /// Canonical base URL, without a trailing slash.
    pub base_url: String,
    /// Locale posts are filtered by (a select option in the database).
    pub locale: String,
    /// Twitter handle for card metadata.
    pub twitter_site: String,
    /// Footer links used when a page's footer section yields none.
    pub default_footer_links: Vec<FooterLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Montek".to_string(),
            site_description: "Montek Kundan's personal blog.".to_string(),
            base_url: "https://montek.dev".to_string(),
            locale: "en".to_string(),
            twitter_site: "@montekkundan".to_string(),
            default_footer_links: vec![
                FooterLink::new("@montekkundan", "https://x.com/montekkundan"),
                FooterLink::new("youtube", "https://www.youtube.com/@montekkundan"),
                FooterLink::new("linkedin", "https://www.linkedin.com/in/montekkundan"),
                FooterLink::new("github", "https://github.com/montekkundan"),
            ],
        }
    }
}

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where pages and posts come from.
    pub source: Arc<dyn ContentSource>,
    /// Site-wide settings.
    pub site: Arc<SiteConfig>,
    /// Compiled templates.
    pub templates: Arc<tera::Tera>,
}

impl AppState {
    /// Build state from a content source and site settings.
    pub fn new(source: Arc<dyn ContentSource>, site: SiteConfig) -> Result<Self> {
        Ok(Self {
            source,
            site: Arc::new(site),
            templates: Arc::new(render::templates()?),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_footer_links() {
        let site = SiteConfig::default();
        let names: Vec<&str> = site
            .default_footer_links
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, ["@montekkundan", "youtube", "linkedin", "github"]);
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!SiteConfig::default().base_url.ends_with('/'));
    }
}
