//! Configuration for the Hortus server.
//!
//! Loads from a TOML file resolved in priority order, with built-in
//! defaults underneath. The Notion token can additionally come from the
//! `HORTUS_NOTION_TOKEN` environment variable so it stays out of the file.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `HORTUS_CONFIG` environment variable
//! 3. XDG default: `~/.config/hortus/config.toml`
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use hortus_core::FooterLink;
use hortus_web::SiteConfig;

use crate::error::Result;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Hortus server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HortusConfig {
    /// Site presentation settings.
    pub site: SiteSection,

    /// Listener settings.
    pub server: ServerSection,

    /// Notion credentials and identifiers.
    pub notion: NotionSection,
}

/// Site presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site name used in titles and metadata.
    pub name: String,

    /// Description used when a page has none.
    pub description: String,

    /// Canonical base URL, without a trailing slash.
    pub base_url: String,

    /// Locale posts are filtered by.
    pub locale: String,

    /// Twitter handle for card metadata.
    pub twitter: String,

    /// Author name shown on posts.
    pub author: String,

    /// Author avatar path shown on posts.
    pub author_image: String,

    /// Footer links used when a page's footer section yields none.
    pub footer_links: Vec<FooterLinkEntry>,
}

/// One configured footer link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLinkEntry {
    /// Link label.
    pub name: String,
    /// Link target.
    pub url: String,
}

/// Listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Host address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

/// Notion credentials and identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionSection {
    /// Integration token (prefer `HORTUS_NOTION_TOKEN` over the file).
    pub api_token: String,

    /// Database holding the posts.
    pub post_database_id: String,

    /// Page holding the home content.
    pub home_page_id: String,

    /// API endpoint override, mostly for tests.
    pub api_base_url: Option<String>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for SiteSection {
    fn default() -> Self {
        let site = SiteConfig::default();
        Self {
            name: site.site_name,
            description: site.site_description,
            base_url: site.base_url,
            locale: site.locale,
            twitter: site.twitter_site,
            author: "Montek".to_string(),
            author_image: "/images/montek.png".to_string(),
            footer_links: site
                .default_footer_links
                .into_iter()
                .map(|l| FooterLinkEntry {
                    name: l.name,
                    url: l.url,
                })
                .collect(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl HortusConfig {
    /// Load configuration from file and defaults.
    ///
    /// A missing file is not an error; the defaults apply. A present but
    /// malformed file is an error.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(config_path) {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)?;
                toml::from_str(&raw)?
            }
            _ => Self::default(),
        };

        if let Ok(token) = std::env::var("HORTUS_NOTION_TOKEN") {
            config.notion.api_token = token;
        }

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("HORTUS_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hortus").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// A copy with the Notion token replaced, for printing.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.notion.api_token.is_empty() {
            copy.notion.api_token = "<redacted>".to_string();
        }
        copy
    }

    /// Build the web layer's site settings from this configuration.
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            site_name: self.site.name.clone(),
            site_description: self.site.description.clone(),
            base_url: self.site.base_url.trim_end_matches('/').to_string(),
            locale: self.site.locale.clone(),
            twitter_site: self.site.twitter.clone(),
            default_footer_links: self
                .site
                .footer_links
                .iter()
                .map(|l| FooterLink::new(&l.name, &l.url))
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
