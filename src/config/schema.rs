//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::menu::{LinkItem, MenuClasses};
use crate::routing::RoutingMode;

/// Root configuration for a site.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Location mode and fallbacks.
    pub router: RouterConfig,

    /// Route definitions mapping templates to views.
    pub routes: Vec<RouteConfig>,

    /// Navigation menu source links.
    pub menu: MenuConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig::default(),
            router: RouterConfig::default(),
            routes: vec![
                RouteConfig::new("/", "home"),
                RouteConfig::new("/about", "about"),
                RouteConfig::new("/contact", "contact"),
                RouteConfig::new("/products/:id", "product"),
            ],
            menu: MenuConfig::default(),
        }
    }
}

/// Router configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Whether the route path lives in the URL fragment or the URL path.
    pub mode: RoutingMode,

    /// Page URL the location starts at.
    pub base_url: String,

    /// View shown when no route matches and `/` is not registered.
    pub not_found_view: Option<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mode: RoutingMode::Hash,
            base_url: "http://localhost/".to_string(),
            not_found_view: None,
        }
    }
}

/// A route template and the view it shows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path template, e.g. `/products/:id`.
    pub template: String,

    /// View identifier handed to the page.
    pub view: String,
}

impl RouteConfig {
    pub fn new(template: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            view: view.into(),
        }
    }
}

/// Menu configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Flat link list, nesting encoded as leading underscores.
    pub links: Vec<LinkItem>,

    /// Class names for the HTML renderer.
    pub classes: MenuClasses,
}

/// Log output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (off, trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Full,
        }
    }
}
