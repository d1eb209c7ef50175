//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route templates compile and are unique
//! - Check the base URL parses and links have targets
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::config::schema::SiteConfig;
use crate::routing::{RouteError, RoutePattern};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route template {template:?} must start with '/'")]
    TemplateNotAbsolute { template: String },

    #[error(transparent)]
    InvalidTemplate(#[from] RouteError),

    #[error("route template {template:?} is declared more than once")]
    DuplicateTemplate { template: String },

    #[error("route {template:?} has an empty view")]
    EmptyView { template: String },

    #[error("not_found_view must not be empty")]
    EmptyNotFoundView,

    #[error("base_url {url:?} is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("menu link {name:?} at position {index} has an empty target")]
    EmptyLinkTarget { index: usize, name: String },

    #[error("unknown log level {level:?}")]
    UnknownLogLevel { level: String },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for route in &config.routes {
        if !route.template.starts_with('/') {
            errors.push(ValidationError::TemplateNotAbsolute {
                template: route.template.clone(),
            });
        }
        if let Err(e) = RoutePattern::compile(route.template.as_str()) {
            errors.push(e.into());
        }
        if !seen.insert(route.template.as_str()) {
            errors.push(ValidationError::DuplicateTemplate {
                template: route.template.clone(),
            });
        }
        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView {
                template: route.template.clone(),
            });
        }
    }

    if config
        .router
        .not_found_view
        .as_deref()
        .is_some_and(|v| v.trim().is_empty())
    {
        errors.push(ValidationError::EmptyNotFoundView);
    }

    if let Err(e) = Url::parse(&config.router.base_url) {
        errors.push(ValidationError::InvalidBaseUrl {
            url: config.router.base_url.clone(),
            reason: e.to_string(),
        });
    }

    for (index, link) in config.menu.links.iter().enumerate() {
        if link.target.trim().is_empty() {
            errors.push(ValidationError::EmptyLinkTarget {
                index,
                name: link.name.clone(),
            });
        }
    }

    if LevelFilter::from_str(&config.observability.log_level).is_err() {
        errors.push(ValidationError::UnknownLogLevel {
            level: config.observability.log_level.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;
    use crate::menu::LinkItem;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&SiteConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = SiteConfig::default();
        config.routes = vec![
            RouteConfig::new("about", "about"),
            RouteConfig::new("/p/:id/:id", "product"),
            RouteConfig::new("/", "home"),
            RouteConfig::new("/", " "),
        ];
        config.router.base_url = "nowhere".into();
        config.menu.links = vec![LinkItem::new("Home", "")];
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(
            errors[0],
            ValidationError::TemplateNotAbsolute {
                template: "about".into()
            }
        );
        assert!(matches!(errors[1], ValidationError::InvalidTemplate(_)));
        assert!(errors.contains(&ValidationError::DuplicateTemplate { template: "/".into() }));
        assert!(errors.contains(&ValidationError::EmptyView { template: "/".into() }));
        assert!(errors.contains(&ValidationError::EmptyLinkTarget {
            index: 0,
            name: "Home".into()
        }));
        assert!(errors.contains(&ValidationError::UnknownLogLevel { level: "loud".into() }));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_empty_not_found_view() {
        let mut config = SiteConfig::default();
        config.router.not_found_view = Some(String::new());
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::EmptyNotFoundView])
        );
    }

    #[test]
    fn test_off_log_level_accepted() {
        let mut config = SiteConfig::default();
        config.observability.log_level = "off".into();
        assert!(validate_config(&config).is_ok());
    }
}
