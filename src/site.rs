//! Site assembly.
//!
//! # Responsibilities
//! - Build the path router from configured routes
//! - Build the navigation menu from configured links
//! - Hand matched views to a caller-supplied sink
//!
//! Everything is constructed once here and passed by reference; there is no
//! global router or menu.

use std::sync::Arc;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::menu::{HtmlMenuRenderer, MenuBuild, MenuRenderer, MenuTreeBuilder};
use crate::routing::{HandlerResult, MemoryLocation, PathRouter, RouteError, RouteParams};

/// Parameter name under which the not-found view receives the missing path.
pub const NOT_FOUND_PATH_PARAM: &str = "path";

/// Receives the view a dispatch decided to show.
pub trait ViewSink: Send + Sync {
    fn show(&self, view: &View<'_>) -> HandlerResult;
}

/// A view selected by the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View<'a> {
    pub view: &'a str,
    pub params: &'a RouteParams,
}

/// Router and menu built from one configuration.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    router: PathRouter,
    menu: MenuBuild,
}

impl Site {
    /// Create a new site from a validated configuration.
    pub fn new(config: SiteConfig, sink: Arc<dyn ViewSink>) -> Result<Self, RouteError> {
        let mut router = PathRouter::new();

        for route in &config.routes {
            let sink = sink.clone();
            let view = route.view.clone();
            router.add_route(&route.template, move |params| {
                sink.show(&View {
                    view: &view,
                    params,
                })
            })?;
        }

        if let Some(view) = config.router.not_found_view.clone() {
            let sink = sink.clone();
            router.set_not_found(move |path| {
                let params: RouteParams = [(NOT_FOUND_PATH_PARAM, path)].into_iter().collect();
                sink.show(&View {
                    view: &view,
                    params: &params,
                })
            });
        }

        let menu = MenuTreeBuilder::new().build_report(&config.menu.links);

        tracing::info!(
            routes = router.len(),
            menu_nodes = crate::menu::count(&menu.roots),
            skipped_links = menu.skipped.len(),
            mode = ?config.router.mode,
            "Site initialized"
        );

        Ok(Self {
            config,
            router,
            menu,
        })
    }

    pub fn router(&self) -> &PathRouter {
        &self.router
    }

    pub fn menu(&self) -> &MenuBuild {
        &self.menu
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Location at the configured base URL, in the configured mode.
    pub fn location(&self) -> Result<MemoryLocation, url::ParseError> {
        MemoryLocation::new(&self.config.router.base_url, self.config.router.mode)
    }

    /// Menu as HTML using the configured class names.
    pub fn render_menu(&self) -> String {
        HtmlMenuRenderer::new(self.config.menu.classes.clone()).render(&self.menu.roots)
    }
}
