//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Resolve a path to the first matching route and run its handler
//! - Fall back to `/`, then the not-found handler, then an inline warning
//! - Contain handler failures
//!
//! # Design Decisions
//! - First match wins, tested in first-registration order
//! - Re-registering a template replaces its handler in place
//! - Immutable during dispatch (`&self`), so a built router can sit behind `Arc`
//! - Handler errors are logged and forwarded, never propagated to the caller

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::location::Location;
use super::matcher::{RouteError, RouteParams, RoutePattern};

/// Error a handler may return.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<(), HandlerError>;

type Handler = Box<dyn Fn(&RouteParams) -> HandlerResult + Send + Sync>;
type NotFoundHandler = Box<dyn Fn(&str) -> HandlerResult + Send + Sync>;
type ErrorHandler = Box<dyn Fn(&DispatchFailure<'_>) + Send + Sync>;

/// Template used as the soft fallback when nothing matches.
pub const ROOT: &str = "/";

/// What a dispatch ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Dispatch {
    /// A registered route matched and its handler ran.
    Matched { template: String, params: RouteParams },
    /// Nothing matched; the `/` route ran instead.
    Fallback,
    /// Nothing matched and no `/` route exists; the not-found handler ran.
    NotFound,
    /// Nothing matched and no fallback of any kind is configured.
    Unhandled,
    /// A handler returned an error.
    Failed { template: Option<String>, error: String },
}

/// Context passed to the error handler.
#[derive(Debug)]
pub struct DispatchFailure<'a> {
    pub path: &'a str,
    /// Template of the failing route, `None` for the not-found handler.
    pub template: Option<&'a str>,
    pub error: &'a HandlerError,
}

struct Route {
    pattern: RoutePattern,
    handler: Handler,
}

/// Path router mapping templates to handlers.
#[derive(Default)]
pub struct PathRouter {
    routes: IndexMap<String, Route>,
    not_found: Option<NotFoundHandler>,
    on_error: Option<ErrorHandler>,
}

impl fmt::Debug for PathRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathRouter")
            .field("routes", &self.routes.keys().collect::<Vec<_>>())
            .field("not_found", &self.not_found.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

impl PathRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a template such as `/products/:id`.
    ///
    /// Registering the same template text again replaces the earlier handler
    /// without moving the route in the table.
    pub fn add_route<F>(&mut self, template: &str, handler: F) -> Result<(), RouteError>
    where
        F: Fn(&RouteParams) -> HandlerResult + Send + Sync + 'static,
    {
        let pattern = RoutePattern::compile(template)?;
        let replaced = self
            .routes
            .insert(
                template.to_string(),
                Route {
                    pattern,
                    handler: Box::new(handler),
                },
            )
            .is_some();

        tracing::debug!(template = %template, replaced, "Route registered");
        Ok(())
    }

    /// Handler for paths nothing matches when no `/` route exists.
    pub fn set_not_found<F>(&mut self, handler: F)
    where
        F: Fn(&str) -> HandlerResult + Send + Sync + 'static,
    {
        self.not_found = Some(Box::new(handler));
    }

    /// Handler told about failing route handlers.
    pub fn set_error_handler<F>(&mut self, handler: F)
    where
        F: Fn(&DispatchFailure<'_>) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(handler));
    }

    /// Registered templates in table order.
    pub fn templates(&self) -> impl Iterator<Item = &RoutePattern> {
        self.routes.values().map(|r| &r.pattern)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve `path` and run the matching handler.
    pub fn dispatch(&self, path: &str) -> Dispatch {
        let path = if path.is_empty() { ROOT } else { path };

        for (template, route) in &self.routes {
            if let Some(params) = route.pattern.captures(path) {
                tracing::debug!(path = %path, template = %template, "Route matched");
                return match (route.handler)(&params) {
                    Ok(()) => Dispatch::Matched {
                        template: template.clone(),
                        params,
                    },
                    Err(e) => self.fail(path, Some(template.as_str()), e),
                };
            }
        }

        if let Some(root) = self.routes.get(ROOT) {
            tracing::debug!(path = %path, "No route matched, falling back to root");
            return match (root.handler)(&RouteParams::new()) {
                Ok(()) => Dispatch::Fallback,
                Err(e) => self.fail(path, Some(ROOT), e),
            };
        }

        if let Some(not_found) = &self.not_found {
            tracing::debug!(path = %path, "No route matched, running not-found handler");
            return match not_found(path) {
                Ok(()) => Dispatch::NotFound,
                Err(e) => self.fail(path, None, e),
            };
        }

        tracing::warn!(path = %path, "No route matched and no fallback configured");
        Dispatch::Unhandled
    }

    /// Update the location, then dispatch whatever it now shows.
    pub fn navigate_to<L>(&self, location: &mut L, path: &str) -> Dispatch
    where
        L: Location + ?Sized,
    {
        location.set_path(path);
        self.dispatch_location(&*location)
    }

    /// Dispatch the location's current path (page load, hash or history change).
    pub fn dispatch_location<L>(&self, location: &L) -> Dispatch
    where
        L: Location + ?Sized,
    {
        self.dispatch(&location.current_path())
    }

    fn fail(&self, path: &str, template: Option<&str>, error: HandlerError) -> Dispatch {
        tracing::error!(path = %path, template = ?template, error = %error, "Route handler failed");

        let failure = DispatchFailure {
            path,
            template,
            error: &error,
        };

        if let Some(on_error) = &self.on_error {
            on_error(&failure);
        } else if let (Some(not_found), Some(_)) = (&self.not_found, template) {
            if let Err(e) = not_found(path) {
                tracing::error!(path = %path, error = %e, "Not-found handler failed");
            }
        }

        Dispatch::Failed {
            template: template.map(str::to_string),
            error: error.to_string(),
        }
    }
}
