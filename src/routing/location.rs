//! Observable location state the router dispatches from.
//!
//! # Design Decisions
//! - The router owns no "current route"; the location does
//! - Hash and path modes are exclusive deployment choices, fixed per instance
//! - Setting the location never dispatches by itself; see `PathRouter::navigate_to`

use serde::{Deserialize, Serialize};
use url::Url;

/// Where the route path lives in the page URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// Route path in the fragment: `https://shop.example/#/products/9`.
    #[default]
    Hash,
    /// Route path in the URL path: `https://shop.example/products/9`.
    Path,
}

/// Location state a router can read and update.
pub trait Location {
    /// Route path currently shown.
    fn current_path(&self) -> String;

    /// Move to a new route path.
    fn set_path(&mut self, path: &str);
}

/// In-memory location backed by a full URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    url: Url,
    mode: RoutingMode,
}

impl MemoryLocation {
    pub fn new(url: &str, mode: RoutingMode) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(url)?,
            mode,
        })
    }

    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Location for MemoryLocation {
    fn current_path(&self) -> String {
        match self.mode {
            RoutingMode::Hash => match self.url.fragment() {
                Some(fragment) if !fragment.is_empty() => fragment.to_string(),
                _ => "/".to_string(),
            },
            RoutingMode::Path => self.url.path().to_string(),
        }
    }

    /// In path mode the new path is resolved against the current URL, so
    /// relative paths work and the query and fragment are dropped. A path that
    /// resolves to another scheme, host or port is refused and the location
    /// stays where it was.
    ///
    /// An empty path means "stay here" in path mode but reads as `/` in hash
    /// mode, since an empty fragment is the root.
    fn set_path(&mut self, path: &str) {
        match self.mode {
            RoutingMode::Hash => self.url.set_fragment(Some(path)),
            RoutingMode::Path => match self.url.join(path) {
                Ok(next) if same_origin(&self.url, &next) => self.url = next,
                Ok(next) => {
                    tracing::warn!(
                        path = %path,
                        resolved = %next,
                        "Refusing to navigate to another origin"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path,
                        error = %e,
                        "Cannot resolve path against location, setting it verbatim"
                    );
                    self.url.set_path(path);
                }
            },
        }
    }
}

fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}
