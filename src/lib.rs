//! Nested navigation menus and client-side path routing.
//!
//! - [`menu`] turns flat, underscore-indented link lists into menu trees
//! - [`routing`] maps `/products/:id` style templates to handlers
//! - [`site`] wires both up from a [`config::SiteConfig`]

pub mod config;
pub mod menu;
pub mod observability;
pub mod routing;
pub mod site;

pub use config::schema::SiteConfig;
pub use menu::{LinkItem, MenuNode, MenuTreeBuilder};
pub use routing::{Dispatch, PathRouter};
pub use site::Site;
