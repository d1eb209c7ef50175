//! Nested menu subsystem.
//!
//! # Data Flow
//! ```text
//! LinkItem[] (flat, depth as leading underscores)
//!     → builder.rs (single-pass tree construction)
//!     → MenuNode forest
//!     → render.rs (markup for the page script)
//! ```
//!
//! # Design Decisions
//! - Construction is pure and testable without a browser
//! - Rendering is a separate adapter over the finished tree
//! - Malformed depth jumps are dropped with a warning, never fatal

pub mod builder;
pub mod link;
pub mod render;

pub use builder::{MalformedLink, MenuBuild, MenuTreeBuilder};
pub use link::{count, walk, LinkItem, MenuNode};
pub use render::{HtmlMenuRenderer, MenuClasses, MenuRenderer};
