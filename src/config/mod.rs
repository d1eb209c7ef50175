//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → routes and menu links built once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; routes and menus are built from it once
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogFormat, MenuConfig, ObservabilityConfig, RouteConfig, RouterConfig, SiteConfig};
pub use validation::ValidationError;
