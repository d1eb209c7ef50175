//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! menu and routing produce:
//!     → tracing events (malformed links, dispatch decisions, handler failures)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, template, depth) rather than formatted strings
//! - Library code only emits events; the binary installs the subscriber

pub mod logging;
