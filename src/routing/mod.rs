//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     add_route(template, handler)
//!     → matcher.rs (compile template into literal/parameter tokens)
//!     → router.rs (ordered route table)
//!
//! Dispatch:
//!     location.rs (hash or path mode) → current path
//!     → router.rs (first matching route, in registration order)
//!     → handler(params) | "/" fallback | not-found | inline warning
//! ```
//!
//! # Design Decisions
//! - Templates compiled once, never per dispatch
//! - No regex: tokens plus a small backtracking matcher
//! - Deterministic: same table and path always pick the same route
//! - First match wins (ordered by registration)

pub mod location;
pub mod matcher;
pub mod router;

pub use location::{Location, MemoryLocation, RoutingMode};
pub use matcher::{RouteError, RouteParams, RoutePattern};
pub use router::{Dispatch, DispatchFailure, HandlerError, HandlerResult, PathRouter};
