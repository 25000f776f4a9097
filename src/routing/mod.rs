//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered rule scan)
//!     → matcher.rs (method check, path split)
//!     → pattern.rs (segment compare, capture binding)
//!     → Return: RouteMatch { handler, params } or NotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[] (table.rs defaults or config file)
//!     → Parse patterns into Literal/Capture segments
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod matcher;
pub mod pattern;
pub mod router;
pub mod table;

pub use pattern::{Params, PathPattern, PatternError, Segment};
pub use router::{BuildError, RouteError, RouteMatch, RouteRule, Router};
