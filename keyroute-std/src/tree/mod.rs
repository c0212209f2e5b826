//! # Route Tree
//!
//! - [`Router`] - the root: root prefix, top-level routes, match observer
//! - [`Route`] - a node: matcher, optional handler, ordered children
//!
//! # Matching
//!
//! ```text
//! exec("root.building.twostory")
//!     → strip root prefix "root."          (once, at the top)
//!     → top-level routes, in order
//!         → Prefix("building.")            remainder "twostory"
//!             → children, in order
//!                 → Literal("twostory")    remainder ""  → has handler → match
//!     → observer(original path, route)
//!     → handler(RoutedContext, request)
//! ```
//!
//! When no child claims a remainder, the parent route ends the match
//! itself if it has a handler.

pub mod route;
pub mod router;

pub use route::Route;
pub use router::{Router, RouterBuilder};
