//! # keyroute - Hierarchical String-Keyed Dispatch
//!
//! `keyroute` routes opaque, delimiter-segmented keys such as
//! `"building.onestory.unit42"` through a tree of registered routes and
//! invokes the handler bound to the most specific matching node. It is a
//! routing layer with no transport of its own: an HTTP handler, a message
//! consumer or a CLI supplies the path and receives the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyroute::prelude::*;
//!
//! let router: Router<(), &'static str> = Router::new();
//!
//! router.simple_route("building").handler_fn(|_, _| Ok("LIST_ALL_BUILDING"));
//!
//! let building = router.prefix_route("building.");
//! building
//!     .simple_sub_route("twostory")
//!     .handler_fn(|_, _| Ok("TWO_STORY_BUILDING"));
//!
//! assert_eq!(router.exec_path("building", ()).unwrap(), "LIST_ALL_BUILDING");
//! assert_eq!(router.exec_path("building.twostory", ()).unwrap(), "TWO_STORY_BUILDING");
//! assert!(router.exec_path("building.unknown", ()).unwrap_err().is_not_found());
//! ```
//!
//! ## Features
//!
//! - `tracing` - [`LoggingObserver`](observers::LoggingObserver) and
//!   [`Traced`](handlers::Traced) emit through `tracing`
//! - `tower` - `tower::RouterService` exposes a router as a `tower::Service`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use keyroute_core::{
    // Context
    Ambient,
    AmbientError,
    // Error types
    BoxError,
    BoxMatcher,
    CancelHandle,
    // Handler
    Handler,
    HandlerFn,
    // Matcher
    Matcher,
    RegistrationError,
    RouteError,
    RoutedContext,
};

// Route tree
pub use keyroute_std::{Route, Router, RouterBuilder};

pub use keyroute_std::regex;

/// Matcher strategies.
pub mod matchers {
    pub use keyroute_std::matchers::{Literal, Pattern, Prefix};
}

/// Match observers.
pub mod observers {
    pub use keyroute_std::observers::{FnObserver, LoggingObserver, MatchObserver};
}

/// Handler wrappers.
pub mod handlers {
    pub use keyroute_std::handlers::{CancelGuard, Traced};
}

/// Testing utilities.
pub mod testing {
    pub use keyroute_std::testing::{
        CountingHandler, FailingHandler, RecordingObserver, StaticHandler,
    };
}

#[cfg(feature = "tower")]
pub mod tower;

/// Prelude module - common imports for keyroute.
///
/// # Usage
///
/// ```rust
/// use keyroute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Ambient, BoxError, Handler, HandlerFn, Matcher, RouteError, RoutedContext, Router,
        observers::MatchObserver,
    };
}
