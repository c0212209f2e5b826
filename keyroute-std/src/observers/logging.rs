//! Logging observer - an access log for dispatches.

use crate::{observers::MatchObserver, tree::Route};

/// An observer that logs every match.
///
/// With the `tracing` feature enabled it emits a `debug` event carrying the
/// router name, the original path and the matched route's name. Without the
/// feature it does nothing.
///
/// # Example
///
/// ```rust
/// use keyroute_std::{Router, observers::LoggingObserver};
///
/// let router: Router<(), ()> = Router::builder()
///     .observer(LoggingObserver::named("buildings"))
///     .build();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingObserver {
    name: &'static str,
}

impl LoggingObserver {
    /// Create a `LoggingObserver` with a default name.
    pub fn new() -> Self {
        Self { name: "router" }
    }

    /// Create a `LoggingObserver` with a custom name.
    ///
    /// The name identifies the router in log output.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res> MatchObserver<Req, Res> for LoggingObserver {
    fn on_match(&self, original_path: &str, route: &Route<Req, Res>) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                router = %self.name,
                path = %original_path,
                route = %route.name(),
                "route matched"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, original_path, route);
        }
    }
}
