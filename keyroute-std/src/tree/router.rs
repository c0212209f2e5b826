//! The root of the route tree.
//!
//! # Locking
//!
//! The top-level route list sits behind a reader/writer lock. A dispatch
//! holds the read side for its whole duration, handler call included, so
//! any number of dispatches run in parallel and only registration waits.
//! The read side is taken recursively, which lets a handler dispatch again
//! through the same router. A handler must not register routes on the
//! router it is running under: that would wait on its own read lock.

use crate::{
    matchers::{Literal, Pattern, Prefix},
    observers::{FnObserver, MatchObserver},
    tree::route::{Route, UNNAMED_ROUTE},
};
use keyroute_core::{Ambient, BoxMatcher, Matcher, RegistrationError, RouteError, RoutedContext};
use parking_lot::RwLock;
use regex::Regex;
use std::{fmt, sync::Arc};

/// A hierarchical, string-keyed dispatcher.
///
/// Top-level routes are tried in registration order and the first match
/// wins; there is no specificity-based reordering.
///
/// # Example
///
/// ```rust
/// use keyroute_std::Router;
///
/// let router: Router<(), String> = Router::builder().root_prefix("api.").build();
///
/// router
///     .prefix_route("service.")
///     .named("services")
///     .handler_fn(|ctx, _| Ok(format!("serving {}", ctx.remainder())));
///
/// assert_eq!(router.exec_path("api.service.users", ()).unwrap(), "serving users");
/// assert!(router.exec_path("other.service.users", ()).unwrap_err().is_not_found());
/// ```
pub struct Router<Req, Res> {
    root_prefix: String,
    routes: RwLock<Vec<Arc<Route<Req, Res>>>>,
    observer: Option<Arc<dyn MatchObserver<Req, Res>>>,
}

impl<Req, Res> Router<Req, Res>
where
    Req: 'static,
    Res: 'static,
{
    /// A router with no root prefix and no observer.
    pub fn new() -> Self {
        RouterBuilder::new().build()
    }

    /// Start configuring a router.
    pub fn builder() -> RouterBuilder<Req, Res> {
        RouterBuilder::new()
    }

    /// The prefix every dispatched path must start with.
    pub fn root_prefix(&self) -> &str {
        &self.root_prefix
    }

    /// Number of top-level routes.
    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    /// Whether no top-level route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }

    /// Register a route matching `literal` exactly.
    pub fn simple_route(&self, literal: impl Into<String>) -> Arc<Route<Req, Res>> {
        self.push_route(Some(Box::new(Literal::new(literal))))
    }

    /// Register a route matching paths that start with `prefix`.
    pub fn prefix_route(&self, prefix: impl Into<String>) -> Arc<Route<Req, Res>> {
        self.push_route(Some(Box::new(Prefix::new(prefix))))
    }

    /// Register a route matching the regular expression `pattern`.
    ///
    /// # Errors
    ///
    /// Nothing is registered if `pattern` does not compile.
    pub fn regex_route(&self, pattern: &str) -> Result<Arc<Route<Req, Res>>, RegistrationError> {
        let matcher = Pattern::new(pattern)?;
        Ok(self.push_route(Some(Box::new(matcher))))
    }

    /// Register a route matching an already compiled expression. The route keeps its own copy.
    pub fn regex_route_compiled(&self, regex: &Regex) -> Arc<Route<Req, Res>> {
        self.push_route(Some(Box::new(Pattern::from_regex(regex))))
    }

    /// Register a route using a custom matcher.
    pub fn route_with<M: Matcher>(&self, matcher: M) -> Arc<Route<Req, Res>> {
        self.push_route(Some(Box::new(matcher)))
    }

    /// Register a route with no matcher yet. It will not match until
    /// [`Route::matching`] is called on it.
    pub fn add_route(&self) -> Arc<Route<Req, Res>> {
        self.push_route(None)
    }

    fn push_route(&self, matcher: Option<BoxMatcher>) -> Arc<Route<Req, Res>> {
        let route = Arc::new(Route::new(UNNAMED_ROUTE, matcher));
        self.routes.write().push(Arc::clone(&route));
        route
    }

    /// Drop every registered route.
    ///
    /// Handles to old routes stay valid but are no longer reachable from
    /// this router.
    pub fn clear(&self) -> &Self {
        self.routes.write().clear();
        self
    }

    /// Dispatch `path` under the caller's ambient context.
    ///
    /// The root prefix is stripped once, then each top-level route is tried
    /// in order. On the first match the observer is notified and the route's
    /// handler is called with a [`RoutedContext`].
    ///
    /// # Errors
    ///
    /// - [`RouteError::NotFound`] if the root prefix does not apply or nothing matches.
    /// - [`RouteError::Handler`] carrying the handler's own error.
    pub fn exec(&self, ambient: &Ambient, path: &str, req: Req) -> Result<Res, RouteError> {
        let routes = self.routes.read_recursive();

        let stripped = path
            .strip_prefix(self.root_prefix.as_str())
            .ok_or(RouteError::NotFound)?;

        let found = routes
            .iter()
            .find_map(|route| route.match_path(stripped))
            .ok_or(RouteError::NotFound)?;

        let ctx =
            RoutedContext::new(ambient, path, stripped).with_route(&found.name, found.remainder);

        if let Some(observer) = &self.observer {
            observer.on_match(path, &found.route);
        }

        found.handler.call(&ctx, req).map_err(RouteError::Handler)
    }

    /// Dispatch `path` under a background context.
    pub fn exec_path(&self, path: &str, req: Req) -> Result<Res, RouteError> {
        self.exec(&Ambient::background(), path, req)
    }
}

impl<Req, Res> Default for Router<Req, Res>
where
    Req: 'static,
    Res: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res> fmt::Debug for Router<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("root_prefix", &self.root_prefix)
            .field("routes", &*self.routes.read_recursive())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Builder for [`Router`].
pub struct RouterBuilder<Req, Res> {
    root_prefix: String,
    observer: Option<Arc<dyn MatchObserver<Req, Res>>>,
}

impl<Req, Res> RouterBuilder<Req, Res> {
    /// Start with no root prefix and no observer.
    pub fn new() -> Self {
        Self {
            root_prefix: String::new(),
            observer: None,
        }
    }

    /// Require every dispatched path to start with `prefix`; it is stripped
    /// before matching.
    pub fn root_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.root_prefix = prefix.into();
        self
    }

    /// Call `callback` with the original path and the matched route on every
    /// successful dispatch, before the handler runs.
    pub fn on_match<F>(self, callback: F) -> Self
    where
        F: Fn(&str, &Route<Req, Res>) + Send + Sync + 'static,
    {
        self.observer(FnObserver::new(callback))
    }

    /// Install a match observer, replacing any previous one.
    pub fn observer<O: MatchObserver<Req, Res> + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Build the router.
    pub fn build(self) -> Router<Req, Res> {
        Router {
            root_prefix: self.root_prefix,
            routes: RwLock::new(Vec::new()),
            observer: self.observer,
        }
    }
}

impl<Req, Res> Default for RouterBuilder<Req, Res> {
    fn default() -> Self {
        Self::new()
    }
}
