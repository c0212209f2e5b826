//! A single node of the route tree.
//!
//! Each node has its own lock. Matching holds a node's lock while its
//! matcher runs and while its children are searched, so a lookup keeps the
//! locks of the whole branch it is descending. Appending a child takes the
//! same lock. The structure is a strict tree, so nested locking always goes
//! parent to child and cannot cycle.

use crate::matchers::{Literal, Pattern, Prefix};
use keyroute_core::{
    BoxError, BoxMatcher, Handler, HandlerFn, Matcher, RegistrationError, RoutedContext,
};
use parking_lot::Mutex;
use regex::Regex;
use std::{fmt, sync::Arc};

pub(crate) const UNNAMED_ROUTE: &str = "Unknown Route";
pub(crate) const UNNAMED_SUB_ROUTE: &str = "Unknown SubRoute";

/// A node in the route tree.
///
/// A route owns one matcher, an optional handler and an ordered list of
/// children. Children are tried in the order they were added; the first
/// one that matches wins.
///
/// A route without a handler is a pure routing node: it lets its children
/// match but never ends a match itself. A route without a matcher never
/// matches anything.
///
/// Routes are created through [`Router`](crate::Router) or through another
/// route, and are returned as `Arc` handles so they can be configured after
/// registration:
///
/// ```rust
/// use keyroute_std::Router;
///
/// let router: Router<(), &'static str> = Router::new();
///
/// let building = router.prefix_route("building.");
/// building.named("buildings").handler_fn(|_, _| Ok("LIST_ALL_BUILDING"));
/// building
///     .simple_sub_route("twostory")
///     .handler_fn(|_, _| Ok("TWO_STORY_BUILDING"));
///
/// assert_eq!(router.exec_path("building.twostory", ()).unwrap(), "TWO_STORY_BUILDING");
/// ```
pub struct Route<Req, Res> {
    inner: Mutex<RouteInner<Req, Res>>,
}

struct RouteInner<Req, Res> {
    name: String,
    matcher: Option<BoxMatcher>,
    handler: Option<Arc<dyn Handler<Req, Res>>>,
    children: Vec<Arc<Route<Req, Res>>>,
}

/// The outcome of a successful lookup.
pub(crate) struct RouteMatch<'p, Req, Res> {
    pub(crate) route: Arc<Route<Req, Res>>,
    pub(crate) handler: Arc<dyn Handler<Req, Res>>,
    pub(crate) name: String,
    pub(crate) remainder: &'p str,
}

impl<Req, Res> Route<Req, Res> {
    pub(crate) fn new(name: &str, matcher: Option<BoxMatcher>) -> Self {
        Self {
            inner: Mutex::new(RouteInner {
                name: name.to_string(),
                matcher,
                handler: None,
                children: Vec::new(),
            }),
        }
    }

    /// The route's name. Used for diagnostics only.
    pub fn name(&self) -> String {
        self.inner.lock().name.clone()
    }

    /// Set the route's name.
    pub fn named(&self, name: impl Into<String>) -> &Self {
        self.inner.lock().name = name.into();
        self
    }

    /// Set or replace the matcher.
    pub fn matching<M: Matcher>(&self, matcher: M) -> &Self {
        self.inner.lock().matcher = Some(Box::new(matcher));
        self
    }

    /// Whether a matcher has been set.
    pub fn has_matcher(&self) -> bool {
        self.inner.lock().matcher.is_some()
    }

    /// Bind the handler invoked when a match ends on this route.
    pub fn handler<H: Handler<Req, Res>>(&self, handler: H) -> &Self {
        self.inner.lock().handler = Some(Arc::new(handler));
        self
    }

    /// Bind a closure as this route's handler.
    pub fn handler_fn<F>(&self, func: F) -> &Self
    where
        F: Fn(&RoutedContext<'_>, Req) -> Result<Res, BoxError> + Send + Sync + 'static,
    {
        self.handler(HandlerFn::new(func))
    }

    /// Whether a handler is bound.
    pub fn has_handler(&self) -> bool {
        self.inner.lock().handler.is_some()
    }

    /// Number of direct children.
    pub fn children_len(&self) -> usize {
        self.inner.lock().children.len()
    }

    /// Add a child matching `literal` exactly.
    pub fn simple_sub_route(&self, literal: impl Into<String>) -> Arc<Self> {
        self.push_child(Some(Box::new(Literal::new(literal))))
    }

    /// Add a child matching paths that start with `prefix`.
    pub fn prefix_sub_route(&self, prefix: impl Into<String>) -> Arc<Self> {
        self.push_child(Some(Box::new(Prefix::new(prefix))))
    }

    /// Add a child matching the regular expression `pattern`.
    ///
    /// # Errors
    ///
    /// Nothing is added if `pattern` does not compile.
    pub fn regex_sub_route(&self, pattern: &str) -> Result<Arc<Self>, RegistrationError> {
        let matcher = Pattern::new(pattern)?;
        Ok(self.push_child(Some(Box::new(matcher))))
    }

    /// Add a child matching an already compiled expression. The child keeps its own copy.
    pub fn regex_sub_route_compiled(&self, regex: &Regex) -> Arc<Self> {
        self.push_child(Some(Box::new(Pattern::from_regex(regex))))
    }

    /// Add a child using a custom matcher.
    pub fn sub_route_with<M: Matcher>(&self, matcher: M) -> Arc<Self> {
        self.push_child(Some(Box::new(matcher)))
    }

    /// Add a child with no matcher yet. It will not match until
    /// [`matching`](Self::matching) is called on it.
    pub fn add_sub_route(&self) -> Arc<Self> {
        self.push_child(None)
    }

    fn push_child(&self, matcher: Option<BoxMatcher>) -> Arc<Self> {
        let child = Arc::new(Route::new(UNNAMED_SUB_ROUTE, matcher));
        self.inner.lock().children.push(Arc::clone(&child));
        child
    }

    /// Depth-first lookup.
    ///
    /// When this route's matcher leaves a non-empty remainder, the children
    /// are tried in order and the first hit is returned. Otherwise, or when no
    /// child matches, this route ends the match if it has a handler, even if
    /// part of the path is still unconsumed.
    pub(crate) fn match_path<'p>(
        self: &Arc<Self>,
        path: &'p str,
    ) -> Option<RouteMatch<'p, Req, Res>> {
        let inner = self.inner.lock();

        if path.is_empty() {
            return None;
        }
        let matcher = inner.matcher.as_ref()?;
        let remainder = matcher.match_path(path)?;

        if !remainder.is_empty() {
            for child in &inner.children {
                if let Some(found) = child.match_path(remainder) {
                    return Some(found);
                }
            }
        }

        let handler = inner.handler.as_ref()?;
        Some(RouteMatch {
            route: Arc::clone(self),
            handler: Arc::clone(handler),
            name: inner.name.clone(),
            remainder,
        })
    }
}

impl<Req, Res> fmt::Debug for Route<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Route")
            .field("name", &inner.name)
            .field("matcher", &inner.matcher)
            .field("has_handler", &inner.handler.is_some())
            .field("children", &inner.children)
            .finish()
    }
}
