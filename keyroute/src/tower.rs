//! Tower integration for keyroute.
//!
//! Exposes a [`Router`] as a `tower::Service`, so a transport built on
//! tower (an HTTP server, a message consumer) can put its own middleware in
//! front of dispatch.
//!
//! # Example
//!
//! ```rust,ignore
//! use keyroute::tower::{Dispatch, RouterService};
//!
//! let service = RouterService::new(router);
//! let with_timeout = tower::timeout::Timeout::new(service, Duration::from_secs(5));
//! ```
//!
//! Dispatch is synchronous, so the returned future is always ready.

use crate::{Ambient, RouteError, Router};
use futures::future::{Ready, ready};
use std::{
    sync::Arc,
    task::{Context, Poll},
};

/// One dispatch request: the path, the caller's request value and its
/// ambient context.
#[derive(Debug, Clone)]
pub struct Dispatch<Req> {
    /// The caller's ambient context.
    pub ambient: Ambient,
    /// The path to dispatch, root prefix included.
    pub path: String,
    /// The value handed to the matched handler.
    pub request: Req,
}

impl<Req> Dispatch<Req> {
    /// A dispatch under a background context.
    pub fn new(path: impl Into<String>, request: Req) -> Self {
        Self {
            ambient: Ambient::background(),
            path: path.into(),
            request,
        }
    }

    /// Replace the ambient context.
    pub fn with_ambient(mut self, ambient: Ambient) -> Self {
        self.ambient = ambient;
        self
    }
}

/// Wraps a [`Router`] as a `tower::Service<Dispatch<Req>>`.
pub struct RouterService<Req, Res> {
    router: Arc<Router<Req, Res>>,
}

impl<Req, Res> RouterService<Req, Res> {
    /// Create a service owning `router`.
    pub fn new(router: Router<Req, Res>) -> Self {
        Self::shared(Arc::new(router))
    }

    /// Create a service over a router that is also used elsewhere.
    pub fn shared(router: Arc<Router<Req, Res>>) -> Self {
        Self { router }
    }

    /// Get a reference to the inner router.
    pub fn router(&self) -> &Router<Req, Res> {
        &self.router
    }
}

impl<Req, Res> Clone for RouterService<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

impl<Req, Res> ::tower::Service<Dispatch<Req>> for RouterService<Req, Res>
where
    Req: 'static,
    Res: 'static,
{
    type Response = Res;
    type Error = RouteError;
    type Future = Ready<Result<Res, RouteError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Routers are always ready
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, dispatch: Dispatch<Req>) -> Self::Future {
        ready(
            self.router
                .exec(&dispatch.ambient, &dispatch.path, dispatch.request),
        )
    }
}

/// Convert a router into a tower Service.
pub fn into_service<Req, Res>(router: Router<Req, Res>) -> RouterService<Req, Res> {
    RouterService::new(router)
}
