//! # Handler
//!
//! The terminal point of a dispatch. A handler is bound to a route and is
//! invoked exactly once for every dispatch that ends on that route, and
//! never for a path that did not match.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `route.handler_fn(|ctx, req| Ok(...))`
//! 2. **Struct implementation**: `impl Handler<Req, Res> for MyHandler`
//! 3. **Explicit wrapper**: `HandlerFn::new(my_fn)`
//!
//! Handlers run synchronously on the caller's thread while the router's
//! read lock is held. They may dispatch again through the same router, but
//! must not register routes on it.

use crate::{context::RoutedContext, error::BoxError};

/// Produces the result of a successful match.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle requests of type `{Req}`",
    label = "missing `Handler<{Req}, {Res}>` implementation",
    note = "Handlers must implement `call`, or be wrapped with `HandlerFn::new`."
)]
pub trait Handler<Req, Res>: Send + Sync + 'static {
    /// Execute the handler for a matched path.
    fn call(&self, ctx: &RoutedContext<'_>, req: Req) -> Result<Res, BoxError>;
}

/// Adapts a closure into a [`Handler`].
///
/// # Example
///
/// ```rust
/// use keyroute_core::{Ambient, Handler, HandlerFn, RoutedContext};
///
/// let handler = HandlerFn::new(|ctx: &RoutedContext<'_>, n: u32| {
///     Ok(format!("{}:{n}", ctx.path()))
/// });
///
/// let ambient = Ambient::background();
/// let ctx = RoutedContext::new(&ambient, "a.b", "a.b");
/// assert_eq!(handler.call(&ctx, 3).unwrap(), "a.b:3");
/// ```
#[derive(Clone, Copy)]
pub struct HandlerFn<F> {
    func: F,
}

impl<F> HandlerFn<F> {
    /// Wrap `func`.
    pub fn new<Req, Res>(func: F) -> Self
    where
        F: Fn(&RoutedContext<'_>, Req) -> Result<Res, BoxError> + Send + Sync + 'static,
    {
        Self { func }
    }
}

impl<F> std::fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerFn").finish_non_exhaustive()
    }
}

impl<F, Req, Res> Handler<Req, Res> for HandlerFn<F>
where
    F: Fn(&RoutedContext<'_>, Req) -> Result<Res, BoxError> + Send + Sync + 'static,
{
    fn call(&self, ctx: &RoutedContext<'_>, req: Req) -> Result<Res, BoxError> {
        (self.func)(ctx, req)
    }
}

impl<H, Req, Res> Handler<Req, Res> for std::sync::Arc<H>
where
    H: Handler<Req, Res> + ?Sized,
{
    fn call(&self, ctx: &RoutedContext<'_>, req: Req) -> Result<Res, BoxError> {
        (**self).call(ctx, req)
    }
}
