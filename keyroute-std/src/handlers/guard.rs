//! Cancellation guard for handlers.

use keyroute_core::{BoxError, Handler, RoutedContext};

/// Checks the ambient context before calling the inner handler.
///
/// If the caller's context has been cancelled or its deadline has passed,
/// the inner handler is skipped and the [`AmbientError`] is returned as the
/// handler's error.
///
/// [`AmbientError`]: keyroute_core::AmbientError
#[derive(Debug, Clone)]
pub struct CancelGuard<H> {
    inner: H,
}

impl<H> CancelGuard<H> {
    /// Guard `inner`.
    pub const fn new(inner: H) -> Self {
        Self { inner }
    }

    /// The guarded handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H, Req, Res> Handler<Req, Res> for CancelGuard<H>
where
    H: Handler<Req, Res>,
{
    fn call(&self, ctx: &RoutedContext<'_>, req: Req) -> Result<Res, BoxError> {
        ctx.ambient().check()?;
        self.inner.call(ctx, req)
    }
}
