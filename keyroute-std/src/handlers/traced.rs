//! Tracing span wrapper for handlers.

use keyroute_core::{BoxError, Handler, RoutedContext};

/// A handler wrapper that instruments execution with a `tracing` span.
///
/// The span carries the wrapper's name, the matched route's name and the
/// dispatched path. A failing handler is additionally reported with a
/// `warn` event. Without the `tracing` feature the wrapper only forwards.
#[derive(Debug, Clone, Copy)]
pub struct Traced<H> {
    inner: H,
    name: &'static str,
}

impl<H> Traced<H> {
    /// Create a new `Traced` wrapper around a handler.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }
}

impl<H, Req, Res> Handler<Req, Res> for Traced<H>
where
    H: Handler<Req, Res>,
{
    #[cfg(feature = "tracing")]
    fn call(&self, ctx: &RoutedContext<'_>, req: Req) -> Result<Res, BoxError> {
        let span = tracing::info_span!(
            "route_handler",
            handler = %self.name,
            route = %ctx.route_name(),
            path = %ctx.path(),
        );
        let _entered = span.enter();

        let result = self.inner.call(ctx, req);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "handler failed");
        }
        result
    }

    #[cfg(not(feature = "tracing"))]
    fn call(&self, ctx: &RoutedContext<'_>, req: Req) -> Result<Res, BoxError> {
        let _ = self.name;
        self.inner.call(ctx, req)
    }
}
