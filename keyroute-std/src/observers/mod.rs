//! # Match Observers
//!
//! An observer is told about every successful dispatch, right before the
//! matched handler runs. Use it for access logs or metrics; it cannot
//! change the outcome.
//!
//! - [`FnObserver`] - wraps a closure (see [`RouterBuilder::on_match`])
//! - [`LoggingObserver`] - emits a `tracing` event per match
//!
//! [`RouterBuilder::on_match`]: crate::RouterBuilder::on_match

pub mod logging;

pub use logging::LoggingObserver;

use crate::tree::Route;

/// Notified of each successful dispatch.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot observe matches on routes of `{Req}` -> `{Res}`",
    label = "missing `MatchObserver` implementation",
    note = "Implement `on_match`, or pass a closure to `RouterBuilder::on_match`."
)]
pub trait MatchObserver<Req, Res>: Send + Sync {
    /// Called with the path as submitted and the route that matched it.
    fn on_match(&self, original_path: &str, route: &Route<Req, Res>);
}

/// Adapts a closure into a [`MatchObserver`].
pub struct FnObserver<F> {
    func: F,
}

impl<F> FnObserver<F> {
    /// Wrap `func`.
    pub fn new<Req, Res>(func: F) -> Self
    where
        F: Fn(&str, &Route<Req, Res>) + Send + Sync,
    {
        Self { func }
    }
}

impl<F, Req, Res> MatchObserver<Req, Res> for FnObserver<F>
where
    F: Fn(&str, &Route<Req, Res>) + Send + Sync,
{
    fn on_match(&self, original_path: &str, route: &Route<Req, Res>) {
        (self.func)(original_path, route)
    }
}

impl<O, Req, Res> MatchObserver<Req, Res> for std::sync::Arc<O>
where
    O: MatchObserver<Req, Res> + ?Sized,
{
    fn on_match(&self, original_path: &str, route: &Route<Req, Res>) {
        (**self).on_match(original_path, route)
    }
}
