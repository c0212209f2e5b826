//! # Matcher
//!
//! A matcher decides whether a route applies to a path and, if so, how much
//! of the path it consumed. Whatever is left over is handed to the route's
//! children.
//!
//! Matchers are stateless once built and are owned by exactly one route.

use std::fmt::Debug;

/// Tests a path and reports the unconsumed remainder.
///
/// `Some(remainder)` means the path matched; the remainder may be empty when
/// the matcher consumed everything. `None` means no match.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used to match route paths",
    label = "missing `Matcher` implementation",
    note = "Implement `match_path` returning the unconsumed remainder of the path."
)]
pub trait Matcher: Send + Sync + Debug + 'static {
    /// Match `path`, returning the remainder on success.
    fn match_path<'p>(&self, path: &'p str) -> Option<&'p str>;
}

/// A type-erased matcher, as stored on a route.
pub type BoxMatcher = Box<dyn Matcher>;

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn match_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        (**self).match_path(path)
    }
}
