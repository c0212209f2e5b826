//! # Execution Context
//!
//! Two pieces travel with every dispatch:
//!
//! - [`Ambient`] - the caller's context. Carries cancellation, an optional
//!   deadline and typed values. It is cheap to clone and every derived
//!   context shares its parent's cancellation.
//! - [`RoutedContext`] - what the matched handler sees: the ambient context
//!   plus the original path, the path after the root prefix, the matched
//!   route's name and the unconsumed remainder.
//!
//! The routing core never inspects cancellation itself. Handlers that do
//! long work are expected to call [`Ambient::check`].

use crate::error::AmbientError;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

type ValueMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// The caller's ambient context.
///
/// Values are keyed by type, so two libraries storing different types never
/// collide. Use a newtype when storing a common type such as `String`.
///
/// # Example
///
/// ```rust
/// use keyroute_core::Ambient;
/// use std::time::Duration;
///
/// #[derive(Debug, PartialEq)]
/// struct RequestId(u64);
///
/// let (ctx, cancel) = Ambient::background()
///     .with_value(RequestId(7))
///     .with_timeout(Duration::from_secs(5))
///     .with_cancel();
///
/// assert_eq!(ctx.value::<RequestId>(), Some(&RequestId(7)));
/// assert!(ctx.check().is_ok());
///
/// cancel.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Clone, Default)]
pub struct Ambient {
    cancel_chain: Vec<Arc<AtomicBool>>,
    deadline: Option<Instant>,
    values: Arc<ValueMap>,
}

impl Ambient {
    /// An empty context: never cancelled, no deadline, no values.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context that can be cancelled through the returned handle.
    ///
    /// Cancelling `self` (or any of its ancestors) also cancels the child.
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        let mut child = self.clone();
        child.cancel_chain.push(Arc::clone(&flag));
        (child, CancelHandle { flag })
    }

    /// Derive a context that expires at `deadline`.
    ///
    /// An earlier deadline inherited from the parent is kept.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let mut child = self.clone();
        child.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        child
    }

    /// Derive a context that expires after `timeout`.
    ///
    /// A timeout too large to represent as an `Instant` adds no deadline.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.clone(),
        }
    }

    /// Derive a context carrying `value`, replacing any value of the same type.
    pub fn with_value<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut values = (*self.values).clone();
        values.insert(TypeId::of::<T>(), Arc::new(value));

        let mut child = self.clone();
        child.values = Arc::new(values);
        child
    }

    /// Look up a value by type.
    pub fn value<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|v| (**v).downcast_ref::<T>())
    }

    /// The effective deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether this context or one of its ancestors has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_chain
            .iter()
            .any(|flag| flag.load(Ordering::Acquire))
    }

    /// `Ok(())` while the context is live, otherwise the reason it is done.
    ///
    /// Cancellation is reported before an expired deadline.
    pub fn check(&self) -> Result<(), AmbientError> {
        if self.is_cancelled() {
            return Err(AmbientError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(AmbientError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for Ambient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ambient")
            .field("cancelled", &self.is_cancelled())
            .field("deadline", &self.deadline)
            .field("values", &self.values.len())
            .finish()
    }
}

/// Cancels the context returned alongside it by [`Ambient::with_cancel`].
#[derive(Debug, Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Cancel the associated context and everything derived from it.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// The context a matched handler is invoked with.
///
/// Built fresh for each dispatch and dropped when the handler returns.
#[derive(Debug, Clone, Copy)]
pub struct RoutedContext<'a> {
    ambient: &'a Ambient,
    original_path: &'a str,
    path: &'a str,
    route_name: &'a str,
    remainder: &'a str,
}

impl<'a> RoutedContext<'a> {
    /// Create a context for `path`, the dispatch path with the root prefix removed.
    pub fn new(ambient: &'a Ambient, original_path: &'a str, path: &'a str) -> Self {
        Self {
            ambient,
            original_path,
            path,
            route_name: "",
            remainder: "",
        }
    }

    /// Attach the matched route's name and the suffix its matcher left unconsumed.
    pub fn with_route(mut self, route_name: &'a str, remainder: &'a str) -> Self {
        self.route_name = route_name;
        self.remainder = remainder;
        self
    }

    /// The caller's ambient context.
    pub fn ambient(&self) -> &'a Ambient {
        self.ambient
    }

    /// The path exactly as submitted.
    pub fn original_path(&self) -> &'a str {
        self.original_path
    }

    /// The path with the router's root prefix removed.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Name of the route whose handler is running.
    pub fn route_name(&self) -> &'a str {
        self.route_name
    }

    /// What the matched route's matcher did not consume.
    ///
    /// Non-empty when a prefix route falls back to its own handler because no
    /// child claimed the rest of the path.
    pub fn remainder(&self) -> &'a str {
        self.remainder
    }
}
