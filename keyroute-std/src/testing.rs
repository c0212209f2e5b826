//! Testing utilities for keyroute.
//!
//! This module provides small building blocks for testing route tables.
//!
//! # Features
//!
//! - [`RecordingObserver`]: records every match the router reports
//! - [`CountingHandler`]: counts its invocations
//! - [`StaticHandler`]: always returns the same value
//! - [`FailingHandler`]: always fails with a fixed message

use crate::{observers::MatchObserver, tree::Route};
use keyroute_core::{BoxError, Handler, RoutedContext};
use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Observer
// ============================================================================

/// An observer that records `(original path, route name)` for every match.
///
/// Clones share the same record.
///
/// # Example
///
/// ```rust
/// use keyroute_std::{Router, testing::RecordingObserver};
///
/// let recorder = RecordingObserver::new();
/// let router: Router<(), ()> = Router::builder().observer(recorder.clone()).build();
/// router.simple_route("ping").named("ping").handler_fn(|_, _| Ok(()));
///
/// router.exec_path("ping", ()).unwrap();
/// assert_eq!(recorder.matches(), vec![("ping".to_string(), "ping".to_string())]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    matches: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(original path, route name)` pairs, oldest first.
    pub fn matches(&self) -> Vec<(String, String)> {
        self.matches.lock().clone()
    }

    /// Number of recorded matches.
    pub fn count(&self) -> usize {
        self.matches.lock().len()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.matches.lock().clear();
    }
}

impl<Req, Res> MatchObserver<Req, Res> for RecordingObserver {
    fn on_match(&self, original_path: &str, route: &Route<Req, Res>) {
        self.matches
            .lock()
            .push((original_path.to_string(), route.name()));
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and returns the new count.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<Req> Handler<Req, usize> for CountingHandler {
    fn call(&self, _ctx: &RoutedContext<'_>, _req: Req) -> Result<usize, BoxError> {
        Ok(self.count.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

// ============================================================================
// Static Handler
// ============================================================================

/// A handler that always returns a clone of the same value.
#[derive(Debug, Clone)]
pub struct StaticHandler<T> {
    value: T,
}

impl<T> StaticHandler<T> {
    /// Create a handler returning `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<Req, T> Handler<Req, T> for StaticHandler<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn call(&self, _ctx: &RoutedContext<'_>, _req: Req) -> Result<T, BoxError> {
        Ok(self.value.clone())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with the same message.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<Req, Res> Handler<Req, Res> for FailingHandler {
    fn call(&self, _ctx: &RoutedContext<'_>, _req: Req) -> Result<Res, BoxError> {
        Err(self.message.clone().into())
    }
}
