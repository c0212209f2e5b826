//! # keyroute-core
//!
//! Core contracts for the keyroute dispatch engine.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that writes handlers or matchers without needing the route tree itself,
//! which lives in `keyroute-std`.
//!
//! # Contracts
//!
//! - [`Matcher`] - tests a path and reports the unconsumed remainder
//! - [`Handler`] - produces the result for a matched path
//! - [`Ambient`] / [`RoutedContext`] - what travels with a dispatch
//!
//! # Error Types
//!
//! - [`RouteError`] - returned from a dispatch
//! - [`RegistrationError`] - returned while building routes
//! - [`AmbientError`] - why an ambient context is done

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod handler;
mod matcher;

// Re-exports
pub use context::{Ambient, CancelHandle, RoutedContext};
pub use error::{AmbientError, BoxError, RegistrationError, RouteError};
pub use handler::{Handler, HandlerFn};
pub use matcher::{BoxMatcher, Matcher};
