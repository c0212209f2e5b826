//! # keyroute-std
//!
//! Standard implementations for the keyroute dispatch engine.
//!
//! This crate provides:
//! - **Matchers**: [`Literal`], [`Prefix`], [`Pattern`]
//! - **Route tree**: [`Route`], [`Router`], [`RouterBuilder`]
//! - **Observers**: [`MatchObserver`], logging
//! - **Handler wrappers**: cancellation guard, tracing span
//! - **Testing utilities**
//!
//! [`Literal`]: matchers::Literal
//! [`Prefix`]: matchers::Prefix
//! [`Pattern`]: matchers::Pattern
//! [`MatchObserver`]: observers::MatchObserver

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use keyroute_core;
pub use regex;

// Modules
pub mod handlers;
pub mod matchers;
pub mod observers;
pub mod testing;
pub mod tree;

pub use tree::{Route, Router, RouterBuilder};
