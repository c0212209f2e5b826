//! Handler wrappers.
//!
//! - [`CancelGuard`] - refuses to run once the ambient context is done
//! - [`Traced`] - runs the inner handler inside a `tracing` span

pub mod guard;
pub mod traced;

pub use guard::CancelGuard;
pub use traced::Traced;
