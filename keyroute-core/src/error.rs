//! Error types for keyroute.
//!
//! This module provides a small error hierarchy using `thiserror`:
//!
//! - [`RouteError`] - Errors returned from a dispatch
//! - [`RegistrationError`] - Errors raised while building the route tree
//! - [`AmbientError`] - Why an ambient context is no longer live

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can be returned from a dispatch.
#[derive(Error, Debug)]
pub enum RouteError {
    /// No registered route matched the path, or the root prefix did not apply.
    #[error("route not found")]
    NotFound,

    /// The matched handler failed. The handler's error is carried as-is.
    #[error(transparent)]
    Handler(BoxError),
}

impl RouteError {
    /// Returns `true` for the not-found sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound)
    }

    /// Hands back the handler's own error, or `None` for [`RouteError::NotFound`].
    pub fn into_handler_error(self) -> Option<BoxError> {
        match self {
            RouteError::NotFound => None,
            RouteError::Handler(err) => Some(err),
        }
    }
}

/// Errors raised while registering routes.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// A pattern route was given an expression that does not compile.
    #[error("invalid route pattern `{pattern}`")]
    InvalidPattern {
        /// The rejected expression.
        pattern: String,
        /// The compiler's diagnostic.
        #[source]
        source: BoxError,
    },
}

/// The reason an [`Ambient`](crate::Ambient) context is done.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientError {
    /// The context, or one of its ancestors, was cancelled.
    #[error("context cancelled")]
    Cancelled,

    /// The context deadline has passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(RouteError::NotFound.to_string(), "route not found");
        assert!(RouteError::NotFound.is_not_found());
    }

    #[test]
    fn test_handler_error_is_transparent() {
        let inner: BoxError = "disk on fire".into();
        let err = RouteError::Handler(inner);
        assert_eq!(err.to_string(), "disk on fire");
        assert!(!err.is_not_found());

        let back = err.into_handler_error().unwrap();
        assert_eq!(back.to_string(), "disk on fire");
    }

    #[test]
    fn test_not_found_has_no_handler_error() {
        assert!(RouteError::NotFound.into_handler_error().is_none());
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        use std::error::Error as _;

        let err = RegistrationError::InvalidPattern {
            pattern: "(".into(),
            source: "unclosed group".into(),
        };
        assert_eq!(err.to_string(), "invalid route pattern `(`");
        assert_eq!(err.source().unwrap().to_string(), "unclosed group");
    }
}
