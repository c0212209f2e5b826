//! # Matcher Strategies
//!
//! The three ways a route can claim a path:
//!
//! | Matcher | Matches when | Remainder |
//! |---------|--------------|-----------|
//! | [`Literal`] | `path == pattern` | always empty |
//! | [`Prefix`] | `path` starts with the prefix | `path` minus the prefix |
//! | [`Pattern`] | the regex matches at offset 0 | text after the match |
//!
//! An empty remainder still counts as a match; it only means the route has
//! nothing left to hand to its children.

pub mod literal;
pub mod pattern;
pub mod prefix;

pub use literal::Literal;
pub use pattern::Pattern;
pub use prefix::Prefix;
