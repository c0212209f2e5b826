//! Exact string matching.

use keyroute_core::Matcher;

/// Matches a path equal to `pattern`, consuming all of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pattern: String,
}

impl Literal {
    /// Create a literal matcher.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The string this matcher accepts.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for Literal {
    fn match_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        (path == self.pattern).then_some("")
    }
}
