//! Prefix stripping.

use keyroute_core::Matcher;

/// Matches a path that starts with `prefix` and strips it.
///
/// A path equal to the prefix matches with an empty remainder. An empty
/// prefix never matches: it would consume nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    prefix: String,
}

impl Prefix {
    /// Create a prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The prefix this matcher strips.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Matcher for Prefix {
    fn match_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.prefix.is_empty() {
            return None;
        }
        path.strip_prefix(self.prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prefix() {
        let m = Prefix::new("a.");
        assert_eq!(m.match_path("a.b"), Some("b"));
        assert_eq!(m.match_path("a.b.c"), Some("b.c"));
    }

    #[test]
    fn test_exact_prefix_leaves_empty_remainder() {
        let m = Prefix::new("a.");
        assert_eq!(m.match_path("a."), Some(""));
    }

    #[test]
    fn test_shorter_path_does_not_match() {
        let m = Prefix::new("a.");
        assert_eq!(m.match_path("a"), None);
        assert_eq!(m.match_path("b.a."), None);
    }

    #[test]
    fn test_empty_prefix_never_matches() {
        let m = Prefix::new("");
        assert_eq!(m.match_path("anything"), None);
        assert_eq!(m.match_path(""), None);
    }
}
