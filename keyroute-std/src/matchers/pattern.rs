//! Regular-expression matching.

use keyroute_core::{Matcher, RegistrationError};
use regex::Regex;

/// Matches a path whose leading text matches a regular expression, and
/// consumes the matched span.
///
/// The match has to begin at the first byte of the path. Text after the
/// match becomes the remainder.
///
/// Every route owns its own [`Regex`]; [`Pattern::from_regex`] clones the
/// expression it is given.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// [`RegistrationError::InvalidPattern`] if the expression does not compile.
    pub fn new(pattern: &str) -> Result<Self, RegistrationError> {
        let regex = Regex::new(pattern).map_err(|e| RegistrationError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(e),
        })?;
        Ok(Self { regex })
    }

    /// Use an already compiled expression.
    pub fn from_regex(regex: &Regex) -> Self {
        Self {
            regex: regex.clone(),
        }
    }

    /// The source text of the expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for Pattern {
    fn match_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        self.regex
            .find(path)
            .filter(|m| m.start() == 0)
            .map(|m| &path[m.end()..])
    }
}
