use std::collections::BTreeSet;

use regex::Regex;

use crate::error::{Result, SeqGapError};

/// Pattern used when none is given: the first run of decimal digits, in any
/// script (`\d` is Unicode-aware).
pub const DEFAULT_PATTERN: &str = r"(\d+)";

/// Capture group used when none is given.
pub const DEFAULT_GROUP: usize = 1;

/// Pulls the sequence token out of raw entry names with a regex capture group.
#[derive(Debug, Clone)]
pub struct Extractor {
    regex: Regex,
    group: usize,
}

impl Extractor {
    /// Compiles `pattern` and checks that capture group `group` exists.
    ///
    /// Group 0 is the whole match and is always available.
    ///
    /// # Errors
    /// Returns an error if the pattern does not compile or has fewer capture
    /// groups than `group`.
    pub fn new(pattern: &str, group: usize) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| SeqGapError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;

        // captures_len counts the implicit whole-match group
        let available = regex.captures_len() - 1;
        if group > available {
            return Err(SeqGapError::GroupOutOfRange {
                pattern: pattern.to_string(),
                group,
                available,
            });
        }

        Ok(Self { regex, group })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    #[must_use]
    pub const fn group(&self) -> usize {
        self.group
    }

    /// Token of a single name, or `None` when the name does not match or the
    /// group did not take part in the match.
    #[must_use]
    pub fn extract_one<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.regex
            .captures(name)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str())
    }

    /// Collects the distinct tokens of all matching names.
    pub fn extract<I, S>(&self, names: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.extract_one(name.as_ref()).map(str::to_string))
            .collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            regex: Regex::new(DEFAULT_PATTERN).expect("default pattern is valid"),
            group: DEFAULT_GROUP,
        }
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
