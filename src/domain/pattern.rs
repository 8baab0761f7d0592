use regex::Regex;

use crate::error::{Result, TaggerError};

/// Default pattern: a bare `major.minor.patch` commit title
pub const DEFAULT_VERSION_REGEX: &str = r"^[0-9]+\.[0-9]+\.[0-9]+$";

/// A compiled version pattern with at most one capture group
#[derive(Debug, Clone)]
pub struct VersionPattern {
    regex: Regex,
    capture_groups: usize,
}

impl VersionPattern {
    /// Compile `pattern` and check its capture group count
    ///
    /// # Returns
    /// * `Ok(VersionPattern)` - Pattern with 0 or 1 capture groups
    /// * `Err(InvalidPattern)` - If the regex engine rejects the pattern; carries its message
    /// * `Err(TooManyCaptureGroups)` - If the pattern has more than one capture group
    pub fn compile(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| TaggerError::invalid_pattern(e.to_string()))?;

        let capture_groups = count_capture_groups(&regex);
        if capture_groups > 1 {
            return Err(TaggerError::TooManyCaptureGroups(capture_groups));
        }

        Ok(VersionPattern {
            regex,
            capture_groups,
        })
    }

    /// The pattern source text
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn capture_groups(&self) -> usize {
        self.capture_groups
    }

    /// Extract the version from the first match in `text`
    ///
    /// The version is the last element of the match: the whole match when the
    /// pattern has no capture group, the group's text otherwise. A capture
    /// group that did not take part in the match yields `None`.
    pub fn find_version(&self, text: &str) -> Option<String> {
        let captures = self.regex.captures(text)?;
        captures
            .iter()
            .last()
            .flatten()
            .map(|m| m.as_str().to_string())
    }
}

/// Count the capturing groups of `regex`.
///
/// Appends an empty alternative (`<pattern>|`) and runs it against the empty
/// string. The empty branch always matches, so the match carries one slot per
/// group plus the whole match, whether or not each group participated.
pub fn count_capture_groups(regex: &Regex) -> usize {
    Regex::new(&format!("{}|", regex.as_str()))
        .ok()
        .and_then(|auxiliary| auxiliary.captures("").map(|c| c.len()))
        // `(?x)` patterns can swallow the trailing `|` into a comment
        .unwrap_or_else(|| regex.captures_len())
        .saturating_sub(1)
}
