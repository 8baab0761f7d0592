use std::fmt;

use crate::domain::CheckedText;

/// Notices about runs that end without tagging.
/// These are not failures; the run still succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryNotice {
    /// The checked commit text does not match the version pattern
    NoVersionMatch {
        checked: CheckedText,
        pattern: String,
        text: String,
    },
}

impl fmt::Display for BoundaryNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryNotice::NoVersionMatch {
                checked,
                pattern,
                text,
            } => write!(
                f,
                "Commit {} does not match version regex '{}': '{}'",
                checked.label(),
                pattern,
                text
            ),
        }
    }
}
