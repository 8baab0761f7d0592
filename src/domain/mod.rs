//! Domain logic - pure matching and tag-building rules, no I/O

pub mod commit;
pub mod pattern;
pub mod tag;

pub use commit::{CheckedText, CommitRecord};
pub use pattern::{count_capture_groups, VersionPattern, DEFAULT_VERSION_REGEX};
pub use tag::{TagKind, TagSpec};
