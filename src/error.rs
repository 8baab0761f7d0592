use thiserror::Error;

/// Unified error type for version-tagger runs
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(String),

    #[error("More than one capture group: {0} > 1")]
    TooManyCaptureGroups(usize),

    #[error("Failed to get commit data (status={status})")]
    CommitFetchFailed { status: u16 },

    #[error("Version assertion failed. Double check the version: {version}")]
    VersionAssertionFailed { version: String },

    #[error("Failed to create tag object (status={status})")]
    TagObjectCreationFailed { status: u16 },

    #[error("Failed to create tag ref (status={status})")]
    TagRefCreationFailed { status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-tagger
pub type Result<T> = std::result::Result<T, TaggerError>;

impl TaggerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TaggerError::Config(msg.into())
    }

    /// Create an invalid pattern error, keeping the regex engine's message
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        TaggerError::InvalidPattern(msg.into())
    }
}
