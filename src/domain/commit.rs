use crate::domain::pattern::VersionPattern;

/// Which part of the commit message is checked against the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedText {
    Title,
    Message,
}

impl CheckedText {
    pub fn from_flag(check_entire_commit_message: bool) -> Self {
        if check_entire_commit_message {
            CheckedText::Message
        } else {
            CheckedText::Title
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckedText::Title => "title",
            CheckedText::Message => "message",
        }
    }
}

/// A commit as returned by the hosting API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
}

impl CommitRecord {
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        CommitRecord {
            sha: sha.into(),
            message: message.into(),
        }
    }

    /// First line of the message
    pub fn title(&self) -> &str {
        self.message.split('\n').next().unwrap_or_default()
    }

    /// Body used as an annotated tag message.
    ///
    /// Drops line 0 (title) and line 1 (the blank separator) unconditionally,
    /// then joins the remaining lines back with `\n`.
    pub fn body(&self) -> String {
        self.message
            .split('\n')
            .skip(2)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The text checked against the version pattern
    pub fn text_to_check(&self, checked: CheckedText) -> &str {
        match checked {
            CheckedText::Title => self.title(),
            CheckedText::Message => &self.message,
        }
    }

    /// Apply `pattern` once to the selected text and extract the version
    pub fn match_version(&self, pattern: &VersionPattern, checked: CheckedText) -> Option<String> {
        pattern.find_version(self.text_to_check(checked))
    }
}
