use crate::domain::commit::CommitRecord;

/// Kind of tag to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// A ref pointing directly at the commit
    Lightweight,
    /// A tag object carrying a message, then a ref pointing at it
    Annotated,
}

impl TagKind {
    pub fn from_flag(annotated: bool) -> Self {
        if annotated {
            TagKind::Annotated
        } else {
            TagKind::Lightweight
        }
    }
}

/// Everything needed to publish one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    pub name: String,
    /// Empty unless the tag is annotated
    pub message: String,
    pub target_sha: String,
    pub kind: TagKind,
}

impl TagSpec {
    /// Build the tag for `version` found in `commit`
    ///
    /// The name is `prefix + version` with no separator. Annotated tags take
    /// the commit body as their message.
    pub fn build(prefix: &str, version: &str, commit: &CommitRecord, kind: TagKind) -> Self {
        let message = match kind {
            TagKind::Annotated => commit.body(),
            TagKind::Lightweight => String::new(),
        };

        TagSpec {
            name: format!("{}{}", prefix, version),
            message,
            target_sha: commit.sha.clone(),
            kind,
        }
    }

    /// Fully qualified ref, e.g. `refs/tags/v1.2.3`
    pub fn ref_name(&self) -> String {
        format!("refs/tags/{}", self.name)
    }

    pub fn is_annotated(&self) -> bool {
        self.kind == TagKind::Annotated
    }
}
