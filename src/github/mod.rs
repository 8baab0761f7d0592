//! Hosting API abstraction layer
//!
//! The pipeline talks to the hosting service through the [HostingApi] trait,
//! which exposes exactly the three calls a run needs: read one commit, create
//! a tag object, and create a ref.
//!
//! - [client::GitHubClient]: REST client for the GitHub API using `reqwest`
//! - [mock::MockHostingApi]: in-memory implementation for tests
//!
//! Implementations return the HTTP status of every response instead of
//! turning unexpected statuses into errors. Deciding which statuses count as
//! success belongs to the pipeline.

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::{ApiCall, MockHostingApi};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::TagSpec;
use crate::error::{Result, TaggerError};

/// `owner/name` of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoRef {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse the `owner/name` form used by `GITHUB_REPOSITORY`
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(RepoRef::new(owner, name))
            }
            _ => Err(TaggerError::config(format!(
                "Invalid repository '{}', expected 'owner/repo'",
                slug
            ))),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Status code and, when the call returned one, the decoded payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T) -> Self {
        ApiResponse {
            status,
            data: Some(data),
        }
    }

    pub fn status_only(status: u16) -> Self {
        ApiResponse { status, data: None }
    }
}

/// Commit payload; only the message is used
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitData {
    pub message: String,
}

/// Body of a tag object creation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTagRequest {
    pub tag: String,
    pub message: String,
    pub object: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

impl CreateTagRequest {
    pub fn for_tag(tag: &TagSpec) -> Self {
        CreateTagRequest {
            tag: tag.name.clone(),
            message: tag.message.clone(),
            object: tag.target_sha.clone(),
            object_type: "commit".to_string(),
        }
    }
}

/// Body of a ref creation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRefRequest {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
}

impl CreateRefRequest {
    pub fn for_tag(tag: &TagSpec) -> Self {
        CreateRefRequest {
            ref_name: tag.ref_name(),
            sha: tag.target_sha.clone(),
        }
    }
}

/// Operations the pipeline needs from the hosting service
///
/// All implementors must be `Send + Sync`.
///
/// Errors are reserved for failures to complete the exchange at all
/// (transport errors, undecodable payloads). A completed exchange is always
/// `Ok`, whatever its status.
pub trait HostingApi: Send + Sync {
    /// Fetch one commit
    ///
    /// `data` is present when the status is 200.
    fn get_commit(&self, repo: &RepoRef, sha: &str) -> Result<ApiResponse<CommitData>>;

    /// Create an annotated tag object; the service answers 201 on success
    fn create_tag_object(&self, repo: &RepoRef, request: &CreateTagRequest)
        -> Result<ApiResponse<()>>;

    /// Create a ref; the service answers 201 on success
    fn create_ref(&self, repo: &RepoRef, request: &CreateRefRequest) -> Result<ApiResponse<()>>;
}
