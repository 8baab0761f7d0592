use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use crate::error::Result;
use crate::github::{
    ApiResponse, CommitData, CreateRefRequest, CreateTagRequest, HostingApi, RepoRef,
};

/// A call received by [MockHostingApi]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    GetCommit { repo: RepoRef, sha: String },
    CreateTagObject { repo: RepoRef, request: CreateTagRequest },
    CreateRef { repo: RepoRef, request: CreateRefRequest },
}

impl ApiCall {
    /// Whether the call changes remote state
    pub fn is_mutating(&self) -> bool {
        !matches!(self, ApiCall::GetCommit { .. })
    }
}

/// In-memory hosting service for testing without network access
///
/// Unknown commits answer 404. Creating a ref that already exists answers
/// 422, like the real service.
pub struct MockHostingApi {
    commits: HashMap<String, String>,
    commit_status: Option<u16>,
    tag_object_status: u16,
    ref_status: u16,
    refs: Mutex<HashSet<String>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockHostingApi {
    /// Create a new mock with no commits
    pub fn new() -> Self {
        MockHostingApi {
            commits: HashMap::new(),
            commit_status: None,
            tag_object_status: 201,
            ref_status: 201,
            refs: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Add a commit the mock will serve
    pub fn add_commit(&mut self, sha: impl Into<String>, message: impl Into<String>) {
        self.commits.insert(sha.into(), message.into());
    }

    /// Answer every commit fetch with `status` and no payload
    pub fn set_commit_status(&mut self, status: u16) {
        self.commit_status = Some(status);
    }

    pub fn set_tag_object_status(&mut self, status: u16) {
        self.tag_object_status = status;
    }

    pub fn set_ref_status(&mut self, status: u16) {
        self.ref_status = status;
    }

    /// Pretend `ref_name` already exists on the remote
    pub fn add_existing_ref(&mut self, ref_name: impl Into<String>) {
        lock(&self.refs).insert(ref_name.into());
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        lock(&self.calls).clone()
    }

    /// Calls that would have changed remote state
    pub fn mutating_calls(&self) -> Vec<ApiCall> {
        self.calls().into_iter().filter(ApiCall::is_mutating).collect()
    }

    fn record(&self, call: ApiCall) {
        lock(&self.calls).push(call);
    }
}

impl Default for MockHostingApi {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl HostingApi for MockHostingApi {
    fn get_commit(&self, repo: &RepoRef, sha: &str) -> Result<ApiResponse<CommitData>> {
        self.record(ApiCall::GetCommit {
            repo: repo.clone(),
            sha: sha.to_string(),
        });

        if let Some(status) = self.commit_status {
            return Ok(ApiResponse::status_only(status));
        }

        Ok(match self.commits.get(sha) {
            Some(message) => ApiResponse::new(
                200,
                CommitData {
                    message: message.clone(),
                },
            ),
            None => ApiResponse::status_only(404),
        })
    }

    fn create_tag_object(
        &self,
        repo: &RepoRef,
        request: &CreateTagRequest,
    ) -> Result<ApiResponse<()>> {
        self.record(ApiCall::CreateTagObject {
            repo: repo.clone(),
            request: request.clone(),
        });

        Ok(ApiResponse::status_only(self.tag_object_status))
    }

    fn create_ref(&self, repo: &RepoRef, request: &CreateRefRequest) -> Result<ApiResponse<()>> {
        self.record(ApiCall::CreateRef {
            repo: repo.clone(),
            request: request.clone(),
        });

        if self.ref_status != 201 {
            return Ok(ApiResponse::status_only(self.ref_status));
        }

        let created = lock(&self.refs).insert(request.ref_name.clone());
        Ok(ApiResponse::status_only(if created { 201 } else { 422 }))
    }
}
