use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use reqwest::Method;
use tracing::debug;

use crate::error::Result;
use crate::github::{
    ApiResponse, CommitData, CreateRefRequest, CreateTagRequest, HostingApi, RepoRef,
};

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("version-tagger/", env!("CARGO_PKG_VERSION"));

/// GitHub REST client authenticated with a token
pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `api_url` (e.g. [DEFAULT_API_URL] or a GHES `/api/v3` URL)
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(GitHubClient {
            http,
            api_url: api_url.into(),
            token: token.into(),
        })
    }

    /// URL of `path` under the git database API of `repo`
    pub fn endpoint(&self, repo: &RepoRef, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/git/{}",
            self.api_url.trim_end_matches('/'),
            repo.owner,
            repo.name,
            path
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION)
    }
}

impl HostingApi for GitHubClient {
    fn get_commit(&self, repo: &RepoRef, sha: &str) -> Result<ApiResponse<CommitData>> {
        let url = self.endpoint(repo, &format!("commits/{}", sha));
        debug!("GET {}", url);

        let response = self.request(Method::GET, &url).send()?;
        let status = response.status().as_u16();
        if status != 200 {
            return Ok(ApiResponse::status_only(status));
        }

        let data: CommitData = response.json()?;
        Ok(ApiResponse::new(status, data))
    }

    fn create_tag_object(
        &self,
        repo: &RepoRef,
        request: &CreateTagRequest,
    ) -> Result<ApiResponse<()>> {
        let url = self.endpoint(repo, "tags");
        debug!("POST {}", url);

        let response = self.request(Method::POST, &url).json(request).send()?;
        Ok(ApiResponse::status_only(response.status().as_u16()))
    }

    fn create_ref(&self, repo: &RepoRef, request: &CreateRefRequest) -> Result<ApiResponse<()>> {
        let url = self.endpoint(repo, "refs");
        debug!("POST {}", url);

        let response = self.request(Method::POST, &url).json(request).send()?;
        Ok(ApiResponse::status_only(response.status().as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = GitHubClient::new(DEFAULT_API_URL, "12345").unwrap();
        let repo = RepoRef::new("theowner", "therepo");

        assert_eq!(
            client.endpoint(&repo, "commits/0123456789abcdef"),
            "https://api.github.com/repos/theowner/therepo/git/commits/0123456789abcdef"
        );
        assert_eq!(
            client.endpoint(&repo, "refs"),
            "https://api.github.com/repos/theowner/therepo/git/refs"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/", "12345").unwrap();
        let repo = RepoRef::new("o", "r");

        assert_eq!(
            client.endpoint(&repo, "tags"),
            "https://ghe.example.com/api/v3/repos/o/r/git/tags"
        );
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("version-tagger/"));
    }
}
