//! Main workflow orchestration logic
//!
//! One run: compile the pattern, fetch the commit, extract the version,
//! optionally assert it, build the tag and publish it. Every step completes
//! before the next starts and the first failure ends the run.

use tracing::{debug, info};

use crate::assertion::{CommandRunner, VersionAssertion};
use crate::boundary::BoundaryNotice;
use crate::config::Config;
use crate::domain::{CommitRecord, TagSpec, VersionPattern};
use crate::error::{Result, TaggerError};
use crate::github::{CreateRefRequest, CreateTagRequest, HostingApi, RepoRef};

/// Outputs published at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Tag name; empty when nothing was tagged
    pub tag: String,
    /// Annotated tag message; empty otherwise
    pub message: String,
    /// Evaluated commit; empty when nothing was tagged
    pub commit: String,
}

impl RunOutcome {
    /// Outcome of a run whose commit did not match, or that failed
    pub fn empty() -> Self {
        RunOutcome::default()
    }

    pub fn tagged(tag: &TagSpec) -> Self {
        RunOutcome {
            tag: tag.name.clone(),
            message: tag.message.clone(),
            commit: tag.target_sha.clone(),
        }
    }

    /// `(name, value)` pairs in publication order
    pub fn outputs(&self) -> [(&'static str, &str); 3] {
        [
            ("tag", self.tag.as_str()),
            ("message", self.message.as_str()),
            ("commit", self.commit.as_str()),
        ]
    }
}

/// Run the whole pipeline for `config`
///
/// # Returns
/// * `Ok(RunOutcome)` - Tag created (or would have been, in dry-run), or the commit did not match
/// * `Err` - Configuration errors before any call, or the first failing external step
pub fn run_workflow<A, R>(config: &Config, api: &A, runner: &R) -> Result<RunOutcome>
where
    A: HostingApi + ?Sized,
    R: CommandRunner + ?Sized,
{
    let pattern = VersionPattern::compile(&config.version_regex)?;
    debug!("Regex: {}", pattern.as_str());

    let commit_sha = config.target_sha();
    debug!("Using commit: {}", commit_sha);

    let commit = fetch_commit(api, &config.repository, commit_sha)?;

    let checked = config.checked_text();
    let text = commit.text_to_check(checked);
    debug!("Checking commit text: {}", text);

    let Some(version) = commit.match_version(&pattern, checked) else {
        let notice = BoundaryNotice::NoVersionMatch {
            checked,
            pattern: config.version_regex.clone(),
            text: text.to_string(),
        };
        info!("{}", notice);
        return Ok(RunOutcome::empty());
    };

    if let Some(assertion) = VersionAssertion::new(&config.version_assertion_command) {
        assertion.check(runner, &version)?;
    }

    let tag = TagSpec::build(&config.version_tag_prefix, &version, &commit, config.tag_kind());
    debug!(
        "Creating tag '{}' on commit {}{}",
        tag.name,
        tag.target_sha,
        if tag.is_annotated() {
            format!(" with message: '{}'", tag.message)
        } else {
            String::new()
        }
    );

    if config.dry_run {
        info!("Dry run: not creating tag '{}' on the remote", tag.name);
    } else {
        publish_tag(api, &config.repository, &tag)?;
    }

    info!("{}", created_summary(&tag));
    Ok(RunOutcome::tagged(&tag))
}

/// Fetch the commit to evaluate; only a 200 response counts
pub fn fetch_commit<A: HostingApi + ?Sized>(
    api: &A,
    repo: &RepoRef,
    sha: &str,
) -> Result<CommitRecord> {
    let response = api.get_commit(repo, sha)?;
    if response.status != 200 {
        return Err(TaggerError::CommitFetchFailed {
            status: response.status,
        });
    }

    let data = response.data.ok_or(TaggerError::CommitFetchFailed {
        status: response.status,
    })?;
    Ok(CommitRecord::new(sha, data.message))
}

/// Create the tag on the remote
///
/// Annotated tags create the tag object first; the ref is only attempted once
/// that returned 201. Both calls succeed on exactly 201. Existing tags are
/// not checked for: the service rejects duplicates itself.
pub fn publish_tag<A: HostingApi + ?Sized>(api: &A, repo: &RepoRef, tag: &TagSpec) -> Result<()> {
    if tag.is_annotated() {
        let response = api.create_tag_object(repo, &CreateTagRequest::for_tag(tag))?;
        if response.status != 201 {
            return Err(TaggerError::TagObjectCreationFailed {
                status: response.status,
            });
        }
    }

    let response = api.create_ref(repo, &CreateRefRequest::for_tag(tag))?;
    if response.status != 201 {
        return Err(TaggerError::TagRefCreationFailed {
            status: response.status,
        });
    }

    Ok(())
}

fn created_summary(tag: &TagSpec) -> String {
    let mut summary = format!("Created tag '{}' on commit {}", tag.name, tag.target_sha);
    if tag.is_annotated() {
        if tag.message.is_empty() {
            summary.push_str(" with empty message");
        } else {
            summary.push_str(&format!(
                " with message:\n\t{}",
                tag.message.replace('\n', "\n\t")
            ));
        }
    }
    summary
}
