use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::{CheckedText, TagKind, VersionPattern, DEFAULT_VERSION_REGEX};
use crate::error::{Result, TaggerError};
use crate::github::client::DEFAULT_API_URL;
use crate::github::RepoRef;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "version-tagger.toml";

/// Raw step inputs, as strings, exactly as the CI runner provides them.
///
/// An empty string means the input was not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub token: Option<String>,
    pub version_regex: Option<String>,
    pub version_assertion_command: Option<String>,
    pub version_tag_prefix: Option<String>,
    pub commit: Option<String>,
    pub check_entire_commit_message: Option<String>,
    pub annotated: Option<String>,
    pub dry_run: Option<String>,
}

/// Facts about the CI run the step executes in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    /// `owner/repo`
    pub repository: Option<String>,
    /// Commit checked out for the run
    pub sha: Option<String>,
    pub api_url: Option<String>,
}

/// Optional file-based defaults for the step inputs.
///
/// Same keys as the inputs; the token is deliberately not accepted here.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub version_regex: Option<String>,

    #[serde(default)]
    pub version_assertion_command: Option<String>,

    #[serde(default)]
    pub version_tag_prefix: Option<String>,

    #[serde(default)]
    pub commit: Option<String>,

    #[serde(default)]
    pub check_entire_commit_message: Option<bool>,

    #[serde(default)]
    pub annotated: Option<bool>,

    #[serde(default)]
    pub dry_run: Option<bool>,
}

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub version_regex: String,
    /// Empty when no assertion is configured
    pub version_assertion_command: String,
    pub version_tag_prefix: String,
    pub commit_override: Option<String>,
    pub check_entire_commit_message: bool,
    pub annotated: bool,
    pub dry_run: bool,
    pub repository: RepoRef,
    /// Commit checked out for the run, used when there is no override
    pub checkout_sha: String,
    pub api_url: String,
}

impl Config {
    /// Configuration with every input at its default
    pub fn new(
        repository: RepoRef,
        checkout_sha: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Config {
            token: token.into(),
            version_regex: DEFAULT_VERSION_REGEX.to_string(),
            version_assertion_command: String::new(),
            version_tag_prefix: String::new(),
            commit_override: None,
            check_entire_commit_message: false,
            annotated: false,
            dry_run: false,
            repository,
            checkout_sha: checkout_sha.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Resolve the run configuration.
    ///
    /// Precedence for each input: `inputs` > `file` > default.
    ///
    /// # Returns
    /// * `Ok(Config)` - Resolved configuration
    /// * `Err` - If the version regex is invalid, the token or repository is missing,
    ///   or no commit can be determined
    pub fn resolve(inputs: &Inputs, file: &FileConfig, context: &RunContext) -> Result<Config> {
        let version_regex =
            string_input(&inputs.version_regex, &file.version_regex, DEFAULT_VERSION_REGEX);
        VersionPattern::compile(&version_regex)?;

        let token = non_empty(&inputs.token)
            .ok_or_else(|| TaggerError::config("Input required and not supplied: token"))?;

        let repository = non_empty(&context.repository)
            .ok_or_else(|| TaggerError::config("GITHUB_REPOSITORY is not set"))?;
        let repository = RepoRef::parse(repository)?;

        let commit_override = non_empty(&inputs.commit)
            .or_else(|| non_empty(&file.commit))
            .map(str::to_string);
        let checkout_sha = non_empty(&context.sha).unwrap_or_default().to_string();
        if commit_override.is_none() && checkout_sha.is_empty() {
            return Err(TaggerError::config(
                "No commit to evaluate: set the commit input or GITHUB_SHA",
            ));
        }

        Ok(Config {
            token: token.to_string(),
            version_regex,
            version_assertion_command: string_input(
                &inputs.version_assertion_command,
                &file.version_assertion_command,
                "",
            ),
            version_tag_prefix: string_input(
                &inputs.version_tag_prefix,
                &file.version_tag_prefix,
                "",
            ),
            commit_override,
            check_entire_commit_message: bool_input(
                &inputs.check_entire_commit_message,
                file.check_entire_commit_message,
            ),
            annotated: bool_input(&inputs.annotated, file.annotated),
            dry_run: bool_input(&inputs.dry_run, file.dry_run),
            repository,
            checkout_sha,
            api_url: non_empty(&context.api_url)
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
        })
    }

    /// The commit evaluated by this run
    pub fn target_sha(&self) -> &str {
        self.commit_override.as_deref().unwrap_or(&self.checkout_sha)
    }

    pub fn checked_text(&self) -> CheckedText {
        CheckedText::from_flag(self.check_entire_commit_message)
    }

    pub fn tag_kind(&self) -> TagKind {
        TagKind::from_flag(self.annotated)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn string_input(input: &Option<String>, file: &Option<String>, default: &str) -> String {
    non_empty(input)
        .or(file.as_deref())
        .unwrap_or(default)
        .to_string()
}

/// Only the exact string `true` enables a boolean input
fn bool_input(input: &Option<String>, file: Option<bool>) -> bool {
    match non_empty(input) {
        Some(value) => value == "true",
        None => file.unwrap_or(false),
    }
}

/// Loads the optional config file.
///
/// Looks at, in order:
/// 1. Custom path provided as parameter
/// 2. `version-tagger.toml` in current directory
/// 3. Nothing: empty file config
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or empty file configuration
/// * `Err` - If the file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        fs::read_to_string(DEFAULT_CONFIG_FILE)?
    } else {
        return Ok(FileConfig::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| TaggerError::config(format!("Invalid config file: {}", e)))
}
