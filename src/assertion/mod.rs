//! Optional version assertion
//!
//! Runs a user-supplied shell command with `$version` replaced by the
//! extracted version. Only the exit code counts: 0 passes, anything else
//! fails the run.

pub mod shell;

pub use shell::ShellRunner;

use tracing::debug;

use crate::error::{Result, TaggerError};

/// Placeholder replaced in the assertion command template
pub const VERSION_PLACEHOLDER: &str = "$version";

/// Something that can execute a shell command line and report its exit code
pub trait CommandRunner {
    /// Run `command` to completion and return its exit code
    fn run(&self, command: &str) -> Result<i32>;
}

/// A version assertion command template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionAssertion {
    template: String,
}

impl VersionAssertion {
    /// Returns `None` for an empty template, meaning no assertion is configured
    pub fn new(template: &str) -> Option<Self> {
        if template.is_empty() {
            None
        } else {
            Some(VersionAssertion {
                template: template.to_string(),
            })
        }
    }

    /// The command line with every `$version` replaced by `version`
    pub fn command_for(&self, version: &str) -> String {
        self.template.replace(VERSION_PLACEHOLDER, version)
    }

    /// Run the assertion for `version`
    ///
    /// # Returns
    /// * `Ok(())` - The command exited with code 0
    /// * `Err(VersionAssertionFailed)` - Any other exit code
    /// * `Err` - If the command could not be started
    pub fn check<R: CommandRunner + ?Sized>(&self, runner: &R, version: &str) -> Result<()> {
        let command = self.command_for(version);
        debug!("Running version assertion command: {}", command);

        let code = runner.run(&command)?;
        debug!("Result of version assertion command: {}", code);

        if code != 0 {
            return Err(TaggerError::VersionAssertionFailed {
                version: version.to_string(),
            });
        }

        Ok(())
    }
}
