use std::process::Command;

use crate::assertion::CommandRunner;
use crate::error::Result;

/// Exit code reported when the process was killed by a signal
const SIGNALED_EXIT_CODE: i32 = -1;

/// Runs commands through `bash -c`, inheriting stdout and stderr
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new() -> Self {
        ShellRunner {
            shell: "bash".to_string(),
        }
    }

    /// Use another shell accepting `-c <command>`
    pub fn with_shell(shell: impl Into<String>) -> Self {
        ShellRunner {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<i32> {
        let status = Command::new(&self.shell).arg("-c").arg(command).status()?;

        Ok(status.code().unwrap_or(SIGNALED_EXIT_CODE))
    }
}
