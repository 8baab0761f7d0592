//! CI-facing output: failure annotations and step outputs.
//!
//! Separates concerns:
//! - `formatter` - Pure workflow-command and output-file formatting
//! - This module - Writing them to stdout or the `GITHUB_OUTPUT` file
//!
//! Diagnostics go through `tracing`; stdout carries only workflow commands.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod formatter;

pub use formatter::{escape_data, escape_property, output_block, workflow_command};

/// Report the run's failure to the CI system
pub fn display_error(message: &str) {
    println!("{}", workflow_command("error", &[], message));
}

/// Where step outputs are published
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Append heredoc blocks to the file named by `GITHUB_OUTPUT`
    File(PathBuf),
    /// Legacy `::set-output` commands on stdout
    Stdout,
}

impl OutputTarget {
    /// Use the output file when one is configured
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => OutputTarget::File(path),
            _ => OutputTarget::Stdout,
        }
    }

    /// Publish `(name, value)` pairs
    ///
    /// # Returns
    /// * `Ok(())` - All outputs written
    /// * `Err` - If the output file cannot be opened or written
    pub fn publish(&self, outputs: &[(&str, &str)]) -> io::Result<()> {
        match self {
            OutputTarget::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                write_output_blocks(&mut file, outputs)
            }
            OutputTarget::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                for (name, value) in outputs {
                    writeln!(
                        handle,
                        "{}",
                        workflow_command("set-output", &[("name", *name)], value)
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Write one heredoc block per output
pub fn write_output_blocks<W: Write>(writer: &mut W, outputs: &[(&str, &str)]) -> io::Result<()> {
    for (name, value) in outputs {
        writer.write_all(output_block(name, value).as_bytes())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_path() {
        assert_eq!(OutputTarget::from_path(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_path(Some(PathBuf::new())),
            OutputTarget::Stdout
        );
        assert_eq!(
            OutputTarget::from_path(Some(PathBuf::from("/tmp/out"))),
            OutputTarget::File(PathBuf::from("/tmp/out"))
        );
    }

    #[test]
    fn test_write_output_blocks() {
        let mut buffer = Vec::new();
        write_output_blocks(&mut buffer, &[("tag", "v1.0.0"), ("commit", "abc")]).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "tag<<ghadelimiter\nv1.0.0\nghadelimiter\ncommit<<ghadelimiter\nabc\nghadelimiter\n"
        );
    }

    #[test]
    fn test_publish_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "existing<<ghadelimiter\nx\nghadelimiter\n").unwrap();

        OutputTarget::File(path.clone())
            .publish(&[("tag", "")])
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing<<"));
        assert!(content.ends_with("tag<<ghadelimiter\n\nghadelimiter\n"));
    }
}
