use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use version_tagger::assertion::ShellRunner;
use version_tagger::cli::{run_workflow, RunOutcome};
use version_tagger::config::{self, Config, Inputs, RunContext};
use version_tagger::github::GitHubClient;
use version_tagger::logging;
use version_tagger::ui::{self, OutputTarget};

#[derive(clap::Parser)]
#[command(
    name = "version-tagger",
    version,
    about = "Create a tag when a commit message carries a version"
)]
struct Args {
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true, help = "Hosting API token")]
    token: Option<String>,

    #[arg(long, env = "INPUT_VERSION_REGEX", help = "Pattern the commit must match")]
    version_regex: Option<String>,

    #[arg(
        long,
        env = "INPUT_VERSION_ASSERTION_COMMAND",
        help = "Shell command checking the version; $version is substituted"
    )]
    version_assertion_command: Option<String>,

    #[arg(long, env = "INPUT_VERSION_TAG_PREFIX", help = "Prefix of the tag name")]
    version_tag_prefix: Option<String>,

    #[arg(long, env = "INPUT_COMMIT", help = "Commit to evaluate instead of the checkout")]
    commit: Option<String>,

    #[arg(
        long,
        env = "INPUT_CHECK_ENTIRE_COMMIT_MESSAGE",
        help = "Match the whole message instead of the title ('true'/'false')"
    )]
    check_entire_commit_message: Option<String>,

    #[arg(long, env = "INPUT_ANNOTATED", help = "Create an annotated tag ('true'/'false')")]
    annotated: Option<String>,

    #[arg(
        long,
        env = "INPUT_DRY_RUN",
        help = "Report the tag without creating it ('true'/'false')"
    )]
    dry_run: Option<String>,

    #[arg(short, long, env = "VERSION_TAGGER_CONFIG", help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, env = "GITHUB_REPOSITORY", help = "Repository as owner/repo")]
    repository: Option<String>,

    #[arg(long, env = "GITHUB_SHA", help = "Commit checked out for the run")]
    sha: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", help = "Hosting API base URL")]
    api_url: Option<String>,

    #[arg(long, env = "GITHUB_OUTPUT", help = "File receiving the step outputs")]
    output_file: Option<PathBuf>,

    #[arg(long, env = "RUNNER_DEBUG", hide = true)]
    runner_debug: Option<String>,
}

impl Args {
    fn inputs(&self) -> Inputs {
        Inputs {
            token: self.token.clone(),
            version_regex: self.version_regex.clone(),
            version_assertion_command: self.version_assertion_command.clone(),
            version_tag_prefix: self.version_tag_prefix.clone(),
            commit: self.commit.clone(),
            check_entire_commit_message: self.check_entire_commit_message.clone(),
            annotated: self.annotated.clone(),
            dry_run: self.dry_run.clone(),
        }
    }

    fn context(&self) -> RunContext {
        RunContext {
            repository: self.repository.clone(),
            sha: self.sha.clone(),
            api_url: self.api_url.clone(),
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                logging::init_logging(false);
                // Args are unavailable, so read the output file location directly
                let output =
                    OutputTarget::from_path(std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from));
                let message = e.to_string();
                let message = message.lines().next().unwrap_or_default();
                return finish(&output, Err(anyhow::anyhow!(message.to_string())));
            }
        },
    };
    logging::init_logging(args.runner_debug.as_deref() == Some("1"));

    let output = OutputTarget::from_path(args.output_file.clone());

    let result = panic::catch_unwind(AssertUnwindSafe(|| run(&args)))
        .unwrap_or_else(|payload| Err(anyhow::anyhow!(panic_message(payload.as_ref()))));

    finish(&output, result)
}

/// Report the run's result and publish outputs, empty on failure
fn finish(output: &OutputTarget, result: Result<RunOutcome>) -> ExitCode {
    let (outcome, exit_code) = match result {
        Ok(outcome) => (outcome, ExitCode::SUCCESS),
        Err(e) => {
            ui::display_error(&e.to_string());
            (RunOutcome::empty(), ExitCode::FAILURE)
        }
    };

    if let Err(e) = output.publish(&outcome.outputs()) {
        ui::display_error(&format!("Failed to publish outputs: {}", e));
        return ExitCode::FAILURE;
    }

    exit_code
}

fn run(args: &Args) -> Result<RunOutcome> {
    let file = config::load_config(args.config.as_deref())?;
    let config = Config::resolve(&args.inputs(), &file, &args.context())?;

    let client = GitHubClient::new(&config.api_url, &config.token)?;
    let outcome = run_workflow(&config, &client, &ShellRunner::new())?;

    Ok(outcome)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unexpected failure".to_string()
    }
}
