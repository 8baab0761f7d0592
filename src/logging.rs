//! Logging configuration
//!
//! Initializes tracing for the step. Logs go to stderr so stdout only carries
//! workflow commands.

use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is not set
pub fn default_level(runner_debug: bool) -> &'static str {
    if runner_debug {
        "debug"
    } else {
        "info"
    }
}

/// Initializes logging; `runner_debug` mirrors the runner's debug mode
pub fn init_logging(runner_debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(runner_debug)));

    // A subscriber may already be installed (tests, embedding)
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "info");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(false);
        init_logging(true);
    }
}
