// tests/config_test.rs
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;
use version_tagger::config::{load_config, Config, FileConfig, Inputs, RunContext};
use version_tagger::domain::DEFAULT_VERSION_REGEX;

fn context() -> RunContext {
    RunContext {
        repository: Some("theowner/therepo".to_string()),
        sha: Some("0123456789abcdef".to_string()),
        api_url: None,
    }
}

fn inputs() -> Inputs {
    Inputs {
        token: Some("12345".to_string()),
        ..Inputs::default()
    }
}

#[test]
#[serial]
fn test_load_from_fixture() {
    let file = load_config(Some("tests/fixtures/version-tagger.toml"))
        .expect("Failed to load test config");

    assert_eq!(
        file.version_regex.as_deref(),
        Some(r"Release: ([0-9]+\.[0-9]+\.[0-9]+)")
    );
    assert_eq!(file.version_tag_prefix.as_deref(), Some("v"));
    assert_eq!(file.check_entire_commit_message, Some(true));
    assert_eq!(file.annotated, Some(true));
    assert_eq!(file.dry_run, None);
}

#[test]
#[serial]
fn test_file_values_apply_below_inputs() {
    let file = load_config(Some("tests/fixtures/version-tagger.toml")).unwrap();
    let inputs = Inputs {
        annotated: Some("false".to_string()),
        ..inputs()
    };

    let config = Config::resolve(&inputs, &file, &context()).unwrap();

    assert_eq!(config.version_regex, r"Release: ([0-9]+\.[0-9]+\.[0-9]+)");
    assert_eq!(
        config.version_assertion_command,
        r#"grep -q "version = \"$version\"" Cargo.toml"#
    );
    assert_eq!(config.version_tag_prefix, "v");
    assert!(config.check_entire_commit_message);
    assert!(!config.annotated);
    assert!(!config.dry_run);
}

#[test]
fn test_load_from_temp_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"dry_run = true\n").unwrap();
    temp_file.flush().unwrap();

    let file = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(file.dry_run, Some(true));
    assert_eq!(file.version_regex, None);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"token = \"secret\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: Invalid config file"));
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    assert!(load_config(Some("tests/fixtures/does-not-exist.toml")).is_err());
}

#[test]
#[serial]
fn test_no_file_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let file = load_config(None);

    std::env::set_current_dir(previous).unwrap();
    assert_eq!(file.unwrap(), FileConfig::default());
}

#[test]
#[serial]
fn test_file_discovered_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version-tagger.toml"), "version_tag_prefix = \"rel-\"\n")
        .unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let file = load_config(None);

    std::env::set_current_dir(previous).unwrap();
    assert_eq!(file.unwrap().version_tag_prefix.as_deref(), Some("rel-"));
}

#[test]
fn test_defaults_without_file() {
    let config = Config::resolve(&inputs(), &FileConfig::default(), &context()).unwrap();
    assert_eq!(config.version_regex, DEFAULT_VERSION_REGEX);
    assert_eq!(config.repository.to_string(), "theowner/therepo");
}
