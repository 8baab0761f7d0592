//! Pure formatting of GitHub Actions workflow commands and output files.
//!
//! Nothing here performs I/O; see the parent module for emission.

const DELIMITER_BASE: &str = "ghadelimiter";

/// Escape the data part of a workflow command
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format `::command key=value,...::message`
pub fn workflow_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let properties = properties
        .iter()
        .map(|(key, value)| format!("{}={}", key, escape_property(value)))
        .collect::<Vec<_>>()
        .join(",");

    if properties.is_empty() {
        format!("::{}::{}", command, escape_data(message))
    } else {
        format!("::{} {}::{}", command, properties, escape_data(message))
    }
}

/// A heredoc delimiter that does not occur in `value`
pub fn delimiter_for(value: &str) -> String {
    let mut delimiter = DELIMITER_BASE.to_string();
    let mut suffix = 0u32;
    while value.contains(&delimiter) {
        suffix += 1;
        delimiter = format!("{}_{}", DELIMITER_BASE, suffix);
    }
    delimiter
}

/// One `name<<DELIM` block for the `GITHUB_OUTPUT` file
pub fn output_block(name: &str, value: &str) -> String {
    let delimiter = delimiter_for(value);
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("50% done\r\nnext"), "50%25 done%0D%0Anext");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c"), "a%3Ab%2Cc");
    }

    #[test]
    fn test_workflow_command_without_properties() {
        assert_eq!(
            workflow_command("error", &[], "Version assertion failed\nfor 1.0.0"),
            "::error::Version assertion failed%0Afor 1.0.0"
        );
    }

    #[test]
    fn test_workflow_command_with_properties() {
        assert_eq!(
            workflow_command("set-output", &[("name", "tag")], "v1.2.3"),
            "::set-output name=tag::v1.2.3"
        );
    }

    #[test]
    fn test_output_block() {
        assert_eq!(
            output_block("message", "line one\nline two"),
            "message<<ghadelimiter\nline one\nline two\nghadelimiter\n"
        );
    }

    #[test]
    fn test_output_block_empty_value() {
        assert_eq!(output_block("tag", ""), "tag<<ghadelimiter\n\nghadelimiter\n");
    }

    #[test]
    fn test_delimiter_avoids_value_content() {
        let value = "contains ghadelimiter and ghadelimiter_1";
        let delimiter = delimiter_for(value);
        assert_eq!(delimiter, "ghadelimiter_2");
        assert!(!value.contains(&delimiter));
    }
}
