use version_tagger::boundary::BoundaryNotice;
use version_tagger::domain::CheckedText;

// ============================================================================
// BoundaryNotice Display Tests
// ============================================================================

#[test]
fn test_no_match_notice_names_title() {
    let notice = BoundaryNotice::NoVersionMatch {
        checked: CheckedText::Title,
        pattern: r"^[0-9]+\.[0-9]+\.[0-9]+$".to_string(),
        text: "this commit title will not match".to_string(),
    };

    assert_eq!(
        notice.to_string(),
        r"Commit title does not match version regex '^[0-9]+\.[0-9]+\.[0-9]+$': 'this commit title will not match'"
    );
}

#[test]
fn test_no_match_notice_names_message() {
    let notice = BoundaryNotice::NoVersionMatch {
        checked: CheckedText::Message,
        pattern: "Version: (.+)".to_string(),
        text: "Some commit title\n\nBlah blah".to_string(),
    };

    let display_msg = notice.to_string();
    assert!(
        display_msg.starts_with("Commit message does not match"),
        "Message should name the checked text, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("Blah blah"),
        "Message should contain the checked text, got: {}",
        display_msg
    );
}
