use std::path::PathBuf;

use super::*;

fn make_output(use_colors: bool) -> ErrorOutput {
    ErrorOutput::with_colors(use_colors)
}

fn render(out: &ErrorOutput, err: &StampliError) -> String {
    let mut buf = Vec::new();
    out.write(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Config", "invalid levels", None, None);
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(result, "✖ Config: invalid levels\n");
}

#[test]
fn error_without_colors_full() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        "Levels",
        "abc",
        Some("invalid float literal"),
        Some("Levels look like \"80=#44cc11\""),
    );
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(
        result,
        "✖ Levels: abc\n  × invalid float literal\n  help: Levels look like \"80=#44cc11\"\n"
    );
}

#[test]
fn multi_line_detail_is_indented() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        "Command",
        "go test ./...",
        Some("Output: --- FAIL: TestA\nFAIL"),
        None,
    );
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("  × Output: --- FAIL: TestA\n"));
    assert!(result.contains("  × FAIL\n"));
}

#[test]
fn error_with_colors_contains_ansi() {
    let out = make_output(true);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Config", "test error", Some("d"), Some("s"));
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("\x1b["));
    assert!(result.contains("✖ Config:"));
    assert!(result.contains("test error"));
    assert!(result.contains("× d"));
    assert!(result.contains("help:"));
}

#[test]
fn writes_crate_error_with_type_detail_and_suggestion() {
    let err = StampliError::FileRead {
        path: PathBuf::from("badge.tmpl"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let result = render(&make_output(false), &err);

    assert!(result.starts_with("✖ FileRead: badge.tmpl\n"));
    assert!(result.contains("  × no such file\n"));
    assert!(result.contains("  help: Check that the file path exists\n"));
}

#[test]
fn writes_crate_error_without_detail() {
    let result = render(&make_output(false), &StampliError::EmptyCommand);
    assert!(result.starts_with("✖ Command: Empty test command\n"));
    assert!(!result.contains('×'));
}

#[test]
fn new_with_always_mode() {
    let out = ErrorOutput::new(ColorMode::Always);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Test", "msg", None, None);
    assert!(String::from_utf8(buf).unwrap().contains("\x1b["));
}

#[test]
fn new_with_never_mode() {
    let out = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Test", "msg", None, None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Test: msg\n");
}
