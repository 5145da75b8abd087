use std::cell::RefCell;
use std::collections::VecDeque;

use tempfile::TempDir;

use super::*;
use crate::coverage::CommandOutput;

/// Replays canned outputs and records every invocation.
struct ScriptedRunner {
    outputs: RefCell<VecDeque<CommandOutput>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    fn new(outputs: Vec<CommandOutput>) -> Self {
        Self {
            outputs: RefCell::new(outputs.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for &ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let mut call = program.to_string();
        for arg in args {
            call.push(' ');
            call.push_str(arg);
        }
        self.calls.borrow_mut().push(call);
        Ok(self.outputs.borrow_mut().pop_front().unwrap_or_default())
    }
}

fn ok(stdout: &str) -> CommandOutput {
    CommandOutput {
        success: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

fn failed(stdout: &str, stderr: &str) -> CommandOutput {
    CommandOutput {
        success: false,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}

#[test]
fn profile_path_defaults_to_coverage_out() {
    let producer = CoverageProducer::new();
    assert_eq!(producer.profile_path("go test ./..."), PathBuf::from("coverage.out"));
}

#[test]
fn profile_path_uses_coverprofile_flag() {
    let producer = CoverageProducer::new();
    assert_eq!(
        producer.profile_path("go test ./... -coverprofile=build/cover.prof -race"),
        PathBuf::from("build/cover.prof")
    );
}

#[test]
fn measure_runs_command_then_summarizes_profile() {
    let runner = ScriptedRunner::new(vec![
        ok("ok  \tgithub.com/acme/widget\t0.01s\n"),
        ok("total:\t(statements)\t72.5%\n"),
    ]);
    let producer = CoverageProducer::with_runner(&runner);

    let coverage = producer
        .measure("go test ./... -coverprofile=cov.out", false)
        .unwrap();

    assert!((coverage - 72.5).abs() < f64::EPSILON);
    assert_eq!(
        runner.calls(),
        vec![
            "go test ./... -coverprofile=cov.out".to_string(),
            "go tool cover -func=cov.out".to_string(),
        ]
    );
}

#[test]
fn measure_splits_on_any_whitespace() {
    let runner = ScriptedRunner::new(vec![ok(""), ok("total:\t(statements)\t50.0%")]);
    let producer = CoverageProducer::with_runner(&runner);

    producer.measure("  make \t coverage  ", false).unwrap();

    assert_eq!(runner.calls()[0], "make coverage");
    assert_eq!(runner.calls()[1], "go tool cover -func=coverage.out");
}

#[test]
fn empty_command_is_an_error() {
    let runner = ScriptedRunner::new(vec![]);
    let producer = CoverageProducer::with_runner(&runner);

    for command in ["", "   "] {
        let err = producer.measure(command, false).unwrap_err();
        assert!(matches!(err, StampliError::EmptyCommand));
    }
    assert!(runner.calls().is_empty());
}

#[test]
fn failing_test_command_reports_output() {
    let runner = ScriptedRunner::new(vec![failed("--- FAIL: TestParse\n", "exit status 1\n")]);
    let producer = CoverageProducer::with_runner(&runner);

    let err = producer.measure("go test ./...", false).unwrap_err();

    match err {
        StampliError::TestCommandFailed { command, output } => {
            assert_eq!(command, "go test ./...");
            assert!(output.contains("FAIL: TestParse"));
            assert!(output.contains("exit status 1"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn failing_cover_tool_is_a_format_error() {
    let runner = ScriptedRunner::new(vec![ok(""), failed("", "open coverage.out: no such file")]);
    let producer = CoverageProducer::with_runner(&runner);

    let err = producer.measure("go test ./...", false).unwrap_err();

    assert!(matches!(err, StampliError::CoverageFormat(ref msg) if msg.contains("no such file")));
}

#[test]
fn auto_clean_removes_profile() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("cover.out");
    std::fs::write(&profile, "mode: set\n").unwrap();

    let runner = ScriptedRunner::new(vec![ok(""), ok("total:\t(statements)\t90.0%")]);
    let producer = CoverageProducer::with_runner(&runner);
    let command = format!("go test ./... -coverprofile={}", profile.display());

    let coverage = producer.measure(&command, true).unwrap();

    assert!((coverage - 90.0).abs() < f64::EPSILON);
    assert!(!profile.exists());
}

#[test]
fn auto_clean_disabled_keeps_profile() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("cover.out");
    std::fs::write(&profile, "mode: set\n").unwrap();

    let runner = ScriptedRunner::new(vec![ok(""), ok("total:\t(statements)\t90.0%")]);
    let producer = CoverageProducer::with_runner(&runner);
    let command = format!("go test ./... -coverprofile={}", profile.display());

    producer.measure(&command, false).unwrap();

    assert!(profile.exists());
}

#[test]
fn auto_clean_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("never-written.out");

    let runner = ScriptedRunner::new(vec![ok(""), ok("total:\t(statements)\t90.0%")]);
    let producer = CoverageProducer::with_runner(&runner);
    let command = format!("go test ./... -coverprofile={}", profile.display());

    let err = producer.measure(&command, true).unwrap_err();

    assert!(matches!(err, StampliError::FileRemove { ref path, .. } if *path == profile));
}

#[test]
fn summarize_error_wins_over_cleanup_error() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("never-written.out");

    let runner = ScriptedRunner::new(vec![ok(""), ok("no total here")]);
    let producer = CoverageProducer::with_runner(&runner);
    let command = format!("go test ./... -coverprofile={}", profile.display());

    let err = producer.measure(&command, true).unwrap_err();

    assert!(matches!(err, StampliError::CoverageFormat(_)));
}
