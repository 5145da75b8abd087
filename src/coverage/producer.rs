use std::path::PathBuf;

use regex::Regex;

use super::command::{CommandRunner, SystemRunner};
use super::profile::{DEFAULT_PROFILE, parse_cover_func_output};
use crate::error::{Result, StampliError};

/// Runs the test command and reads the total coverage from its profile.
#[derive(Debug)]
pub struct CoverageProducer<R: CommandRunner = SystemRunner> {
    runner: R,
    profile_pattern: Regex,
}

impl Default for CoverageProducer<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageProducer<SystemRunner> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl<R: CommandRunner> CoverageProducer<R> {
    #[must_use]
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            profile_pattern: Regex::new(r"-coverprofile=(\S+)").expect("Invalid regex"),
        }
    }

    /// Coverage profile written by `command`: the `-coverprofile=` value, or
    /// `coverage.out` when the command does not set one.
    #[must_use]
    pub fn profile_path(&self, command: &str) -> PathBuf {
        self.profile_pattern
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map_or_else(|| PathBuf::from(DEFAULT_PROFILE), |m| PathBuf::from(m.as_str()))
    }

    /// Run `command` and return the total coverage percentage.
    ///
    /// The command is split on whitespace without shell quoting rules. With
    /// `auto_clean`, the profile is deleted once it has been read.
    ///
    /// # Errors
    /// Returns an error if the command is empty, cannot start or fails, if
    /// the profile cannot be summarized, or if cleanup fails.
    pub fn measure(&self, command: &str, auto_clean: bool) -> Result<f64> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(StampliError::EmptyCommand)?;
        let args: Vec<&str> = parts.collect();

        let output = self.runner.run(program, &args)?;
        if !output.success {
            return Err(StampliError::TestCommandFailed {
                command: command.to_string(),
                output: output.combined(),
            });
        }

        let profile = self.profile_path(command);
        let coverage = self.summarize(&profile);

        if auto_clean {
            let removed = std::fs::remove_file(&profile);
            // A summarize failure is the more useful error to report.
            if let (Ok(_), Err(source)) = (&coverage, removed) {
                return Err(StampliError::FileRemove {
                    path: profile,
                    source,
                });
            }
        }

        coverage
    }

    fn summarize(&self, profile: &std::path::Path) -> Result<f64> {
        let func_arg = format!("-func={}", profile.display());
        let output = self.runner.run("go", &["tool", "cover", &func_arg])?;
        if !output.success {
            return Err(StampliError::CoverageFormat(format!(
                "go tool cover failed for {}: {}",
                profile.display(),
                output.stderr.trim()
            )));
        }
        parse_cover_func_output(&output.stdout)
    }
}

#[cfg(test)]
#[path = "producer_tests.rs"]
mod tests;
