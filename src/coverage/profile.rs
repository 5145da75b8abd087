//! Parsing of `go tool cover -func` output.

use crate::error::{Result, StampliError};

/// Profile path used when the test command does not name one.
pub const DEFAULT_PROFILE: &str = "coverage.out";

/// Extract the total percentage from `go tool cover -func` output.
///
/// The last line must look like `total:\t(statements)\t87.4%`.
///
/// # Errors
/// Returns `CoverageFormat` if the total line is missing or malformed.
pub fn parse_cover_func_output(output: &str) -> Result<f64> {
    let last_line = output.lines().last().unwrap_or_default();

    if !last_line.starts_with("total:") {
        return Err(StampliError::CoverageFormat(
            "total line missing".to_string(),
        ));
    }

    let fields: Vec<&str> = last_line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(StampliError::CoverageFormat(format!(
            "total line has {} fields, expected 3",
            fields.len()
        )));
    }

    let percentage = fields[2].strip_suffix('%').unwrap_or(fields[2]);
    percentage.parse::<f64>().map_err(|_| {
        StampliError::CoverageFormat(format!("could not parse coverage percentage: {percentage}"))
    })
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
