use std::fmt;
use std::path::PathBuf;

use crate::badge::{load_template, render_badge};
use crate::config::{Config, FileSystem};
use crate::coverage::{CommandRunner, CoverageProducer};
use crate::error::{Result, StampliError};

/// What a successful generation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub output_file: PathBuf,
    pub coverage: f64,
}

impl fmt::Display for GenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coverage badge generated: {} ({:.1}% coverage)",
            self.output_file.display(),
            self.coverage
        )
    }
}

/// Render the badge described by `config` and write it to `outputFile`.
///
/// The template is loaded first so a broken template fails before the test
/// command runs. A coverage value in `config` skips the test command.
///
/// # Errors
/// Returns an error if the template cannot be loaded or rendered, coverage
/// cannot be measured, or the badge file cannot be written.
pub fn generate<F, R>(
    config: &Config,
    fs: &F,
    producer: &CoverageProducer<R>,
) -> Result<GenerateReport>
where
    F: FileSystem,
    R: CommandRunner,
{
    let template = load_template(&config.template, fs)?;

    let coverage = match config.coverage {
        Some(coverage) => coverage,
        None => producer.measure(&config.test_command, config.auto_clean)?,
    };

    let badge = render_badge(&template, coverage, &config.levels)?;

    let output_file = PathBuf::from(&config.output_file);
    fs.write(&output_file, &badge).map_err(|source| StampliError::FileWrite {
        path: output_file.clone(),
        source,
    })?;

    Ok(GenerateReport {
        output_file,
        coverage,
    })
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
