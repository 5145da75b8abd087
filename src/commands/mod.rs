//! Top-level run: resolve settings, then dump a built-in asset or generate
//! the badge.

mod dump;
mod generate;

pub use dump::{DumpKind, write_dump};
pub use generate::{GenerateReport, generate};

use std::io::Write;

use crate::badge::BadgeValues;
use crate::cli::{Cli, ColorChoice};
use crate::config::{ConfigResolver, FileSystem};
use crate::coverage::{CommandRunner, CoverageProducer};
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS, Result, StampliError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Exit code for a failed run.
#[must_use]
pub const fn exit_code_for(err: &StampliError) -> i32 {
    match err {
        StampliError::EmbeddedConfig(_)
        | StampliError::ConfigNotFound { .. }
        | StampliError::ConfigParse { .. }
        | StampliError::InvalidLevelFormat(_)
        | StampliError::InvalidLevelNumber(_)
        | StampliError::InvalidHexColor(_) => EXIT_CONFIG_ERROR,
        _ => EXIT_FAILURE,
    }
}

/// Run with the real file system and process runner, reporting errors on
/// stderr.
#[must_use]
pub fn run(cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(color_choice_to_mode(cli.color));
    let resolver = ConfigResolver::new();
    let producer = CoverageProducer::new();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    match run_impl(cli, &resolver, &producer, &mut stdout, &mut stderr) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            errors.write(&mut stderr, &e);
            exit_code_for(&e)
        }
    }
}

/// Resolve the configuration for `cli` and act on it.
///
/// Status lines go to `out`; `--verbose` notes go to `diag`.
///
/// # Errors
/// Returns the first error from resolution, coverage, rendering or output.
pub fn run_impl<F, R, O, D>(
    cli: &Cli,
    resolver: &ConfigResolver<F>,
    producer: &CoverageProducer<R>,
    out: &mut O,
    diag: &mut D,
) -> Result<()>
where
    F: FileSystem,
    R: CommandRunner,
    O: Write,
    D: Write,
{
    let loaded = resolver.resolve(cli.config.as_deref(), cli)?;
    let config = loaded.config;

    if cli.verbose > 0 {
        match &loaded.source {
            Some(path) => writeln!(diag, "Using config: {}", path.display())?,
            None => writeln!(diag, "No config file found, using built-in defaults")?,
        }
    }
    if cli.verbose > 1 {
        writeln!(diag, "Effective config:\n{}", config.to_json_pretty()?)?;
    }

    if let Some(kind) = DumpKind::requested(&config) {
        return write_dump(kind, out);
    }

    let report = generate(&config, resolver.fs(), producer)?;

    if cli.verbose > 0 {
        let values = BadgeValues::for_coverage(report.coverage, &config.levels);
        writeln!(
            diag,
            "Coverage {}% -> background {}, text {}",
            values.coverage, values.color, values.text_color
        )?;
    }
    if !config.quiet {
        writeln!(out, "{report}")?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
