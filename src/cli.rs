use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, Levels, OverrideSource};
use crate::error::Result;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "stampli")]
#[command(author, version, about = "Generate an SVG coverage badge")]
#[command(long_about = "Runs the test command, reads the total coverage and renders an SVG badge \
    colored by the configured levels.\n\n\
    Settings are read from the built-in defaults, then stampli.json (or --config), \
    then these flags.\n\n\
    Exit codes:\n  \
    0 - Badge generated\n  \
    1 - Coverage, template or output error\n  \
    2 - Configuration or argument error")]
pub struct Cli {
    /// Command to run tests and generate coverage
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// Output SVG file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Path to JSON configuration file [default: stampli.json]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Custom SVG template: a file path or inline SVG
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Coverage levels and colors, e.g. "80=#44cc11,60=#dfb317,=#e05d44"
    #[arg(long, value_name = "LEVELS")]
    pub levels: Option<String>,

    /// Coverage percentage to use directly (skips running tests)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub coverage: Option<f64>,

    /// Dump the default SVG template to stdout and exit
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub dump_template: Option<bool>,

    /// Dump the default configuration to stdout and exit
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub dump_config: Option<bool>,

    /// Suppress output messages (only errors will be printed)
    #[arg(short, long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub quiet: Option<bool>,

    /// Remove the coverage profile after generating the badge
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub auto_clean: Option<bool>,

    /// Print resolution details to stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Control color output for errors
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

/// Flags form the override layer. A flag that was not given carries the
/// value resolved from the baseline and config file, so the whole-document
/// merge only changes what was passed on the command line.
impl OverrideSource for Cli {
    fn overrides(&self, resolved: &Config) -> Result<Config> {
        let levels = match &self.levels {
            Some(text) => Levels::parse(text)?,
            None => resolved.levels.clone(),
        };

        Ok(Config {
            test_command: pick(self.command.as_ref(), &resolved.test_command),
            output_file: pick(self.output.as_ref(), &resolved.output_file),
            template: pick(self.template.as_ref(), &resolved.template),
            levels,
            dump_template: self.dump_template.unwrap_or(resolved.dump_template),
            dump_config: self.dump_config.unwrap_or(resolved.dump_config),
            quiet: self.quiet.unwrap_or(resolved.quiet),
            auto_clean: self.auto_clean.unwrap_or(resolved.auto_clean),
            coverage: self.coverage,
        })
    }
}

fn pick(flag: Option<&String>, resolved: &str) -> String {
    flag.map_or_else(|| resolved.to_string(), Clone::clone)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
