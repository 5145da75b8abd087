use serde::{Deserialize, Serialize};

use super::levels::Levels;
use crate::error::{Result, StampliError};

/// Effective configuration for one badge run.
///
/// Serializes to the same camelCase document that [`ConfigDocument`] reads.
/// `coverage` is never part of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Command that runs the tests and writes a coverage profile.
    pub test_command: String,

    /// Where the rendered badge is written.
    pub output_file: String,

    /// Inline SVG template or path to one. Empty selects the built-in template.
    pub template: String,

    /// Coverage thresholds and their colors.
    pub levels: Levels,

    /// Print the built-in template and exit.
    pub dump_template: bool,

    /// Print the built-in configuration and exit.
    pub dump_config: bool,

    /// Suppress the success message.
    pub quiet: bool,

    /// Remove the coverage profile after reading it.
    pub auto_clean: bool,

    /// Coverage percentage to use instead of running the test command.
    #[serde(skip)]
    pub coverage: Option<f64>,
}

/// A configuration document as read from JSON.
///
/// Every field is optional so that applying a document only touches the
/// fields it actually names. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub test_command: Option<String>,
    pub output_file: Option<String>,
    pub template: Option<String>,
    pub levels: Option<Levels>,
    pub dump_template: Option<bool>,
    pub dump_config: Option<bool>,
    pub quiet: Option<bool>,
    pub auto_clean: Option<bool>,
}

impl ConfigDocument {
    /// Parse a JSON configuration document.
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON, a field has the wrong
    /// type, or `levels` is not a valid threshold table.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl Config {
    /// Build a configuration from the built-in baseline document.
    ///
    /// # Errors
    /// Returns `EmbeddedConfig` if the baseline does not parse.
    pub fn from_baseline(baseline: &str) -> Result<Self> {
        let document = ConfigDocument::from_json(baseline).map_err(StampliError::EmbeddedConfig)?;
        let mut config = Self::default();
        config.apply(document);
        Ok(config)
    }

    /// Overwrite the fields named by `document`, leaving the rest untouched.
    pub fn apply(&mut self, document: ConfigDocument) {
        let ConfigDocument {
            test_command,
            output_file,
            template,
            levels,
            dump_template,
            dump_config,
            quiet,
            auto_clean,
        } = document;

        if let Some(test_command) = test_command {
            self.test_command = test_command;
        }
        if let Some(output_file) = output_file {
            self.output_file = output_file;
        }
        if let Some(template) = template {
            self.template = template;
        }
        if let Some(levels) = levels {
            self.levels = levels;
        }
        if let Some(dump_template) = dump_template {
            self.dump_template = dump_template;
        }
        if let Some(dump_config) = dump_config {
            self.dump_config = dump_config;
        }
        if let Some(quiet) = quiet {
            self.quiet = quiet;
        }
        if let Some(auto_clean) = auto_clean {
            self.auto_clean = auto_clean;
        }
    }

    /// Merge an explicit-override layer on top of this configuration.
    ///
    /// Every field is replaced by the value in `other`, including empty
    /// strings, `false` and an empty level table. `coverage` is the exception:
    /// it is only replaced when `other` sets it.
    pub fn merge(&mut self, other: Self) {
        let coverage = other.coverage.or(self.coverage);
        *self = Self { coverage, ..other };
    }

    /// Pretty JSON form of the persisted fields.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
