use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StampliError {
    #[error("Failed to load embedded defaults: {0}")]
    EmbeddedConfig(#[source] serde_json::Error),

    #[error("Failed to load config file {}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid level format: {0} (expected format: level=color)")]
    InvalidLevelFormat(String),

    #[error("Invalid level number: {0}")]
    InvalidLevelNumber(String),

    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove file: {}", path.display())]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty test command")]
    EmptyCommand,

    #[error("Failed to start command: {program}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Test command failed: {command}")]
    TestCommandFailed { command: String, output: String },

    #[error("Invalid coverage file format: {0}")]
    CoverageFormat(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl StampliError {
    /// Short category name used as the error headline.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::EmbeddedConfig(_) | Self::ConfigNotFound { .. } | Self::ConfigParse { .. } => {
                "Config"
            }
            Self::InvalidLevelFormat(_)
            | Self::InvalidLevelNumber(_)
            | Self::InvalidHexColor(_) => "Levels",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::FileRemove { .. } => "FileRemove",
            Self::EmptyCommand | Self::CommandSpawn { .. } | Self::TestCommandFailed { .. } => {
                "Command"
            }
            Self::CoverageFormat(_) => "Coverage",
            Self::Template(_) => "Template",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The error message without its category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidLevelFormat(msg)
            | Self::InvalidLevelNumber(msg)
            | Self::InvalidHexColor(msg)
            | Self::CoverageFormat(msg)
            | Self::Template(msg) => msg.clone(),
            Self::ConfigNotFound { path, .. }
            | Self::ConfigParse { path, .. }
            | Self::FileRead { path, .. }
            | Self::FileWrite { path, .. }
            | Self::FileRemove { path, .. } => path.display().to_string(),
            Self::CommandSpawn { program, .. } => program.clone(),
            Self::TestCommandFailed { command, .. } => command.clone(),
            _ => self.to_string(),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::EmbeddedConfig(source)
            | Self::ConfigParse { source, .. }
            | Self::JsonSerialize(source) => Some(source.to_string()),
            Self::ConfigNotFound { source, .. }
            | Self::FileRead { source, .. }
            | Self::FileWrite { source, .. }
            | Self::FileRemove { source, .. }
            | Self::CommandSpawn { source, .. }
            | Self::Io(source) => Some(source.to_string()),
            Self::TestCommandFailed { output, .. } if !output.trim().is_empty() => {
                Some(format!("Output: {}", output.trim_end()))
            }
            _ => None,
        }
    }

    /// Actionable hint for the user, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigParse { .. } => {
                Some("Check the config file format; run with --dump-config to see an example")
            }
            Self::EmbeddedConfig(_) => Some("The binary was built with a broken default config"),
            Self::ConfigNotFound { .. } => {
                Some("Check that the file path exists, or omit --config to use the default")
            }
            Self::InvalidLevelFormat(_)
            | Self::InvalidLevelNumber(_)
            | Self::InvalidHexColor(_) => {
                Some("Levels look like \"80=#44cc11,60=#dfb317,=#e05d44\"")
            }
            Self::FileRead { source, .. }
            | Self::FileWrite { source, .. }
            | Self::FileRemove { source, .. }
            | Self::Io(source) => io_suggestion(source.kind()),
            Self::EmptyCommand => Some("Set testCommand in the config or pass --command"),
            Self::CommandSpawn { .. } => Some("Check that the test command is installed and on PATH"),
            Self::TestCommandFailed { .. } => {
                Some("Fix the failing tests, or pass --coverage to skip running them")
            }
            Self::CoverageFormat(_) => {
                Some("Make sure the test command writes a coverage profile (-coverprofile=...)")
            }
            Self::Template(_) => {
                Some("Templates may use {{.Coverage}}, {{.Color}} and {{.TextColor}}")
            }
            Self::JsonSerialize(_) => None,
        }
    }
}

const fn io_suggestion(kind: std::io::ErrorKind) -> Option<&'static str> {
    match kind {
        std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
        std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
        std::io::ErrorKind::InvalidData => Some("The file may be corrupted or not UTF-8 text"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, StampliError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
