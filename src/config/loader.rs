use std::path::{Path, PathBuf};

use super::defaults::{DEFAULT_CONFIG, DEFAULT_CONFIG_FILE};
use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{Config, ConfigDocument};
use crate::error::{Result, StampliError};

/// Result of resolving a configuration, with the config file that was used.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    /// The effective configuration.
    pub config: Config,
    /// The config file applied on top of the baseline, if any.
    pub source: Option<PathBuf>,
}

/// Supplies the explicit-override layer, the last and strongest one.
pub trait OverrideSource {
    /// Build the override layer given the configuration resolved so far.
    ///
    /// The returned config replaces `resolved` wholesale, except that an
    /// unset `coverage` keeps the value already in `resolved`.
    ///
    /// # Errors
    /// Returns an error if an override value is malformed.
    fn overrides(&self, resolved: &Config) -> Result<Config>;
}

impl OverrideSource for Config {
    fn overrides(&self, _resolved: &Config) -> Result<Config> {
        Ok(self.clone())
    }
}

/// Resolves the effective configuration from three layers.
///
/// Precedence, lowest first:
/// 1. the built-in baseline document
/// 2. a JSON config file (`stampli.json` unless another path is given)
/// 3. explicit overrides, usually command-line flags
#[derive(Debug)]
pub struct ConfigResolver<F: FileSystem = RealFileSystem> {
    fs: F,
    baseline: String,
    default_path: PathBuf,
}

impl Default for ConfigResolver<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver<RealFileSystem> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_fs(RealFileSystem)
    }
}

impl<F: FileSystem> ConfigResolver<F> {
    #[must_use]
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            baseline: DEFAULT_CONFIG.to_string(),
            default_path: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Replace the built-in baseline document.
    #[must_use]
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Replace the conventional config file path.
    #[must_use]
    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = path.into();
        self
    }

    /// File access shared with other readers, such as template loading.
    #[must_use]
    pub const fn fs(&self) -> &F {
        &self.fs
    }

    /// The config file path used when none is requested.
    #[must_use]
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Resolve the effective configuration.
    ///
    /// `config_path` selects the config file; `None` means the default path.
    /// A missing file at the default path is skipped, but a missing file at
    /// any other path is an error.
    ///
    /// # Errors
    /// Returns an error if the baseline does not parse, the config file is
    /// required but missing, the config file does not parse, or the override
    /// layer fails to build.
    pub fn resolve(
        &self,
        config_path: Option<&Path>,
        overrides: &impl OverrideSource,
    ) -> Result<LoadResult> {
        let mut config = Config::from_baseline(&self.baseline)?;

        let path = config_path.unwrap_or(&self.default_path);
        let source = self.apply_file(&mut config, path)?;

        let layer = overrides.overrides(&config)?;
        config.merge(layer);

        Ok(LoadResult { config, source })
    }

    fn apply_file(&self, config: &mut Config, path: &Path) -> Result<Option<PathBuf>> {
        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(_) if path == self.default_path => return Ok(None),
            Err(source) => {
                return Err(StampliError::ConfigNotFound {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let document =
            ConfigDocument::from_json(&content).map_err(|source| StampliError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.apply(document);

        Ok(Some(path.to_path_buf()))
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
