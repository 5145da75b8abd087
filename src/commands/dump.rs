use std::io::Write;

use crate::badge::DEFAULT_TEMPLATE;
use crate::config::{Config, DEFAULT_CONFIG};
use crate::error::Result;

/// A built-in asset printed instead of generating a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpKind {
    Template,
    Config,
}

impl DumpKind {
    /// The dump requested by `config`, if any. The template wins when both
    /// are set.
    #[must_use]
    pub const fn requested(config: &Config) -> Option<Self> {
        if config.dump_template {
            Some(Self::Template)
        } else if config.dump_config {
            Some(Self::Config)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn contents(self) -> &'static str {
        match self {
            Self::Template => DEFAULT_TEMPLATE,
            Self::Config => DEFAULT_CONFIG,
        }
    }
}

/// Write the built-in asset verbatim.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_dump<W: Write>(kind: DumpKind, out: &mut W) -> Result<()> {
    out.write_all(kind.contents().as_bytes())?;
    out.flush()?;
    Ok(())
}
