//! Coverage thresholds and the badge color each one selects.
//!
//! Text form: `90=#00cc00,70=#ffff00,=#ff0000`. An empty threshold means `0`.
//! The same text is used on the command line and as a single string field in
//! the JSON config document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::is_valid_hex;
use crate::error::{Result, StampliError};

/// Color used when coverage is below every configured threshold.
pub const FALLBACK_COLOR: &str = "#ff0001";

/// A single threshold and the color it selects.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub threshold: f64,
    pub color: String,
}

/// Threshold table, kept sorted by ascending threshold with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Levels {
    entries: Vec<Level>,
}

impl Levels {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the color for a threshold.
    ///
    /// The color is stored as given; validation happens in [`Levels::parse`].
    pub fn insert(&mut self, threshold: f64, color: impl Into<String>) {
        let threshold = normalize(threshold);
        let color = color.into();
        match self
            .entries
            .binary_search_by(|level| level.threshold.total_cmp(&threshold))
        {
            Ok(idx) => self.entries[idx].color = color,
            Err(idx) => self.entries.insert(idx, Level { threshold, color }),
        }
    }

    /// Color configured for exactly this threshold.
    #[must_use]
    pub fn get(&self, threshold: f64) -> Option<&str> {
        let threshold = normalize(threshold);
        self.entries
            .iter()
            .find(|level| level.threshold.total_cmp(&threshold).is_eq())
            .map(|level| level.color.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Levels in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.entries.iter()
    }

    /// Parse the comma-separated `threshold=color` form.
    ///
    /// Empty segments are skipped and an empty input yields an empty table.
    ///
    /// # Errors
    /// Returns `InvalidLevelFormat` for a pair without exactly one `=`,
    /// `InvalidLevelNumber` for a non-numeric threshold and `InvalidHexColor`
    /// for a color that is not `#RGB` or `#RRGGBB`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut levels = Self::new();

        for part in text.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            let Some((threshold, color)) = part.split_once('=') else {
                return Err(StampliError::InvalidLevelFormat(part.to_string()));
            };
            if color.contains('=') {
                return Err(StampliError::InvalidLevelFormat(part.to_string()));
            }

            let threshold = threshold.trim();
            let threshold = if threshold.is_empty() {
                0.0
            } else {
                threshold
                    .parse::<f64>()
                    .map_err(|_| StampliError::InvalidLevelNumber(threshold.to_string()))?
            };

            let color = color.trim();
            if !is_valid_hex(color) {
                return Err(StampliError::InvalidHexColor(color.to_string()));
            }

            levels.insert(threshold, color);
        }

        Ok(levels)
    }

    /// Color for a coverage percentage.
    ///
    /// The highest threshold that `coverage` meets or exceeds wins. Below
    /// every threshold, or with no levels at all, [`FALLBACK_COLOR`] is used.
    #[must_use]
    pub fn resolve(&self, coverage: f64) -> &str {
        self.entries
            .iter()
            .rev()
            .find(|level| coverage >= level.threshold)
            .map_or(FALLBACK_COLOR, |level| level.color.as_str())
    }
}

/// `-0` and `0` name the same threshold.
const fn normalize(threshold: f64) -> f64 {
    if threshold == 0.0 { 0.0 } else { threshold }
}

impl FromStr for Levels {
    type Err = StampliError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Formats as `threshold=color` pairs in ascending order.
///
/// Thresholds are printed without decimals, so `85.5` is written as `86`.
impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, level) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{:.0}={}", level.threshold, level.color)?;
        }
        Ok(())
    }
}

impl Serialize for Levels {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Levels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl<S: Into<String>> FromIterator<(f64, S)> for Levels {
    fn from_iter<I: IntoIterator<Item = (f64, S)>>(iter: I) -> Self {
        let mut levels = Self::new();
        for (threshold, color) in iter {
            levels.insert(threshold, color);
        }
        levels
    }
}

impl<'a> IntoIterator for &'a Levels {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "levels_tests.rs"]
mod tests;
