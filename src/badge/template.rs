//! Named-placeholder templates.
//!
//! Placeholders are written `{{.Name}}` or `{{ Name }}`. The engine only
//! substitutes values; there are no conditionals or loops.

use std::path::Path;

use regex::Regex;

use super::BadgeValues;
use super::default_template::DEFAULT_TEMPLATE;
use crate::config::FileSystem;
use crate::error::{Result, StampliError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Value(String),
}

/// A parsed template, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    ///
    /// # Errors
    /// Returns a `Template` error if a `{{` does not open a well-formed
    /// placeholder.
    pub fn parse(text: &str) -> Result<Self> {
        let placeholder =
            Regex::new(r"\{\{\s*\.?([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("Invalid regex");

        let mut segments = Vec::new();
        let mut last = 0;
        for caps in placeholder.captures_iter(text) {
            let whole = caps.get_match();
            push_text(&mut segments, &text[last..whole.start()])?;
            segments.push(Segment::Value(caps[1].to_string()));
            last = whole.end();
        }
        push_text(&mut segments, &text[last..])?;

        Ok(Self { segments })
    }

    /// Names referenced by the template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Value(name) => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Fill the placeholders with badge values.
    ///
    /// # Errors
    /// Returns a `Template` error if a placeholder names an unknown value.
    pub fn render(&self, values: &BadgeValues) -> Result<String> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Value(name) => {
                    let value = values.get(name).ok_or_else(|| {
                        StampliError::Template(format!("unknown value \"{name}\""))
                    })?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }
}

fn push_text(segments: &mut Vec<Segment>, text: &str) -> Result<()> {
    if let Some(pos) = text.find("{{") {
        let snippet: String = text[pos..].chars().take(24).collect();
        return Err(StampliError::Template(format!(
            "malformed placeholder near \"{snippet}\""
        )));
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
    Ok(())
}

/// Load the template selected by the `template` setting.
///
/// Empty selects the built-in template. Text starting with `<` is used as
/// inline SVG. Anything else is a path to a template file.
///
/// # Errors
/// Returns `FileRead` if the template file cannot be read, or a `Template`
/// error if it does not parse.
pub fn load_template(setting: &str, fs: &impl FileSystem) -> Result<Template> {
    if setting.is_empty() {
        return Template::parse(DEFAULT_TEMPLATE);
    }
    if setting.trim_start().starts_with('<') {
        return Template::parse(setting);
    }

    let path = Path::new(setting);
    let content = fs
        .read_to_string(path)
        .map_err(|source| StampliError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    Template::parse(&content)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
