//! Badge rendering: coverage, background color and text color filled into an
//! SVG template.

mod default_template;
mod template;

pub use default_template::DEFAULT_TEMPLATE;
pub use template::{Template, load_template};

use crate::color::text_color_for;
use crate::config::Levels;
use crate::error::Result;

/// The three values a badge template can reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeValues {
    /// Coverage with one decimal place, e.g. `85.4`.
    pub coverage: String,
    /// Background color chosen from the levels.
    pub color: String,
    /// `#ffffff` or `#000000`, whichever reads better on `color`.
    pub text_color: String,
}

impl BadgeValues {
    /// Decide the badge colors for a coverage percentage.
    #[must_use]
    pub fn for_coverage(coverage: f64, levels: &Levels) -> Self {
        let color = levels.resolve(coverage);
        Self {
            coverage: format!("{coverage:.1}"),
            color: color.to_string(),
            text_color: text_color_for(color).to_string(),
        }
    }

    /// Look up a value by its template name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "Coverage" => Some(&self.coverage),
            "Color" => Some(&self.color),
            "TextColor" => Some(&self.text_color),
            _ => None,
        }
    }
}

/// Render a badge for `coverage` using `template`.
///
/// # Errors
/// Returns an error if the template is malformed or references an unknown
/// value.
pub fn render_badge(template: &Template, coverage: f64, levels: &Levels) -> Result<String> {
    template.render(&BadgeValues::for_coverage(coverage, levels))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
