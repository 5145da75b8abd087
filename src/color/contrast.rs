//! Text color selection from WCAG relative luminance.
//!
//! See <https://www.w3.org/WAI/GL/wiki/Relative_luminance>. The decision is a
//! single cutoff on luminance, not a contrast-ratio comparison.

use super::hex::rgb_channels;

/// Text color for dark backgrounds.
pub const WHITE: &str = "#ffffff";

/// Text color for light backgrounds.
pub const BLACK: &str = "#000000";

/// Backgrounds brighter than this get black text.
const LIGHT_BACKGROUND_CUTOFF: f64 = 0.5;

/// Linearize one normalized sRGB channel (`0.0..=1.0`).
#[must_use]
pub fn luminance_component(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a hex color, in `0.0..=1.0`.
#[must_use]
pub fn relative_luminance(hex: &str) -> f64 {
    let (r, g, b) = rgb_channels(hex);
    let linear = |channel: u8| luminance_component(f64::from(channel) / 255.0);
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Pick white or black text for the given background color.
#[must_use]
pub fn text_color_for(background: &str) -> &'static str {
    if relative_luminance(background) > LIGHT_BACKGROUND_CUTOFF {
        BLACK
    } else {
        WHITE
    }
}

#[cfg(test)]
#[path = "contrast_tests.rs"]
mod tests;
