//! Hex color tokens and the text-contrast heuristic used for badge labels.

mod contrast;
mod hex;

pub use contrast::{BLACK, WHITE, luminance_component, relative_luminance, text_color_for};
pub use hex::{expand_hex, is_valid_hex, rgb_channels};
