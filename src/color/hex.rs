//! Validation and expansion of `#RGB` / `#RRGGBB` color tokens.

/// Check if a token is a valid hex color (`#RGB` or `#RRGGBB`).
///
/// Validation is purely syntactic and never expands the short form.
#[must_use]
pub fn is_valid_hex(token: &str) -> bool {
    let Some(digits) = token.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expand a color to its six-digit form, without the leading `#`.
///
/// `#abc` becomes `aabbcc`. Any other length is returned unchanged.
#[must_use]
pub fn expand_hex(token: &str) -> String {
    let digits = token.strip_prefix('#').unwrap_or(token);
    if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    }
}

/// Parse the red, green and blue channels of a color token.
///
/// Channels that are missing or not valid hex read as `0`, so callers that
/// skipped validation still get a value.
#[must_use]
pub fn rgb_channels(token: &str) -> (u8, u8, u8) {
    let digits = expand_hex(token);
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
#[path = "hex_tests.rs"]
mod tests;
