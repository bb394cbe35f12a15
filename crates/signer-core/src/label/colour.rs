use image::Rgb;

use crate::error::{Result, SignerError};

/// Parse `#rrggbb` (the `#` is optional) into an RGB colour.
pub fn parse_hex_colour(s: &str) -> Result<Rgb<u8>> {
    let invalid = || SignerError::InvalidColour(s.to_string());
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
