//! Hex color strings.
//!
//! Accepts `RRGGBB` / `RRGGBBAA` with an optional leading `#`, digits in
//! either case. Channels come back as [`Vec3`] / [`Vec4`] in `[0, 1]`.
//!
//! # Example
//!
//! ```rust
//! use tessera_color::{hex_to_rgb, rgb_to_hex};
//!
//! let rgb = hex_to_rgb("#8AA139")?;
//! assert_eq!(rgb_to_hex(rgb), "#8AA139");
//! assert!(hex_to_rgb("#8AA").is_err());
//! # Ok::<(), tessera_color::ColorError>(())
//! ```

use crate::{ColorError, ColorResult};
use tessera_math::{Vec3, Vec4};
use tracing::debug;

/// Parses exactly `N` hex byte pairs after an optional `#`.
fn parse_channels<const N: usize>(input: &str) -> ColorResult<[u8; N]> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    if digits.len() != N * 2 {
        return Err(ColorError::invalid_hex(
            input,
            format!("expected {} hex digits, got {}", N * 2, digits.len()),
        ));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(input, "non-hex character"));
    }

    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        // all-ASCII was checked above, so byte slicing is on char boundaries
        *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|e| ColorError::invalid_hex(input, e.to_string()))?;
    }
    Ok(out)
}

/// Parses `#RRGGBB` (or `RRGGBB`) to RGB in `[0, 1]`.
///
/// # Errors
///
/// [`ColorError::InvalidHex`] if the string is not six hex digits after
/// stripping an optional `#`.
pub fn hex_to_rgb(hex: &str) -> ColorResult<Vec3> {
    let [r, g, b] = parse_channels::<3>(hex).inspect_err(|e| debug!(%e, "hex_to_rgb"))?;
    Ok(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
}

/// Parses `#RRGGBBAA` (or `RRGGBBAA`) to RGBA in `[0, 1]`.
///
/// # Errors
///
/// [`ColorError::InvalidHex`] if the string is not eight hex digits after
/// stripping an optional `#`.
pub fn hex_to_rgba(hex: &str) -> ColorResult<Vec4> {
    let [r, g, b, a] = parse_channels::<4>(hex).inspect_err(|e| debug!(%e, "hex_to_rgba"))?;
    Ok(Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0)
}

#[inline]
fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Formats RGB in `[0, 1]` as uppercase `#RRGGBB`. Channels are clamped.
pub fn rgb_to_hex(rgb: Vec3) -> String {
    format!("#{:02X}{:02X}{:02X}", to_byte(rgb.r()), to_byte(rgb.g()), to_byte(rgb.b()))
}

/// Formats RGBA in `[0, 1]` as uppercase `#RRGGBBAA`. Channels are clamped.
pub fn rgba_to_hex(rgba: Vec4) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        to_byte(rgba.r()),
        to_byte(rgba.g()),
        to_byte(rgba.b()),
        to_byte(rgba.a())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rgb255(r: f32, g: f32, b: f32) -> Vec3 {
        Vec3::new(r, g, b) / 255.0
    }

    #[test]
    fn test_hex_to_rgb() {
        let cases = [
            ("#FF0000", rgb255(255.0, 0.0, 0.0)),
            ("00FF00", rgb255(0.0, 255.0, 0.0)),
            ("#0000ff", rgb255(0.0, 0.0, 255.0)),
            ("#8AA139", rgb255(138.0, 161.0, 57.0)),
            ("#0ADBBB", rgb255(10.0, 219.0, 187.0)),
            ("#B7AFF1", rgb255(183.0, 175.0, 241.0)),
            ("3D2F36", rgb255(61.0, 47.0, 54.0)),
        ];
        for (hex, expected) in cases {
            assert_abs_diff_eq!(hex_to_rgb(hex).unwrap(), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_hex_to_rgba() {
        let cases = [
            ("#FF0000FF", [255.0, 0.0, 0.0, 255.0]),
            ("0000FFFF", [0.0, 0.0, 255.0, 255.0]),
            ("#8AA13980", [138.0, 161.0, 57.0, 128.0]),
            ("#0ADBBB40", [10.0, 219.0, 187.0, 64.0]),
            ("#B7AFF19A", [183.0, 175.0, 241.0, 154.0]),
            ("#3D2F360C", [61.0, 47.0, 54.0, 12.0]),
        ];
        for (hex, [r, g, b, a]) in cases {
            let expected = Vec4::new(r, g, b, a) / 255.0;
            assert_abs_diff_eq!(hex_to_rgba(hex).unwrap(), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_wrong_length() {
        let err = hex_to_rgb("#FFF").unwrap_err();
        assert_eq!(
            err,
            ColorError::invalid_hex("#FFF", "expected 6 hex digits, got 3")
        );
        assert!(hex_to_rgb("#8AA13980").is_err());
        assert!(hex_to_rgba("#8AA139").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn test_bad_digits() {
        assert!(hex_to_rgb("#GG0000").unwrap_err().is_invalid_hex());
        assert!(hex_to_rgb("##FF000").is_err());
        // multi-byte chars must not panic on slicing
        assert!(hex_to_rgb("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(rgb_to_hex(rgb255(138.0, 161.0, 57.0)), "#8AA139");
        assert_eq!(rgb_to_hex(Vec3::new(2.0, -1.0, 0.5)), "#FF0080");
        assert_eq!(rgba_to_hex(hex_to_rgba("#0adbbb40").unwrap()), "#0ADBBB40");
    }
}
