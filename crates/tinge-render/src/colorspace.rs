//! Numeric color-space conversions between HEX, RGB, and CMYK.
//!
//! All conversions are pure and produce new values; the types here never
//! mutate in place. The conversions obey two round-trip guarantees:
//!
//! - RGB → HEX → RGB is exact.
//! - RGB → CMYK → RGB is exact up to ±1 per channel (rounding tolerance).
//!
//! # Rounding policy
//!
//! Every float→integer channel conversion rounds to the nearest integer
//! with ties away from zero ([`f64::round`]). This is the single rounding
//! rule used across the crate.
//!
//! # Example
//!
//! ```rust
//! use tinge_render::colorspace::Rgb;
//!
//! let rgb = Rgb::from_hex("#FF7F50").unwrap();
//! assert_eq!(rgb, Rgb(255, 127, 80));
//! assert_eq!(rgb.to_hex(), "#FF7F50");
//!
//! let cmyk = rgb.to_cmyk();
//! let back = cmyk.to_rgb();
//! assert!((back.0 as i16 - 255).abs() <= 1);
//! ```

use crate::error::ColorError;

// ─── RGB ────────────────────────────────────────────────────────────────────

/// An RGB color triplet with 8-bit channels.
///
/// Channel bounds are enforced by the `u8` type; an out-of-range RGB value
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a `#RRGGBB` HEX code (the `#` prefix is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless the input is exactly
    /// six hexadecimal digits after the optional prefix.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat {
                value: hex.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            // Validated above; the slice is always two hex digits.
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };
        Ok(Rgb(channel(0..2), channel(2..4), channel(4..6)))
    }

    /// Formats this color as an uppercase `#RRGGBB` HEX code.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Converts this color to CMYK using the standard subtractive model.
    ///
    /// Pure black maps to `(0, 0, 0, 1)` rather than dividing by zero.
    pub fn to_cmyk(self) -> Cmyk {
        if self == Rgb(0, 0, 0) {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }

        let c = 1.0 - self.0 as f64 / 255.0;
        let m = 1.0 - self.1 as f64 / 255.0;
        let y = 1.0 - self.2 as f64 / 255.0;
        let k = c.min(m).min(y);

        Cmyk {
            c: (c - k) / (1.0 - k),
            m: (m - k) / (1.0 - k),
            y: (y - k) / (1.0 - k),
            k,
        }
    }
}

// ─── CMYK ───────────────────────────────────────────────────────────────────

/// A CMYK color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    /// Cyan fraction.
    pub c: f64,
    /// Magenta fraction.
    pub m: f64,
    /// Yellow fraction.
    pub y: f64,
    /// Key (black) fraction.
    pub k: f64,
}

impl Cmyk {
    /// Creates a CMYK value, validating each component against `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] naming the first component that
    /// falls outside the valid range.
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Result<Self, ColorError> {
        for (component, value) in [("cyan", c), ("magenta", m), ("yellow", y), ("key", k)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::OutOfRange { component, value });
            }
        }
        Ok(Cmyk { c, m, y, k })
    }

    /// Converts this color to RGB.
    ///
    /// Each channel is `255 * (1 - component) * (1 - k)`, rounded to the
    /// nearest integer with ties away from zero.
    pub fn to_rgb(self) -> Rgb {
        let channel = |component: f64| (255.0 * (1.0 - component) * (1.0 - self.k)).round() as u8;
        Rgb(channel(self.c), channel(self.m), channel(self.y))
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =====================================================================
    // HEX parsing
    // =====================================================================

    #[test]
    fn from_hex_with_prefix() {
        assert_eq!(Rgb::from_hex("#FF6B35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb(0, 0, 0));
        assert_eq!(Rgb::from_hex("#ffffff").unwrap(), Rgb(255, 255, 255));
    }

    #[test]
    fn from_hex_without_prefix() {
        assert_eq!(Rgb::from_hex("7CB9E8").unwrap(), Rgb(124, 185, 232));
    }

    #[test]
    fn from_hex_mixed_case() {
        assert_eq!(Rgb::from_hex("#fF6b35").unwrap(), Rgb(255, 107, 53));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#ffff").is_err());
        assert!(Rgb::from_hex("#1234567").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("#12 456").is_err());
        assert!(matches!(
            Rgb::from_hex("#zzzzzz"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    // =====================================================================
    // HEX formatting
    // =====================================================================

    #[test]
    fn to_hex_is_uppercase_and_padded() {
        assert_eq!(Rgb(255, 107, 53).to_hex(), "#FF6B35");
        assert_eq!(Rgb(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb(1, 2, 3).to_hex(), "#010203");
    }

    // =====================================================================
    // CMYK construction
    // =====================================================================

    #[test]
    fn cmyk_new_accepts_bounds() {
        assert!(Cmyk::new(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(Cmyk::new(1.0, 1.0, 1.0, 1.0).is_ok());
        assert!(Cmyk::new(0.7, 0.1, 1.0, 0.5).is_ok());
    }

    #[test]
    fn cmyk_new_rejects_out_of_range() {
        assert_eq!(
            Cmyk::new(1.1, 0.0, 0.0, 0.0),
            Err(ColorError::OutOfRange {
                component: "cyan",
                value: 1.1
            })
        );
        assert!(Cmyk::new(0.0, -0.1, 0.0, 0.0).is_err());
        assert!(Cmyk::new(0.0, 0.0, 2.0, 0.0).is_err());
        assert!(Cmyk::new(0.0, 0.0, 0.0, -1.0).is_err());
    }

    // =====================================================================
    // RGB ↔ CMYK
    // =====================================================================

    #[test]
    fn black_maps_to_pure_key() {
        let cmyk = Rgb(0, 0, 0).to_cmyk();
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn white_maps_to_zero_ink() {
        let cmyk = Rgb(255, 255, 255).to_cmyk();
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn pure_red_cmyk() {
        let cmyk = Rgb(255, 0, 0).to_cmyk();
        assert!((cmyk.c - 0.0).abs() < 1e-9);
        assert!((cmyk.m - 1.0).abs() < 1e-9);
        assert!((cmyk.y - 1.0).abs() < 1e-9);
        assert!((cmyk.k - 0.0).abs() < 1e-9);
    }

    #[test]
    fn cmyk_to_rgb_rounds_to_nearest() {
        // 255 * (1 - 0.5) * (1 - 0.0) = 127.5 → ties away from zero → 128
        let rgb = Cmyk::new(0.5, 0.0, 1.0, 0.0).unwrap().to_rgb();
        assert_eq!(rgb, Rgb(128, 255, 0));
    }

    #[test]
    fn cmyk_full_key_is_black() {
        let rgb = Cmyk::new(0.0, 0.0, 0.0, 1.0).unwrap().to_rgb();
        assert_eq!(rgb, Rgb(0, 0, 0));
    }

    // =====================================================================
    // Round-trip properties
    // =====================================================================

    proptest! {
        #[test]
        fn rgb_hex_roundtrip_is_exact(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let rgb = Rgb(r, g, b);
            prop_assert_eq!(Rgb::from_hex(&rgb.to_hex()).unwrap(), rgb);
        }

        #[test]
        fn rgb_cmyk_roundtrip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let rgb = Rgb(r, g, b);
            let back = rgb.to_cmyk().to_rgb();
            prop_assert!((back.0 as i16 - r as i16).abs() <= 1);
            prop_assert!((back.1 as i16 - g as i16).abs() <= 1);
            prop_assert!((back.2 as i16 - b as i16).abs() <= 1);
        }

        #[test]
        fn cmyk_components_stay_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let cmyk = Rgb(r, g, b).to_cmyk();
            for value in [cmyk.c, cmyk.m, cmyk.y, cmyk.k] {
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }
    }
}
