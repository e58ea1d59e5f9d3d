//! ANSI escape-sequence encoding and decoding for terminal colors.
//!
//! The codec speaks two sequence shapes and nothing else:
//!
//! - True color: `ESC[{38|48};2;{r};{g};{b}m`
//! - Standard color: `ESC[{30-37|90-97|40-47|100-107}m`
//!
//! Encoding is layer- and mode-aware; decoding needs neither argument since
//! both are recoverable from the code prefix (`38` vs `48`, or the standard
//! base ranges). Reset is the universal `ESC[0m`.
//!
//! True-color encoding is gated by a [`TermProfile`]: the capability flags
//! are injected by the caller, and this module never inspects the process
//! environment itself.
//!
//! # Example
//!
//! ```rust
//! use tinge_render::ansi::{AnsiCodec, ColorMode, Layer, TermProfile};
//! use tinge_render::colorspace::Rgb;
//!
//! let codec = AnsiCodec::new(TermProfile::full());
//! let seq = codec
//!     .rgb_to_ansi(Rgb(255, 0, 0), Layer::Foreground, ColorMode::TrueColor)
//!     .unwrap();
//! assert_eq!(seq, "\x1b[38;2;255;0;0m");
//! assert_eq!(AnsiCodec::ansi_to_rgb(&seq).unwrap(), Rgb(255, 0, 0));
//! ```

use crate::colorspace::{Cmyk, Rgb};
use crate::error::ColorError;

/// The universal reset sequence that closes every styled span.
pub const RESET: &str = "\x1b[0m";

/// The 16 conventional standard-palette RGB values, in ANSI index order
/// (8 base colors followed by their bright variants).
pub const STANDARD_PALETTE: [Rgb; 16] = [
    Rgb(0x00, 0x00, 0x00), // black
    Rgb(0x80, 0x00, 0x00), // red
    Rgb(0x00, 0x80, 0x00), // green
    Rgb(0x80, 0x80, 0x00), // yellow
    Rgb(0x00, 0x00, 0x80), // blue
    Rgb(0x80, 0x00, 0x80), // magenta
    Rgb(0x00, 0x80, 0x80), // cyan
    Rgb(0xC0, 0xC0, 0xC0), // white
    Rgb(0x80, 0x80, 0x80), // bright black
    Rgb(0xFF, 0x00, 0x00), // bright red
    Rgb(0x00, 0xFF, 0x00), // bright green
    Rgb(0xFF, 0xFF, 0x00), // bright yellow
    Rgb(0x00, 0x00, 0xFF), // bright blue
    Rgb(0xFF, 0x00, 0xFF), // bright magenta
    Rgb(0x00, 0xFF, 0xFF), // bright cyan
    Rgb(0xFF, 0xFF, 0xFF), // bright white
];

// ─── Layer and mode ─────────────────────────────────────────────────────────

/// Whether a color applies to the text foreground or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Text color (codes 30–37, 90–97, `38;2;…`).
    Foreground,
    /// Fill color behind the text (codes 40–47, 100–107, `48;2;…`).
    Background,
}

impl Layer {
    /// SGR prefix for true-color sequences on this layer.
    pub(crate) fn truecolor_code(self) -> u8 {
        match self {
            Layer::Foreground => 38,
            Layer::Background => 48,
        }
    }

    /// SGR base for standard palette indices 0–7 on this layer.
    pub(crate) fn standard_base(self) -> u8 {
        match self {
            Layer::Foreground => 30,
            Layer::Background => 40,
        }
    }

    /// SGR base for standard palette indices 8–15 on this layer.
    pub(crate) fn bright_base(self) -> u8 {
        match self {
            Layer::Foreground => 90,
            Layer::Background => 100,
        }
    }
}

/// Which of the two supported color modes a sequence uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// One of the 16 standard palette entries.
    Standard,
    /// 24-bit RGB addressing.
    TrueColor,
}

// ─── Capability profile ─────────────────────────────────────────────────────

/// Injected terminal capability flags.
///
/// The codec consults these before emitting true-color sequences; detection
/// itself happens outside this crate (see the facade crate) or in tests,
/// which construct profiles directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermProfile {
    /// Whether the output target renders ANSI colors at all.
    pub colors: bool,
    /// Whether the output target renders 24-bit color sequences.
    pub true_color: bool,
}

impl TermProfile {
    /// Colors and true color both available.
    pub fn full() -> Self {
        TermProfile {
            colors: true,
            true_color: true,
        }
    }

    /// Standard colors only.
    pub fn basic() -> Self {
        TermProfile {
            colors: true,
            true_color: false,
        }
    }

    /// No color support.
    pub fn plain() -> Self {
        TermProfile {
            colors: false,
            true_color: false,
        }
    }
}

// ─── Nearest standard match ─────────────────────────────────────────────────

/// Returns the index (0–15) of the standard palette entry closest to `rgb`.
///
/// Distance is the sum of squared channel differences; on a tie the lowest
/// index wins.
pub fn nearest_standard_index(rgb: Rgb) -> usize {
    let distance = |entry: Rgb| -> u32 {
        let dr = entry.0 as i32 - rgb.0 as i32;
        let dg = entry.1 as i32 - rgb.1 as i32;
        let db = entry.2 as i32 - rgb.2 as i32;
        (dr * dr + dg * dg + db * db) as u32
    };

    let mut best = 0;
    let mut best_distance = distance(STANDARD_PALETTE[0]);
    for (index, entry) in STANDARD_PALETTE.iter().enumerate().skip(1) {
        let d = distance(*entry);
        if d < best_distance {
            best = index;
            best_distance = d;
        }
    }
    best
}

/// Builds a color sequence without any capability check.
///
/// Used for builtin-table construction and by the checked codec methods.
pub(crate) fn encode(rgb: Rgb, layer: Layer, mode: ColorMode) -> String {
    match mode {
        ColorMode::TrueColor => format!(
            "\x1b[{};2;{};{};{}m",
            layer.truecolor_code(),
            rgb.0,
            rgb.1,
            rgb.2
        ),
        ColorMode::Standard => {
            let index = nearest_standard_index(rgb);
            let code = if index < 8 {
                layer.standard_base() + index as u8
            } else {
                layer.bright_base() + (index - 8) as u8
            };
            format!("\x1b[{}m", code)
        }
    }
}

// ─── Codec ──────────────────────────────────────────────────────────────────

/// A decoded color sequence: the color plus the layer and mode it encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedColor {
    /// The color value. For standard sequences this is the palette
    /// entry, an approximation of whatever color was encoded.
    pub rgb: Rgb,
    /// The layer the sequence targets.
    pub layer: Layer,
    /// Whether the sequence was standard or true color.
    pub mode: ColorMode,
}

/// Encoder/decoder between color values and ANSI escape sequences.
///
/// Encoding methods take `&self` because true-color output depends on the
/// injected [`TermProfile`]; decoding is stateless and exposed as
/// associated functions.
#[derive(Debug, Clone)]
pub struct AnsiCodec {
    profile: TermProfile,
}

impl AnsiCodec {
    /// Creates a codec for the given capability profile.
    pub fn new(profile: TermProfile) -> Self {
        AnsiCodec { profile }
    }

    /// The capability profile this codec was built with.
    pub fn profile(&self) -> TermProfile {
        self.profile
    }

    fn check_mode(&self, mode: ColorMode) -> Result<(), ColorError> {
        if mode == ColorMode::TrueColor && !self.profile.true_color {
            return Err(ColorError::UnsupportedMode);
        }
        Ok(())
    }

    /// Encodes an RGB color for the given layer and mode.
    ///
    /// In standard mode the color is first mapped to the nearest palette
    /// entry (see [`nearest_standard_index`]).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedMode`] for a true-color request
    /// when the profile lacks true-color support.
    pub fn rgb_to_ansi(&self, rgb: Rgb, layer: Layer, mode: ColorMode) -> Result<String, ColorError> {
        self.check_mode(mode)?;
        Ok(encode(rgb, layer, mode))
    }

    /// Encodes a `#RRGGBB` HEX code for the given layer and mode.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for a malformed HEX code and
    /// [`ColorError::UnsupportedMode`] as for [`rgb_to_ansi`](Self::rgb_to_ansi).
    pub fn hex_to_ansi(&self, hex: &str, layer: Layer, mode: ColorMode) -> Result<String, ColorError> {
        let rgb = Rgb::from_hex(hex)?;
        self.rgb_to_ansi(rgb, layer, mode)
    }

    /// Encodes a CMYK color for the given layer and mode.
    ///
    /// The color is converted through RGB first, using the crate-wide
    /// rounding policy.
    pub fn cmyk_to_ansi(
        &self,
        cmyk: Cmyk,
        layer: Layer,
        mode: ColorMode,
    ) -> Result<String, ColorError> {
        self.rgb_to_ansi(cmyk.to_rgb(), layer, mode)
    }

    /// Decodes a color escape sequence into its structured form.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] when the input is not framed
    /// as `ESC[…m` with a numeric payload, and
    /// [`ColorError::UnrecognizedSequence`] when the payload is well
    /// framed but not a single standard or true-color code (reset, effect
    /// codes, 256-color, and multi-attribute payloads all land here).
    pub fn decode(sequence: &str) -> Result<DecodedColor, ColorError> {
        let payload = sequence
            .strip_prefix("\x1b[")
            .and_then(|rest| rest.strip_suffix('m'))
            .ok_or_else(|| ColorError::InvalidFormat {
                value: sequence.to_string(),
            })?;
        if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit() || b == b';') {
            return Err(ColorError::InvalidFormat {
                value: sequence.to_string(),
            });
        }

        let unrecognized = || ColorError::UnrecognizedSequence {
            sequence: sequence.to_string(),
        };

        let parts: Vec<&str> = payload.split(';').collect();
        match parts.as_slice() {
            [code, mode, r, g, b] if *mode == "2" && (*code == "38" || *code == "48") => {
                let layer = if *code == "38" {
                    Layer::Foreground
                } else {
                    Layer::Background
                };
                let channel = |text: &str| -> Result<u8, ColorError> {
                    text.parse::<u16>()
                        .ok()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(unrecognized)
                };
                Ok(DecodedColor {
                    rgb: Rgb(channel(r)?, channel(g)?, channel(b)?),
                    layer,
                    mode: ColorMode::TrueColor,
                })
            }
            [code] => {
                let n: u16 = code.parse().map_err(|_| unrecognized())?;
                let (layer, index) = match n {
                    30..=37 => (Layer::Foreground, (n - 30) as usize),
                    90..=97 => (Layer::Foreground, (n - 90 + 8) as usize),
                    40..=47 => (Layer::Background, (n - 40) as usize),
                    100..=107 => (Layer::Background, (n - 100 + 8) as usize),
                    _ => return Err(unrecognized()),
                };
                Ok(DecodedColor {
                    rgb: STANDARD_PALETTE[index],
                    layer,
                    mode: ColorMode::Standard,
                })
            }
            _ => Err(unrecognized()),
        }
    }

    /// Decodes a color sequence to its RGB value.
    pub fn ansi_to_rgb(sequence: &str) -> Result<Rgb, ColorError> {
        Ok(Self::decode(sequence)?.rgb)
    }

    /// Decodes a color sequence to a `#RRGGBB` HEX code.
    ///
    /// Standard sequences decode to the palette entry's HEX value, which
    /// approximates whatever color was originally encoded.
    pub fn ansi_to_hex(sequence: &str) -> Result<String, ColorError> {
        Ok(Self::decode(sequence)?.rgb.to_hex())
    }

    /// Decodes a color sequence to CMYK.
    pub fn ansi_to_cmyk(sequence: &str) -> Result<Cmyk, ColorError> {
        Ok(Self::decode(sequence)?.rgb.to_cmyk())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // Nearest standard match
    // =====================================================================

    #[test]
    fn nearest_index_exact_entries() {
        assert_eq!(nearest_standard_index(Rgb(0, 0, 0)), 0);
        assert_eq!(nearest_standard_index(Rgb(255, 0, 0)), 9);
        assert_eq!(nearest_standard_index(Rgb(255, 255, 255)), 15);
        assert_eq!(nearest_standard_index(Rgb(0x80, 0x00, 0x00)), 1);
    }

    #[test]
    fn nearest_index_tie_break_prefers_lowest() {
        // (64,0,0) is equidistant from black (0,0,0) and red (128,0,0).
        assert_eq!(nearest_standard_index(Rgb(64, 0, 0)), 0);
    }

    #[test]
    fn nearest_index_approximate_color() {
        // A washed-out near-white lands on white/silver, not bright white.
        assert_eq!(nearest_standard_index(Rgb(0xC0, 0xC5, 0xBE)), 7);
    }

    // =====================================================================
    // Encoding
    // =====================================================================

    #[test]
    fn truecolor_foreground_encoding() {
        let codec = AnsiCodec::new(TermProfile::full());
        assert_eq!(
            codec
                .rgb_to_ansi(Rgb(10, 20, 30), Layer::Foreground, ColorMode::TrueColor)
                .unwrap(),
            "\x1b[38;2;10;20;30m"
        );
    }

    #[test]
    fn truecolor_background_encoding() {
        let codec = AnsiCodec::new(TermProfile::full());
        assert_eq!(
            codec
                .rgb_to_ansi(Rgb(255, 0, 0), Layer::Background, ColorMode::TrueColor)
                .unwrap(),
            "\x1b[48;2;255;0;0m"
        );
    }

    #[test]
    fn standard_encoding_uses_base_codes() {
        let codec = AnsiCodec::new(TermProfile::basic());
        assert_eq!(
            codec
                .hex_to_ansi("#000000", Layer::Background, ColorMode::Standard)
                .unwrap(),
            "\x1b[40m"
        );
        assert_eq!(
            codec
                .rgb_to_ansi(Rgb(255, 0, 0), Layer::Foreground, ColorMode::Standard)
                .unwrap(),
            "\x1b[91m"
        );
    }

    #[test]
    fn truecolor_requires_capability() {
        let codec = AnsiCodec::new(TermProfile::basic());
        assert_eq!(
            codec.rgb_to_ansi(Rgb(1, 2, 3), Layer::Foreground, ColorMode::TrueColor),
            Err(ColorError::UnsupportedMode)
        );
        assert_eq!(
            codec.hex_to_ansi("#0048BA", Layer::Background, ColorMode::TrueColor),
            Err(ColorError::UnsupportedMode)
        );
    }

    #[test]
    fn standard_encoding_never_needs_true_color() {
        let codec = AnsiCodec::new(TermProfile::plain());
        assert!(codec
            .rgb_to_ansi(Rgb(1, 2, 3), Layer::Foreground, ColorMode::Standard)
            .is_ok());
    }

    #[test]
    fn hex_to_ansi_rejects_bad_hex() {
        let codec = AnsiCodec::new(TermProfile::full());
        assert!(matches!(
            codec.hex_to_ansi("#12", Layer::Foreground, ColorMode::TrueColor),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn cmyk_to_ansi_goes_through_rgb() {
        let codec = AnsiCodec::new(TermProfile::full());
        let seq = codec
            .cmyk_to_ansi(
                Cmyk::new(0.0, 1.0, 1.0, 0.0).unwrap(),
                Layer::Foreground,
                ColorMode::TrueColor,
            )
            .unwrap();
        assert_eq!(seq, "\x1b[38;2;255;0;0m");
    }

    // =====================================================================
    // Decoding
    // =====================================================================

    #[test]
    fn decode_truecolor_roundtrip() {
        let codec = AnsiCodec::new(TermProfile::full());
        let seq = codec
            .rgb_to_ansi(Rgb(255, 0, 0), Layer::Foreground, ColorMode::TrueColor)
            .unwrap();
        assert_eq!(AnsiCodec::ansi_to_rgb(&seq).unwrap(), Rgb(255, 0, 0));
    }

    #[test]
    fn decode_recovers_layer_and_mode() {
        let decoded = AnsiCodec::decode("\x1b[48;2;12;34;56m").unwrap();
        assert_eq!(decoded.layer, Layer::Background);
        assert_eq!(decoded.mode, ColorMode::TrueColor);
        assert_eq!(decoded.rgb, Rgb(12, 34, 56));

        let decoded = AnsiCodec::decode("\x1b[31m").unwrap();
        assert_eq!(decoded.layer, Layer::Foreground);
        assert_eq!(decoded.mode, ColorMode::Standard);
    }

    #[test]
    fn decode_standard_black_background() {
        // Encoding #000000 as a standard background and decoding it lands
        // on the palette's black entry.
        let codec = AnsiCodec::new(TermProfile::basic());
        let seq = codec
            .hex_to_ansi("#000000", Layer::Background, ColorMode::Standard)
            .unwrap();
        assert_eq!(AnsiCodec::ansi_to_hex(&seq).unwrap(), "#000000");
    }

    #[test]
    fn decode_bright_ranges() {
        assert_eq!(
            AnsiCodec::ansi_to_rgb("\x1b[97m").unwrap(),
            Rgb(255, 255, 255)
        );
        assert_eq!(
            AnsiCodec::decode("\x1b[101m").unwrap().layer,
            Layer::Background
        );
    }

    #[test]
    fn decode_rejects_unframed_input() {
        assert!(matches!(
            AnsiCodec::decode("plain text"),
            Err(ColorError::InvalidFormat { .. })
        ));
        assert!(matches!(
            AnsiCodec::decode("\x1b[38;2;1;2;3"),
            Err(ColorError::InvalidFormat { .. })
        ));
        assert!(matches!(
            AnsiCodec::decode("\x1b[m"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn decode_rejects_non_color_payloads() {
        for seq in ["\x1b[0m", "\x1b[1m", "\x1b[4m", "\x1b[39m", "\x1b[108m"] {
            assert!(matches!(
                AnsiCodec::decode(seq),
                Err(ColorError::UnrecognizedSequence { .. })
            ));
        }
    }

    #[test]
    fn decode_rejects_multi_attribute_payloads() {
        assert!(matches!(
            AnsiCodec::decode("\x1b[1;31m"),
            Err(ColorError::UnrecognizedSequence { .. })
        ));
        assert!(matches!(
            AnsiCodec::decode("\x1b[38;5;100m"),
            Err(ColorError::UnrecognizedSequence { .. })
        ));
    }

    #[test]
    fn decode_rejects_overflowing_channels() {
        assert!(matches!(
            AnsiCodec::decode("\x1b[38;2;256;0;0m"),
            Err(ColorError::UnrecognizedSequence { .. })
        ));
    }

    #[test]
    fn ansi_to_cmyk_through_palette() {
        let cmyk = AnsiCodec::ansi_to_cmyk("\x1b[40m").unwrap();
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 1.0));
    }
}
