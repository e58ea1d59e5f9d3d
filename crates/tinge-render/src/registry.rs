//! Named style registries: colors per layer, effects, and the bundle that
//! groups them.
//!
//! Registries are plain owned values; there is no process-wide table.
//! Construct an empty registry, or a default-populated one via the
//! `with_builtins` constructors, and pass it wherever it is needed. Nothing
//! here locks: callers sharing a registry across threads serialize access
//! themselves.
//!
//! Standard and true-color entries occupy independent partitions of the
//! name space: `"red"` may exist once as a standard color and once as a
//! true color, but re-adding within a partition is an error, never a
//! silent overwrite. Built-in entries are ordinary entries: they can be
//! removed through the same path as custom ones.
//!
//! # Example
//!
//! ```rust
//! use tinge_render::ansi::ColorMode;
//! use tinge_render::registry::StyleBook;
//!
//! let mut book = StyleBook::with_builtins();
//! let red = book.foreground.get("red", ColorMode::Standard).unwrap();
//! assert_eq!(red, "\x1b[31m");
//!
//! book.foreground
//!     .add("rust", "\x1b[38;2;183;65;14m", ColorMode::TrueColor)
//!     .unwrap();
//! assert!(book.foreground.is_true_color("rust"));
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ansi::{encode, AnsiCodec, ColorMode, Layer};
use crate::colorspace::Rgb;
use crate::error::RegistryError;

/// Standard palette names, in ANSI index order (0–15).
const STANDARD_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

/// Built-in named true colors, hex values sourced from Wikipedia's named
/// color lists.
const NAMED_TRUE_COLORS: &[(&str, Rgb)] = &[
    ("absolute_zero", Rgb(0x00, 0x48, 0xBA)),
    ("acid_green", Rgb(0xB0, 0xBF, 0x1A)),
    ("aero", Rgb(0x7C, 0xB9, 0xE8)),
    ("african_violet", Rgb(0xB2, 0x84, 0xBE)),
    ("air_superiority_blue", Rgb(0x72, 0xA0, 0xC1)),
    ("alabaster", Rgb(0xED, 0xEA, 0xE0)),
    ("amaranth", Rgb(0xE5, 0x2B, 0x50)),
    ("amber", Rgb(0xFF, 0xBF, 0x00)),
    ("amethyst", Rgb(0x99, 0x66, 0xCC)),
    ("apricot", Rgb(0xFB, 0xCE, 0xB1)),
    ("aquamarine", Rgb(0x7F, 0xFF, 0xD4)),
    ("azure", Rgb(0x00, 0x7F, 0xFF)),
    ("baby_blue", Rgb(0x89, 0xCF, 0xF0)),
    ("beige", Rgb(0xF5, 0xF5, 0xDC)),
    ("bittersweet", Rgb(0xFE, 0x6F, 0x5E)),
    ("blush", Rgb(0xDE, 0x5D, 0x83)),
    ("bronze", Rgb(0xCD, 0x7F, 0x32)),
    ("burgundy", Rgb(0x80, 0x00, 0x20)),
    ("burnt_sienna", Rgb(0xE9, 0x74, 0x51)),
    ("byzantine", Rgb(0xBD, 0x33, 0xA4)),
    ("cadet_blue", Rgb(0x5F, 0x9E, 0xA0)),
    ("camel", Rgb(0xC1, 0x9A, 0x6B)),
    ("capri", Rgb(0x00, 0xBF, 0xFF)),
    ("cardinal", Rgb(0xC4, 0x1E, 0x3A)),
    ("carmine", Rgb(0x96, 0x00, 0x18)),
    ("celadon", Rgb(0xAC, 0xE1, 0xAF)),
    ("cerulean", Rgb(0x00, 0x7B, 0xA7)),
    ("champagne", Rgb(0xF7, 0xE7, 0xCE)),
    ("charcoal", Rgb(0x36, 0x45, 0x4F)),
    ("chartreuse", Rgb(0xDF, 0xFF, 0x00)),
    ("chestnut", Rgb(0x95, 0x45, 0x35)),
    ("cinnabar", Rgb(0xE3, 0x42, 0x34)),
    ("citrine", Rgb(0xE4, 0xD0, 0x0A)),
    ("cobalt_blue", Rgb(0x00, 0x47, 0xAB)),
    ("coral", Rgb(0xFF, 0x7F, 0x50)),
    ("cordovan", Rgb(0x89, 0x3F, 0x45)),
    ("cornflower_blue", Rgb(0x64, 0x95, 0xED)),
    ("cosmic_latte", Rgb(0xFF, 0xF8, 0xE7)),
    ("crimson", Rgb(0xDC, 0x14, 0x3C)),
    ("cyclamen", Rgb(0xF5, 0x6F, 0xA1)),
];

/// Built-in effect names and their SGR codes.
const EFFECTS: &[(&str, &str)] = &[
    ("bold", "\x1b[1m"),
    ("dim", "\x1b[2m"),
    ("italic", "\x1b[3m"),
    ("underline", "\x1b[4m"),
    ("blink", "\x1b[5m"),
    ("monospace", "\x1b[7m"),
    ("strikethrough", "\x1b[9m"),
];

/// A standard (non-true-color) entry is any single numeric SGR sequence.
static NUMERIC_SEQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\x1b\[\d{1,3}m$").expect("valid pattern"));

// ─── Color registry ─────────────────────────────────────────────────────────

/// Name → escape-sequence table for one layer, split into standard and
/// true-color partitions.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    layer: Layer,
    standard: BTreeMap<String, String>,
    true_color: BTreeMap<String, String>,
}

impl ColorRegistry {
    /// Creates an empty registry for the given layer.
    pub fn new(layer: Layer) -> Self {
        ColorRegistry {
            layer,
            standard: BTreeMap::new(),
            true_color: BTreeMap::new(),
        }
    }

    /// Creates a registry pre-populated with the 16 standard colors and
    /// the built-in named true colors for the given layer.
    pub fn with_builtins(layer: Layer) -> Self {
        let mut registry = Self::new(layer);
        for (index, name) in STANDARD_NAMES.iter().enumerate() {
            let code = if index < 8 {
                layer.standard_base() + index as u8
            } else {
                layer.bright_base() + (index - 8) as u8
            };
            registry
                .standard
                .insert((*name).to_string(), format!("\x1b[{}m", code));
        }
        for (name, rgb) in NAMED_TRUE_COLORS {
            registry
                .true_color
                .insert((*name).to_string(), encode(*rgb, layer, ColorMode::TrueColor));
        }
        registry
    }

    /// The layer this registry's sequences target.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    fn partition(&self, mode: ColorMode) -> &BTreeMap<String, String> {
        match mode {
            ColorMode::Standard => &self.standard,
            ColorMode::TrueColor => &self.true_color,
        }
    }

    fn partition_mut(&mut self, mode: ColorMode) -> &mut BTreeMap<String, String> {
        match mode {
            ColorMode::Standard => &mut self.standard,
            ColorMode::TrueColor => &mut self.true_color,
        }
    }

    /// Registers a custom color under `name` in the given partition.
    ///
    /// True-color sequences must decode to this registry's layer in
    /// true-color form; standard entries must be a single numeric SGR
    /// sequence.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateName`] if the name exists in that
    /// partition, [`RegistryError::InvalidSequence`] if the sequence does
    /// not fit it.
    pub fn add(&mut self, name: &str, sequence: &str, mode: ColorMode) -> Result<(), RegistryError> {
        let invalid = || RegistryError::InvalidSequence {
            sequence: sequence.to_string(),
        };
        match mode {
            ColorMode::TrueColor => {
                let decoded = AnsiCodec::decode(sequence).map_err(|_| invalid())?;
                if decoded.mode != ColorMode::TrueColor || decoded.layer != self.layer {
                    return Err(invalid());
                }
            }
            ColorMode::Standard => {
                if !NUMERIC_SEQ.is_match(sequence) {
                    return Err(invalid());
                }
            }
        }

        let partition = self.partition_mut(mode);
        if partition.contains_key(name) {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }
        partition.insert(name.to_string(), sequence.to_string());
        Ok(())
    }

    /// Looks up the escape sequence registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if the name is absent from that
    /// partition.
    pub fn get(&self, name: &str, mode: ColorMode) -> Result<&str, RegistryError> {
        self.partition(mode)
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Removes the entry registered under `name`.
    ///
    /// Removal is not idempotent: removing an absent name fails, including
    /// a second removal of the same name. Built-in entries are removable
    /// like any other.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if the name is absent from that
    /// partition.
    pub fn remove(&mut self, name: &str, mode: ColorMode) -> Result<(), RegistryError> {
        self.partition_mut(mode)
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// True if `name` exists in either partition.
    pub fn is_valid(&self, name: &str) -> bool {
        self.is_standard(name) || self.is_true_color(name)
    }

    /// True if `name` exists as a standard color.
    pub fn is_standard(&self, name: &str) -> bool {
        self.standard.contains_key(name)
    }

    /// True if `name` exists as a true color.
    pub fn is_true_color(&self, name: &str) -> bool {
        self.true_color.contains_key(name)
    }

    /// The registered names of one partition, in sorted order.
    pub fn names(&self, mode: ColorMode) -> impl Iterator<Item = &str> {
        self.partition(mode).keys().map(String::as_str)
    }
}

// ─── Effect registry ────────────────────────────────────────────────────────

/// Name → escape-sequence table for text effects (bold, underline, …).
///
/// Effects have a single partition; their sequences are plain numeric SGR
/// codes.
#[derive(Debug, Clone)]
pub struct EffectRegistry {
    effects: BTreeMap<String, String>,
}

impl EffectRegistry {
    /// Creates an empty effect registry.
    pub fn new() -> Self {
        EffectRegistry {
            effects: BTreeMap::new(),
        }
    }

    /// Creates a registry pre-populated with the built-in effects.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, sequence) in EFFECTS {
            registry
                .effects
                .insert((*name).to_string(), (*sequence).to_string());
        }
        registry
    }

    /// Registers a custom effect under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateName`] if the name exists,
    /// [`RegistryError::InvalidSequence`] unless the sequence is a single
    /// numeric SGR sequence.
    pub fn add(&mut self, name: &str, sequence: &str) -> Result<(), RegistryError> {
        if !NUMERIC_SEQ.is_match(sequence) {
            return Err(RegistryError::InvalidSequence {
                sequence: sequence.to_string(),
            });
        }
        if self.effects.contains_key(name) {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.effects.insert(name.to_string(), sequence.to_string());
        Ok(())
    }

    /// Looks up the escape sequence registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if the name is absent.
    pub fn get(&self, name: &str) -> Result<&str, RegistryError> {
        self.effects
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Removes the effect registered under `name`. Not idempotent; see
    /// [`ColorRegistry::remove`].
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if the name is absent.
    pub fn remove(&mut self, name: &str) -> Result<(), RegistryError> {
        self.effects
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// True if `name` is a registered effect.
    pub fn is_valid(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    /// The registered effect names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.effects.keys().map(String::as_str)
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        EffectRegistry::with_builtins()
    }
}

// ─── Bundle ─────────────────────────────────────────────────────────────────

/// The three registries a styling session works with.
#[derive(Debug, Clone)]
pub struct StyleBook {
    /// Foreground color names.
    pub foreground: ColorRegistry,
    /// Background color names.
    pub background: ColorRegistry,
    /// Effect names.
    pub effects: EffectRegistry,
}

impl StyleBook {
    /// Creates a book with all built-in entries registered.
    pub fn with_builtins() -> Self {
        StyleBook {
            foreground: ColorRegistry::with_builtins(Layer::Foreground),
            background: ColorRegistry::with_builtins(Layer::Background),
            effects: EffectRegistry::with_builtins(),
        }
    }

    /// Creates a book with three empty registries.
    pub fn empty() -> Self {
        StyleBook {
            foreground: ColorRegistry::new(Layer::Foreground),
            background: ColorRegistry::new(Layer::Background),
            effects: EffectRegistry::new(),
        }
    }
}

impl Default for StyleBook {
    fn default() -> Self {
        StyleBook::with_builtins()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // Builtins
    // =====================================================================

    #[test]
    fn builtin_standard_colors_per_layer() {
        let fg = ColorRegistry::with_builtins(Layer::Foreground);
        let bg = ColorRegistry::with_builtins(Layer::Background);
        assert_eq!(fg.get("black", ColorMode::Standard).unwrap(), "\x1b[30m");
        assert_eq!(bg.get("black", ColorMode::Standard).unwrap(), "\x1b[40m");
        assert_eq!(fg.get("bright_red", ColorMode::Standard).unwrap(), "\x1b[91m");
        assert_eq!(bg.get("bright_white", ColorMode::Standard).unwrap(), "\x1b[107m");
    }

    #[test]
    fn builtin_true_colors_encode_for_their_layer() {
        let fg = ColorRegistry::with_builtins(Layer::Foreground);
        assert_eq!(
            fg.get("absolute_zero", ColorMode::TrueColor).unwrap(),
            "\x1b[38;2;0;72;186m"
        );
        let bg = ColorRegistry::with_builtins(Layer::Background);
        assert_eq!(
            bg.get("absolute_zero", ColorMode::TrueColor).unwrap(),
            "\x1b[48;2;0;72;186m"
        );
    }

    #[test]
    fn builtin_effects() {
        let effects = EffectRegistry::with_builtins();
        assert_eq!(effects.get("bold").unwrap(), "\x1b[1m");
        assert_eq!(effects.get("underline").unwrap(), "\x1b[4m");
        assert!(effects.is_valid("strikethrough"));
    }

    #[test]
    fn names_are_sorted() {
        let effects = EffectRegistry::with_builtins();
        let names: Vec<&str> = effects.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    // =====================================================================
    // Add / duplicate / remove lifecycle
    // =====================================================================

    #[test]
    fn add_twice_in_one_partition_fails() {
        let mut fg = ColorRegistry::new(Layer::Foreground);
        fg.add("x", "\x1b[38;2;1;2;3m", ColorMode::TrueColor).unwrap();
        assert_eq!(
            fg.add("x", "\x1b[38;2;4;5;6m", ColorMode::TrueColor),
            Err(RegistryError::DuplicateName {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn partitions_are_independent() {
        let mut fg = ColorRegistry::new(Layer::Foreground);
        fg.add("x", "\x1b[38;2;1;2;3m", ColorMode::TrueColor).unwrap();
        fg.add("x", "\x1b[35m", ColorMode::Standard).unwrap();
        assert!(fg.is_standard("x"));
        assert!(fg.is_true_color("x"));
        assert!(fg.is_valid("x"));
    }

    #[test]
    fn remove_is_not_idempotent() {
        let mut fg = ColorRegistry::new(Layer::Foreground);
        fg.add("x", "\x1b[38;2;1;2;3m", ColorMode::TrueColor).unwrap();
        assert!(fg.remove("x", ColorMode::TrueColor).is_ok());
        assert_eq!(
            fg.remove("x", ColorMode::TrueColor),
            Err(RegistryError::NotFound {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn remove_only_targets_one_partition() {
        let mut fg = ColorRegistry::new(Layer::Foreground);
        fg.add("x", "\x1b[35m", ColorMode::Standard).unwrap();
        assert!(fg.remove("x", ColorMode::TrueColor).is_err());
        assert!(fg.is_standard("x"));
    }

    #[test]
    fn builtins_are_removable() {
        let mut fg = ColorRegistry::with_builtins(Layer::Foreground);
        assert!(fg.remove("red", ColorMode::Standard).is_ok());
        assert!(!fg.is_standard("red"));
        assert!(fg.get("red", ColorMode::Standard).is_err());

        let mut effects = EffectRegistry::with_builtins();
        assert!(effects.remove("bold").is_ok());
        assert!(effects.remove("bold").is_err());
    }

    #[test]
    fn get_missing_name_fails() {
        let fg = ColorRegistry::new(Layer::Foreground);
        assert_eq!(
            fg.get("nope", ColorMode::Standard),
            Err(RegistryError::NotFound {
                name: "nope".to_string()
            })
        );
    }

    // =====================================================================
    // Sequence validation
    // =====================================================================

    #[test]
    fn true_color_add_rejects_wrong_layer() {
        let mut fg = ColorRegistry::new(Layer::Foreground);
        // A background sequence cannot be registered as a foreground color.
        assert!(matches!(
            fg.add("x", "\x1b[48;2;1;2;3m", ColorMode::TrueColor),
            Err(RegistryError::InvalidSequence { .. })
        ));
    }

    #[test]
    fn true_color_add_rejects_standard_sequences() {
        let mut fg = ColorRegistry::new(Layer::Foreground);
        assert!(matches!(
            fg.add("x", "\x1b[31m", ColorMode::TrueColor),
            Err(RegistryError::InvalidSequence { .. })
        ));
    }

    #[test]
    fn standard_add_accepts_any_numeric_code() {
        let mut fg = ColorRegistry::new(Layer::Foreground);
        assert!(fg.add("x", "\x1b[96m", ColorMode::Standard).is_ok());
        assert!(fg.add("y", "\x1b[107m", ColorMode::Standard).is_ok());
    }

    #[test]
    fn standard_add_rejects_malformed_sequences() {
        let mut fg = ColorRegistry::new(Layer::Foreground);
        for bad in ["\x1b[38;2;1;2;3m", "\x1b[31", "31m", "\x1b[m"] {
            assert!(matches!(
                fg.add("x", bad, ColorMode::Standard),
                Err(RegistryError::InvalidSequence { .. })
            ));
        }
    }

    #[test]
    fn effect_add_rejects_color_sequences() {
        let mut effects = EffectRegistry::new();
        assert!(effects.add("glow", "\x1b[38;2;1;2;3m").is_err());
        assert!(effects.add("glow", "\x1b[8m").is_ok());
    }

    // =====================================================================
    // Bundle
    // =====================================================================

    #[test]
    fn book_default_is_populated() {
        let book = StyleBook::default();
        assert!(book.foreground.is_standard("red"));
        assert!(book.background.is_standard("red"));
        assert!(book.effects.is_valid("bold"));
        assert_eq!(book.foreground.layer(), Layer::Foreground);
        assert_eq!(book.background.layer(), Layer::Background);
    }

    #[test]
    fn book_empty_is_empty() {
        let book = StyleBook::empty();
        assert!(!book.foreground.is_valid("red"));
        assert_eq!(book.effects.names().count(), 0);
    }
}
