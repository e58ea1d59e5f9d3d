//! # Tinge Render - Terminal Text Styling Core
//!
//! `tinge-render` is the rendering core of the `tinge` workspace: color
//! format conversion, ANSI escape-sequence encoding and decoding, named
//! style registries, and pattern-driven span styling.
//!
//! This crate performs no I/O and never inspects the environment; terminal
//! capability flags are injected (see [`TermProfile`]), and printing lives
//! in the `tinge` facade crate.
//!
//! ## Core Concepts
//!
//! - [`Rgb`] / [`Cmyk`]: color values convertible among HEX, RGB, and CMYK
//! - [`AnsiCodec`]: encodes colors as ANSI escape sequences and decodes
//!   them back, gated by an injected [`TermProfile`]
//! - [`StyleBook`]: foreground, background, and effect name registries
//!   with built-in tables
//! - [`ColorMapper`]: named regex rules resolved over a message with
//!   deterministic, insertion-ordered overlap semantics
//! - [`TextCase`]: case transforms applied to styled text
//!
//! ## Quick Start
//!
//! ```rust
//! use tinge_render::{
//!     render_with_mapper, ColorMapper, ColorMode, SpanStyle, StyleBook,
//! };
//!
//! let book = StyleBook::with_builtins();
//! let red = book.foreground.get("red", ColorMode::Standard).unwrap();
//!
//! let mut mapper = ColorMapper::new();
//! mapper
//!     .add_mapping("error", &["error"], SpanStyle::new().color(red), true, true)
//!     .unwrap();
//!
//! let out = render_with_mapper("error: disk full", &mapper);
//! assert_eq!(out, "\x1b[31merror\x1b[0m: disk full");
//! ```
//!
//! ## Color Conversion
//!
//! ```rust
//! use tinge_render::{AnsiCodec, ColorMode, Layer, Rgb, TermProfile};
//!
//! let codec = AnsiCodec::new(TermProfile::full());
//! let seq = codec
//!     .hex_to_ansi("#FF7F50", Layer::Foreground, ColorMode::TrueColor)
//!     .unwrap();
//! assert_eq!(AnsiCodec::ansi_to_hex(&seq).unwrap(), "#FF7F50");
//! ```
//!
//! ## Rule Files
//!
//! Mapping rules can be loaded from YAML (see [`ColorMapper::from_yaml`]);
//! document order becomes insertion order, which drives overlap
//! resolution.

pub mod ansi;
pub mod case;
pub mod colorspace;
mod error;
pub mod mapper;
pub mod registry;
mod resolve;
mod stylesheet;

// Codec and capability exports
pub use ansi::{
    nearest_standard_index, AnsiCodec, ColorMode, DecodedColor, Layer, TermProfile, RESET,
    STANDARD_PALETTE,
};

// Color value exports
pub use colorspace::{Cmyk, Rgb};

// Case transform exports
pub use case::TextCase;

// Error exports
pub use error::{ColorError, MapperError, RegistryError, StylesheetError};

// Registry exports
pub use registry::{ColorRegistry, EffectRegistry, StyleBook};

// Mapping and rendering exports
pub use mapper::{ColorMapper, MappingRule, SpanStyle};
pub use resolve::{render, render_with_mapper, render_with_pattern};
