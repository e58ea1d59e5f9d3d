//! # Tinge - Styled Terminal Echo
//!
//! `tinge` prints styled text to the terminal: foreground and background
//! colors, text effects, case transforms, and regex-driven keyword
//! styling, with capability detection so plain pipes receive plain text.
//!
//! The rendering machinery (color conversion, the ANSI codec, registries,
//! and the pattern resolver) lives in `tinge-render` and is re-exported
//! here in full; most applications only need this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tinge::{echo, ColorMode, SpanStyle, StyleBook, TextCase};
//!
//! let book = StyleBook::with_builtins();
//! let style = SpanStyle::new()
//!     .color(book.foreground.get("red", ColorMode::Standard).unwrap())
//!     .case(TextCase::Upper);
//!
//! echo("pay attention", &style);
//! ```
//!
//! ## Keyword Styling
//!
//! ```rust,no_run
//! use tinge::{echo_with_mapper, ColorMapper, ColorMode, SpanStyle, StyleBook};
//!
//! let book = StyleBook::with_builtins();
//! let mut mapper = ColorMapper::new();
//! mapper
//!     .add_mapping(
//!         "errors",
//!         &["error", "fail(ed|ure)?"],
//!         SpanStyle::new().color(book.foreground.get("red", ColorMode::Standard).unwrap()),
//!         true,
//!         true,
//!     )
//!     .unwrap();
//!
//! echo_with_mapper("upload failed: error 7", &mapper);
//! ```
//!
//! Rule sets can also be loaded from YAML files with
//! [`mapper_from_file`]; see `tinge_render`'s stylesheet documentation
//! for the format.

mod echo;
mod rules;
mod term;

// Print surface
pub use echo::{
    echo, echo_with_mapper, echo_with_pattern, styled, styled_with_mapper, styled_with_pattern,
};

// Rule files
pub use rules::mapper_from_file;

// Capability detection
pub use term::{codec, detect_profile};

// Re-export the rendering core
pub use tinge_render::{
    nearest_standard_index, render, render_with_mapper, render_with_pattern, AnsiCodec, Cmyk,
    ColorError, ColorMapper, ColorMode, ColorRegistry, DecodedColor, EffectRegistry, Layer,
    MapperError, MappingRule, RegistryError, Rgb, SpanStyle, StyleBook, StylesheetError, TermProfile,
    TextCase, RESET, STANDARD_PALETTE,
};
