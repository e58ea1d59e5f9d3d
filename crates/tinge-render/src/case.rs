//! Text case transformations applied to styled spans.
//!
//! Cases are a closed set of variants rather than free-form strings, so an
//! unknown case is a construction-time error ([`TextCase::from_name`]), not
//! a render-time surprise. Transformation always happens on the message
//! text itself, before any escape sequences are attached, so escape bytes
//! are never case-mapped.

use crate::error::MapperError;

/// A text case transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCase {
    /// Leave the text untouched.
    #[default]
    None,
    /// `no_caps`: everything lowercase.
    Lower,
    /// `all_caps`: everything uppercase.
    Upper,
    /// `small_caps`: ASCII letters mapped to their fullwidth capital forms.
    SmallCaps,
    /// `title_case`: first letter of every word uppercased.
    Title,
    /// `sentence_case`: first character uppercased, the rest lowercased.
    Sentence,
    /// `pascal_case`: words capitalized and joined without separators.
    Pascal,
    /// `camel_case`: like pascal, but the first word stays lowercase.
    Camel,
    /// `snake_case`: lowercase words joined with underscores.
    Snake,
    /// `kebab_case`: lowercase words joined with hyphens.
    Kebab,
}

impl TextCase {
    /// Resolves a symbolic case name (as used in rule files).
    ///
    /// Accepts the canonical names returned by [`name`](Self::name),
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::UnknownCase`] for anything else.
    pub fn from_name(name: &str) -> Result<Self, MapperError> {
        match name.to_lowercase().as_str() {
            "none" => Ok(TextCase::None),
            "no_caps" => Ok(TextCase::Lower),
            "all_caps" => Ok(TextCase::Upper),
            "small_caps" => Ok(TextCase::SmallCaps),
            "title_case" => Ok(TextCase::Title),
            "sentence_case" => Ok(TextCase::Sentence),
            "pascal_case" => Ok(TextCase::Pascal),
            "camel_case" => Ok(TextCase::Camel),
            "snake_case" => Ok(TextCase::Snake),
            "kebab_case" => Ok(TextCase::Kebab),
            _ => Err(MapperError::UnknownCase {
                name: name.to_string(),
            }),
        }
    }

    /// The canonical symbolic name of this case.
    pub fn name(self) -> &'static str {
        match self {
            TextCase::None => "none",
            TextCase::Lower => "no_caps",
            TextCase::Upper => "all_caps",
            TextCase::SmallCaps => "small_caps",
            TextCase::Title => "title_case",
            TextCase::Sentence => "sentence_case",
            TextCase::Pascal => "pascal_case",
            TextCase::Camel => "camel_case",
            TextCase::Snake => "snake_case",
            TextCase::Kebab => "kebab_case",
        }
    }

    /// Applies this transformation to `text`, producing a new string.
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCase::None => text.to_string(),
            TextCase::Lower => text.to_lowercase(),
            TextCase::Upper => text.to_uppercase(),
            TextCase::SmallCaps => small_caps(text),
            TextCase::Title => title_case(text),
            TextCase::Sentence => sentence_case(text),
            TextCase::Pascal => words(text).map(capitalize).collect(),
            TextCase::Camel => camel_case(text),
            TextCase::Snake => join_words(text, "_"),
            TextCase::Kebab => join_words(text, "-"),
        }
    }
}

/// Splits on runs of non-alphanumeric ASCII, dropping empty segments.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn join_words(text: &str, separator: &str) -> String {
    words(text)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Uppercases the first character and lowercases the remainder.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn camel_case(text: &str) -> String {
    // Underscores survive the word split here: "foo_bar baz" becomes
    // "foo_barBaz".
    let mut out = String::with_capacity(text.len());
    let segments = text
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty());
    for (i, word) in segments.enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Maps lowercase ASCII letters to the fullwidth capital block
/// (U+FF21..U+FF3A). Uppercase input is left alone.
fn small_caps(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                char::from_u32(c.to_ascii_uppercase() as u32 + 0xFEE0).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
