//! Mapping rules: named regex patterns bound to styles.
//!
//! A [`ColorMapper`] owns an insertion-ordered collection of
//! [`MappingRule`]s keyed by name. Insertion order is semantic: it decides
//! which rule wins when several match overlapping text (see the rendering
//! module), so re-adding an existing name replaces the rule in place
//! without changing its position.
//!
//! # Example
//!
//! ```rust
//! use tinge_render::mapper::{ColorMapper, SpanStyle};
//!
//! let mut mapper = ColorMapper::new();
//! mapper
//!     .add_mapping(
//!         "error",
//!         &["error", "fail(ed|ure)?"],
//!         SpanStyle::new().color("\x1b[31m"),
//!         true,  // style just the matching text
//!         true,  // case-insensitive
//!     )
//!     .unwrap();
//! assert!(mapper.is_valid_mapping("error"));
//! ```

use regex::{Regex, RegexBuilder};

use crate::case::TextCase;
use crate::error::MapperError;

// ─── SpanStyle ──────────────────────────────────────────────────────────────

/// The resolved style applied to a span of text: up to one foreground
/// sequence, one background sequence, one effect sequence, and a text case.
///
/// The sequences are already-encoded ANSI escapes, typically obtained from
/// a [`StyleBook`](crate::registry::StyleBook) lookup or an
/// [`AnsiCodec`](crate::ansi::AnsiCodec) conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanStyle {
    /// Foreground color sequence.
    pub color: Option<String>,
    /// Background color sequence.
    pub background: Option<String>,
    /// Effect sequence.
    pub effect: Option<String>,
    /// Case transformation for the span's text.
    pub case: TextCase,
}

impl SpanStyle {
    /// Creates an empty style (no sequences, no case transform).
    pub fn new() -> Self {
        SpanStyle::default()
    }

    /// Sets the foreground color sequence.
    pub fn color(mut self, sequence: impl Into<String>) -> Self {
        self.color = Some(sequence.into());
        self
    }

    /// Sets the background color sequence.
    pub fn background(mut self, sequence: impl Into<String>) -> Self {
        self.background = Some(sequence.into());
        self
    }

    /// Sets the effect sequence.
    pub fn effect(mut self, sequence: impl Into<String>) -> Self {
        self.effect = Some(sequence.into());
        self
    }

    /// Sets the text case transformation.
    pub fn case(mut self, case: TextCase) -> Self {
        self.case = case;
        self
    }

    /// True when no escape sequence is set (a case transform may still be).
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.background.is_none() && self.effect.is_none()
    }

    /// The concatenated escape prefix: color, then background, then effect.
    pub(crate) fn prefix(&self) -> String {
        let mut prefix = String::new();
        for part in [&self.color, &self.background, &self.effect] {
            if let Some(sequence) = part {
                prefix.push_str(sequence);
            }
        }
        prefix
    }
}

// ─── MappingRule ────────────────────────────────────────────────────────────

/// A named rule: one or more compiled patterns plus the style they select.
#[derive(Debug, Clone)]
pub struct MappingRule {
    name: String,
    patterns: Vec<Regex>,
    style: SpanStyle,
    color_match: bool,
    ignore_case: bool,
}

impl MappingRule {
    /// Compiles a rule from pattern sources.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::InvalidPattern`] for the first pattern that
    /// fails to compile.
    pub fn new(
        name: impl Into<String>,
        patterns: &[&str],
        style: SpanStyle,
        color_match: bool,
        ignore_case: bool,
    ) -> Result<Self, MapperError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(ignore_case)
                .build()
                .map_err(|e| MapperError::InvalidPattern {
                    pattern: (*pattern).to_string(),
                    message: e.to_string(),
                })?;
            compiled.push(regex);
        }
        Ok(MappingRule {
            name: name.into(),
            patterns: compiled,
            style,
            color_match,
            ignore_case,
        })
    }

    /// The rule's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled patterns, in the order they were given.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// The style this rule applies.
    pub fn style(&self) -> &SpanStyle {
        &self.style
    }

    /// Whether only the matched text is styled (true) or the whole
    /// message (false).
    pub fn color_match(&self) -> bool {
        self.color_match
    }

    /// Whether the patterns match case-insensitively.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

// ─── ColorMapper ────────────────────────────────────────────────────────────

/// An insertion-ordered collection of mapping rules, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ColorMapper {
    rules: Vec<MappingRule>,
}

impl ColorMapper {
    /// Creates an empty mapper.
    pub fn new() -> Self {
        ColorMapper { rules: Vec::new() }
    }

    /// Adds a rule, or replaces an existing rule of the same name in
    /// place, preserving its position in the order.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::InvalidPattern`] if any pattern fails to
    /// compile; the mapper is left unchanged in that case.
    pub fn add_mapping(
        &mut self,
        name: &str,
        patterns: &[&str],
        style: SpanStyle,
        color_match: bool,
        ignore_case: bool,
    ) -> Result<(), MapperError> {
        let rule = MappingRule::new(name, patterns, style, color_match, ignore_case)?;
        match self.rules.iter_mut().find(|r| r.name == name) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        Ok(())
    }

    /// Looks up a rule by name.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::MappingNotFound`] if no rule has that name.
    pub fn get_mapping(&self, name: &str) -> Result<&MappingRule, MapperError> {
        self.rules
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| MapperError::MappingNotFound {
                name: name.to_string(),
            })
    }

    /// Removes the rule with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::MappingNotFound`] if no rule has that name.
    pub fn remove_mapping(&mut self, name: &str) -> Result<(), MapperError> {
        match self.rules.iter().position(|r| r.name == name) {
            Some(index) => {
                self.rules.remove(index);
                Ok(())
            }
            None => Err(MapperError::MappingNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// True if a rule with the given name exists.
    pub fn is_valid_mapping(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name == name)
    }

    /// The rules in insertion order.
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the mapper holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
