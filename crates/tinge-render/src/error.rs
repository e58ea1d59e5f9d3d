//! Error types for color conversion, registries, and pattern styling.
//!
//! Every failure in this crate is surfaced synchronously through one of the
//! enums below; nothing is retried or silently swallowed, and no operation
//! returns a sentinel value in place of an error.

/// Error type for color-format conversion and ANSI codec operations.
///
/// Not `Eq`: [`OutOfRange`](ColorError::OutOfRange) carries the rejected
/// float.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Input text is not a recognizable HEX code or ANSI escape sequence.
    InvalidFormat {
        /// The offending input.
        value: String,
    },

    /// A numeric component is outside its valid bounds.
    OutOfRange {
        /// Which component was out of bounds (e.g. `"cyan"`).
        component: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A well-framed escape sequence whose payload is not a decodable color.
    ///
    /// Covers reset sequences, effect-only codes, and multi-attribute
    /// payloads: the decoder handles single color sequences only.
    UnrecognizedSequence {
        /// The sequence that could not be decoded.
        sequence: String,
    },

    /// A true-color operation was requested but the output target does not
    /// support true color.
    UnsupportedMode,
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::InvalidFormat { value } => {
                write!(f, "invalid color format: '{}'", value)
            }
            ColorError::OutOfRange { component, value } => {
                write!(f, "{} component out of range: {}", component, value)
            }
            ColorError::UnrecognizedSequence { sequence } => {
                write!(f, "unrecognized ANSI color sequence: {:?}", sequence)
            }
            ColorError::UnsupportedMode => {
                write!(f, "true color is not supported by the output target")
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// Error type for style registry mutations and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name already exists in the targeted partition.
    ///
    /// Standard and true-color entries live in independent partitions, so
    /// the same name may exist once in each; re-adding within a partition
    /// is rejected rather than overwriting.
    DuplicateName {
        /// The name that was already registered.
        name: String,
    },

    /// No entry with this name exists in the targeted partition.
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The escape sequence does not fit the partition it was added to
    /// (wrong layer, wrong color mode, or not a color sequence at all).
    InvalidSequence {
        /// The rejected sequence.
        sequence: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateName { name } => {
                write!(f, "'{}' is already registered", name)
            }
            RegistryError::NotFound { name } => {
                write!(f, "'{}' is not a registered name", name)
            }
            RegistryError::InvalidSequence { sequence } => {
                write!(f, "unsupported escape sequence for this registry: {:?}", sequence)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Error type for mapping rules and pattern-driven rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// A rule pattern failed to compile as a regular expression.
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// The regex engine's explanation.
        message: String,
    },

    /// No mapping with this name exists.
    MappingNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A symbolic color or effect name did not resolve.
    UnknownStyle {
        /// The unresolved name.
        name: String,
    },

    /// A symbolic text-case name did not resolve.
    UnknownCase {
        /// The unresolved name.
        name: String,
    },
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::InvalidPattern { pattern, message } => {
                write!(f, "invalid pattern '{}': {}", pattern, message)
            }
            MapperError::MappingNotFound { name } => {
                write!(f, "'{}' mapping not found", name)
            }
            MapperError::UnknownStyle { name } => {
                write!(f, "unknown style name: '{}'", name)
            }
            MapperError::UnknownCase { name } => {
                write!(f, "unknown text case: '{}'", name)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Error type for YAML rule-file parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetError {
    /// The document is not valid YAML or not a mapping of rules.
    Parse {
        /// Error message from the YAML parser.
        message: String,
    },

    /// A rule definition is structurally invalid (missing patterns, bad
    /// hex literal, pattern compile failure, unsupported color mode).
    InvalidRule {
        /// Rule name where the error occurred.
        rule: String,
        /// Description of what was wrong.
        message: String,
    },

    /// A rule referenced a color or effect name that is not registered.
    UnknownStyle {
        /// Rule name where the error occurred.
        rule: String,
        /// The unresolved name.
        name: String,
    },

    /// A rule referenced an unknown text-case name.
    UnknownCase {
        /// Rule name where the error occurred.
        rule: String,
        /// The unresolved name.
        name: String,
    },

    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylesheetError::Parse { message } => {
                write!(f, "failed to parse rule file: {}", message)
            }
            StylesheetError::InvalidRule { rule, message } => {
                write!(f, "invalid rule '{}': {}", rule, message)
            }
            StylesheetError::UnknownStyle { rule, name } => {
                write!(f, "rule '{}' references unknown style '{}'", rule, name)
            }
            StylesheetError::UnknownCase { rule, name } => {
                write!(f, "rule '{}' references unknown text case '{}'", rule, name)
            }
            StylesheetError::Load { message } => {
                write!(f, "failed to load rule file: {}", message)
            }
        }
    }
}

impl std::error::Error for StylesheetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        let err = ColorError::InvalidFormat {
            value: "#12".to_string(),
        };
        assert!(err.to_string().contains("#12"));

        let err = ColorError::OutOfRange {
            component: "cyan",
            value: 1.5,
        };
        assert!(err.to_string().contains("cyan"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn registry_error_display() {
        let err = RegistryError::DuplicateName {
            name: "rust".to_string(),
        };
        assert!(err.to_string().contains("rust"));
        assert!(err.to_string().contains("already"));
    }

    #[test]
    fn mapper_error_display() {
        let err = MapperError::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert!(err.to_string().contains("unclosed group"));
    }

    #[test]
    fn stylesheet_error_display() {
        let err = StylesheetError::UnknownStyle {
            rule: "warning".to_string(),
            name: "vermilion".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("warning"));
        assert!(msg.contains("vermilion"));
    }
}
