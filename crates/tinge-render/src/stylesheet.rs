//! YAML rule files for [`ColorMapper`].
//!
//! A rule file is a YAML mapping of rule names to definitions. Document
//! order is preserved: it becomes the mapper's insertion order, which is
//! what decides overlap resolution at render time.
//!
//! ```yaml
//! error:
//!   patterns: ["error", "fail(ed|ure)?"]
//!   color: red            # registry name (standard first, then true color)
//!   effect: bold
//!   color_match: true
//!   ignore_case: true
//!
//! banner:
//!   patterns: ["^==="]
//!   color: "#0048BA"      # hex literals encode as true color
//!   background: black
//!   case: all_caps
//! ```
//!
//! Color and effect names resolve against the supplied
//! [`StyleBook`](crate::registry::StyleBook); `#RRGGBB` literals are
//! encoded through the supplied codec, so they are subject to its
//! true-color capability check.

use serde::Deserialize;

use crate::ansi::{AnsiCodec, ColorMode};
use crate::error::StylesheetError;
use crate::mapper::{ColorMapper, SpanStyle};
use crate::registry::{ColorRegistry, StyleBook};
use crate::case::TextCase;

/// One rule definition as it appears in a YAML document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleDef {
    #[serde(default)]
    patterns: Vec<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    effect: Option<String>,
    #[serde(default)]
    case: Option<String>,
    #[serde(default)]
    color_match: bool,
    #[serde(default)]
    ignore_case: bool,
}

impl ColorMapper {
    /// Builds a mapper from YAML rule definitions.
    ///
    /// An empty document yields an empty mapper. Rules are added in
    /// document order.
    ///
    /// # Errors
    ///
    /// [`StylesheetError::Parse`] for malformed YAML or a non-mapping
    /// document, [`StylesheetError::UnknownStyle`] /
    /// [`StylesheetError::UnknownCase`] for unresolved names, and
    /// [`StylesheetError::InvalidRule`] for structural problems (no
    /// patterns, bad hex, pattern compile failure, unsupported color
    /// mode).
    pub fn from_yaml(
        yaml: &str,
        book: &StyleBook,
        codec: &AnsiCodec,
    ) -> Result<ColorMapper, StylesheetError> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
                message: e.to_string(),
            })?;

        let mapping = match document {
            serde_yaml::Value::Null => return Ok(ColorMapper::new()),
            serde_yaml::Value::Mapping(mapping) => mapping,
            _ => {
                return Err(StylesheetError::Parse {
                    message: "rule file must be a mapping of rule names".to_string(),
                })
            }
        };

        let mut mapper = ColorMapper::new();
        for (key, value) in mapping {
            let rule_name = key
                .as_str()
                .ok_or_else(|| StylesheetError::Parse {
                    message: "rule names must be strings".to_string(),
                })?
                .to_string();

            let def: RuleDef =
                serde_yaml::from_value(value).map_err(|e| StylesheetError::InvalidRule {
                    rule: rule_name.clone(),
                    message: e.to_string(),
                })?;
            if def.patterns.is_empty() {
                return Err(StylesheetError::InvalidRule {
                    rule: rule_name,
                    message: "at least one pattern is required".to_string(),
                });
            }

            let mut style = SpanStyle::new();
            if let Some(name) = &def.color {
                style.color = Some(resolve_color(name, &book.foreground, codec, &rule_name)?);
            }
            if let Some(name) = &def.background {
                style.background = Some(resolve_color(name, &book.background, codec, &rule_name)?);
            }
            if let Some(name) = &def.effect {
                style.effect = Some(
                    book.effects
                        .get(name)
                        .map(str::to_string)
                        .map_err(|_| StylesheetError::UnknownStyle {
                            rule: rule_name.clone(),
                            name: name.clone(),
                        })?,
                );
            }
            if let Some(name) = &def.case {
                style.case =
                    TextCase::from_name(name).map_err(|_| StylesheetError::UnknownCase {
                        rule: rule_name.clone(),
                        name: name.clone(),
                    })?;
            }

            let patterns: Vec<&str> = def.patterns.iter().map(String::as_str).collect();
            mapper
                .add_mapping(&rule_name, &patterns, style, def.color_match, def.ignore_case)
                .map_err(|e| StylesheetError::InvalidRule {
                    rule: rule_name.clone(),
                    message: e.to_string(),
                })?;
        }
        Ok(mapper)
    }
}

/// Resolves a color reference: a registry name (standard partition first,
/// then true color) or a `#RRGGBB` literal encoded for the registry's
/// layer.
fn resolve_color(
    value: &str,
    registry: &ColorRegistry,
    codec: &AnsiCodec,
    rule: &str,
) -> Result<String, StylesheetError> {
    if value.starts_with('#') {
        return codec
            .hex_to_ansi(value, registry.layer(), ColorMode::TrueColor)
            .map_err(|e| StylesheetError::InvalidRule {
                rule: rule.to_string(),
                message: e.to_string(),
            });
    }

    registry
        .get(value, ColorMode::Standard)
        .or_else(|_| registry.get(value, ColorMode::TrueColor))
        .map(str::to_string)
        .map_err(|_| StylesheetError::UnknownStyle {
            rule: rule.to_string(),
            name: value.to_string(),
        })
}
