//! Span resolution: turning mapping rules and a message into styled output.
//!
//! Resolution replays the rules in insertion order over a per-character
//! style assignment, so the winning style for any character is simply the
//! last rule that painted it:
//!
//! 1. A `color_match` rule paints each of its pattern's match ranges.
//! 2. A whole-message rule paints the entire message (once, if any of its
//!    patterns matches anywhere): it is just a span covering everything,
//!    which is why a later whole-message rule replaces all earlier styling
//!    and only one whole-message style can survive to render time.
//! 3. Assembly walks the final assignment, coalescing adjacent runs with
//!    the same owner. Styled runs are emitted as
//!    `prefix + transformed text + reset`; unstyled gaps pass through
//!    unchanged. Case transforms apply to the message text only; escape
//!    bytes are attached after transformation and never case-mapped.
//!
//! All failures (pattern compilation, unknown names) happen before any
//! painting starts; there is no partially styled output.

use crate::ansi::RESET;
use crate::error::MapperError;
use crate::mapper::{ColorMapper, MappingRule, SpanStyle};

/// Styles an entire message unconditionally.
///
/// With an all-empty style this is just the case transform; otherwise the
/// whole message becomes one reset-bounded span.
pub fn render(message: &str, style: &SpanStyle) -> String {
    if style.is_plain() {
        return style.case.apply(message);
    }
    let mut out = String::with_capacity(message.len() + 16);
    out.push_str(&style.prefix());
    out.push_str(&style.case.apply(message));
    out.push_str(RESET);
    out
}

/// Styles a message by a single regex pattern.
///
/// With `color_match` set, each match is styled independently; otherwise
/// the whole message is styled if the pattern matches anywhere, and
/// returned unchanged if it does not.
///
/// # Errors
///
/// Returns [`MapperError::InvalidPattern`] if the pattern fails to
/// compile.
pub fn render_with_pattern(
    message: &str,
    pattern: &str,
    style: &SpanStyle,
    color_match: bool,
    ignore_case: bool,
) -> Result<String, MapperError> {
    let rule = MappingRule::new("", &[pattern], style.clone(), color_match, ignore_case)?;
    Ok(render_rules(message, std::slice::from_ref(&rule)))
}

/// Styles a message by every rule in the mapper, in insertion order.
pub fn render_with_mapper(message: &str, mapper: &ColorMapper) -> String {
    render_rules(message, mapper.rules())
}

/// The ordered-replay engine shared by the pattern and mapper paths.
fn render_rules(message: &str, rules: &[MappingRule]) -> String {
    // owner[i] is the index of the last rule that painted byte i. Regex
    // match boundaries are char boundaries, and whole-message spans cover
    // everything, so runs of equal owners always slice cleanly.
    let mut owner: Vec<Option<usize>> = vec![None; message.len()];

    for (index, rule) in rules.iter().enumerate() {
        if rule.color_match() {
            for regex in rule.patterns() {
                for m in regex.find_iter(message) {
                    if m.start() < m.end() {
                        owner[m.start()..m.end()].fill(Some(index));
                    }
                }
            }
        } else if rule.patterns().iter().any(|regex| regex.is_match(message)) {
            owner.fill(Some(index));
        }
    }

    let mut out = String::with_capacity(message.len() * 2);
    let mut pos = 0;
    while pos < message.len() {
        let current = owner[pos];
        let mut end = pos + 1;
        while end < message.len() && owner[end] == current {
            end += 1;
        }

        let segment = &message[pos..end];
        match current {
            None => out.push_str(segment),
            Some(index) => {
                let style = rules[index].style();
                if style.is_plain() {
                    out.push_str(&style.case.apply(segment));
                } else {
                    out.push_str(&style.prefix());
                    out.push_str(&style.case.apply(segment));
                    out.push_str(RESET);
                }
            }
        }
        pos = end;
    }
    out
}
