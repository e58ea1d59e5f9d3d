//! The `echo` print surface.
//!
//! Every entry point here follows the same contract: when the detected
//! profile says colors are unavailable, the message passes through
//! completely untouched (no escape sequences and no case transforms),
//! matching what a plain pipe or dumb terminal should receive.
//!
//! The `styled_*` functions return the string instead of printing it, for
//! callers that write somewhere other than stdout.

use tinge_render::{render, render_with_mapper, render_with_pattern};
use tinge_render::{ColorMapper, MapperError, SpanStyle};

use crate::term::detect_profile;

/// Styles a whole message, honoring the detected capability profile.
pub fn styled(message: &str, style: &SpanStyle) -> String {
    if !detect_profile().colors {
        return message.to_string();
    }
    render(message, style)
}

/// Styles a message by a regex pattern, honoring the detected profile.
///
/// # Errors
///
/// Returns [`MapperError::InvalidPattern`] if the pattern fails to
/// compile, even when colors are off, so a broken pattern never hides
/// behind a capability check.
pub fn styled_with_pattern(
    message: &str,
    pattern: &str,
    style: &SpanStyle,
    color_match: bool,
    ignore_case: bool,
) -> Result<String, MapperError> {
    let rendered = render_with_pattern(message, pattern, style, color_match, ignore_case)?;
    if !detect_profile().colors {
        return Ok(message.to_string());
    }
    Ok(rendered)
}

/// Styles a message through a mapper, honoring the detected profile.
pub fn styled_with_mapper(message: &str, mapper: &ColorMapper) -> String {
    if !detect_profile().colors {
        return message.to_string();
    }
    render_with_mapper(message, mapper)
}

/// Prints a styled message to stdout.
pub fn echo(message: &str, style: &SpanStyle) {
    println!("{}", styled(message, style));
}

/// Prints a pattern-styled message to stdout.
///
/// # Errors
///
/// Returns [`MapperError::InvalidPattern`] if the pattern fails to
/// compile; nothing is printed in that case.
pub fn echo_with_pattern(
    message: &str,
    pattern: &str,
    style: &SpanStyle,
    color_match: bool,
    ignore_case: bool,
) -> Result<(), MapperError> {
    println!(
        "{}",
        styled_with_pattern(message, pattern, style, color_match, ignore_case)?
    );
    Ok(())
}

/// Prints a mapper-styled message to stdout.
pub fn echo_with_mapper(message: &str, mapper: &ColorMapper) {
    println!("{}", styled_with_mapper(message, mapper));
}
