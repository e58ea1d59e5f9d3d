//! Loading mapper rule files from disk.

use std::path::Path;

use tinge_render::{ColorMapper, StyleBook, StylesheetError};

use crate::term::codec;

/// Loads a [`ColorMapper`] from a YAML rule file.
///
/// Symbolic names resolve against `book`; `#RRGGBB` literals are encoded
/// with the detected capability profile, so a hex rule fails on terminals
/// without true-color support rather than emitting sequences they cannot
/// render.
///
/// # Errors
///
/// Returns [`StylesheetError::Load`] if the file cannot be read, or any
/// of the parse/resolution errors from
/// [`ColorMapper::from_yaml`].
pub fn mapper_from_file(
    path: impl AsRef<Path>,
    book: &StyleBook,
) -> Result<ColorMapper, StylesheetError> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path).map_err(|e| StylesheetError::Load {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;
    ColorMapper::from_yaml(&yaml, book, &codec())
}
