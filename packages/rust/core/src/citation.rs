//! Tool-citation checks.

use std::path::Path;

/// Case-sensitive substring test of `literal` in the located section text.
pub fn contains_literal(text: &str, literal: &str) -> bool {
    text.contains(literal)
}

/// Whether the path carries one of the supplementary-material markers.
///
/// Checked before anything is read from the file.
pub fn is_supplementary(path: &Path, markers: &[String]) -> bool {
    let path = path.to_string_lossy();
    markers.iter().any(|marker| path.contains(marker.as_str()))
}
