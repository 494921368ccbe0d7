//! Keyword extraction: builds the text handed to the phrase matcher and
//! passes its matches through untouched.

use std::path::Path;

use papertally_matcher::TermMatcher;

/// Matched vocabulary terms for `text`, in order, duplicates kept.
pub fn extract_terms(text: &str, matcher: &dyn TermMatcher) -> Vec<String> {
    matcher.find_occurrences(text)
}

/// File name without extension, separators turned into spaces, lower-cased.
pub fn filename_text(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    stem.chars()
        .map(|c| match c {
            '_' | '-' | '.' | '+' => ' ',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Terms found in the file name alone.
pub fn filename_terms(path: &Path, matcher: &dyn TermMatcher) -> Vec<String> {
    extract_terms(&filename_text(path), matcher)
}
