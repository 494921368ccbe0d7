//! Token-sequence phrase matching.
//!
//! Text and vocabulary terms are tokenized the same way (word runs and single
//! punctuation marks). A term matches wherever its token sequence appears
//! verbatim; comparison is case-sensitive. Every occurrence is reported,
//! including overlapping ones, ordered by start token then phrase length.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::vocabulary::Vocabulary;

/// Anything that can find vocabulary-term occurrences in text.
pub trait TermMatcher: Send + Sync {
    /// Matched terms in document order, duplicates preserved.
    fn find_occurrences(&self, text: &str) -> Vec<String>;
}

/// A compiled phrase pattern.
#[derive(Debug, Clone)]
struct Pattern {
    tokens: Vec<String>,
    term: String,
}

/// Immutable matcher compiled once from a [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    /// Patterns keyed by their first token.
    by_first_token: HashMap<String, Vec<Pattern>>,
}

impl PhraseMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let mut by_first_token: HashMap<String, Vec<Pattern>> = HashMap::new();

        for term in vocabulary.terms() {
            let tokens: Vec<String> = tokenize(term).map(String::from).collect();
            let Some(first) = tokens.first().cloned() else {
                continue;
            };
            by_first_token.entry(first).or_default().push(Pattern {
                tokens,
                term: term.clone(),
            });
        }

        // Shorter phrases first so same-start matches come out by length.
        for patterns in by_first_token.values_mut() {
            patterns.sort_by_key(|p| p.tokens.len());
        }

        Self { by_first_token }
    }
}

impl TermMatcher for PhraseMatcher {
    fn find_occurrences(&self, text: &str) -> Vec<String> {
        let tokens: Vec<&str> = tokenize(text).collect();
        let mut matches = Vec::new();

        for (start, token) in tokens.iter().enumerate() {
            let Some(patterns) = self.by_first_token.get(*token) else {
                continue;
            };
            for pattern in patterns {
                let end = start + pattern.tokens.len();
                if end > tokens.len() {
                    continue;
                }
                let hit = pattern
                    .tokens
                    .iter()
                    .zip(&tokens[start..end])
                    .all(|(want, got)| want == got);
                if hit {
                    matches.push(pattern.term.clone());
                }
            }
        }

        matches
    }
}

/// Split text into word tokens and standalone punctuation marks.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    static TOKEN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\w+|[^\w\s]").expect("valid regex"));

    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}
