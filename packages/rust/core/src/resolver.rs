//! Top-keyword resolver.
//!
//! Picks the single most frequent term of a match sequence. Ties go to the
//! lexicographically smallest term, so the result does not depend on the order
//! the matches arrived in.

use std::collections::{HashMap, HashSet};

use papertally_shared::ResolveMode;

/// A fixed set of terms, used both for the watch-set (terms that may not win)
/// and the review list (winners worth a manual look).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet(HashSet<String>);

impl TermSet {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(terms.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolve the winning term, or `None` when no evidence remains.
pub fn resolve_top(terms: &[String], watch: &TermSet, mode: ResolveMode) -> Option<String> {
    let remaining: Vec<&str> = match mode {
        ResolveMode::ExcludeThenPick => terms
            .iter()
            .map(String::as_str)
            .filter(|t| !watch.contains(t))
            .collect(),
        ResolveMode::PickFromRaw => terms.iter().map(String::as_str).collect(),
    };

    match remaining.as_slice() {
        [] => None,
        [only] => Some((*only).to_string()),
        _ => {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for &term in &remaining {
                *counts.entry(term).or_insert(0) += 1;
            }
            counts
                .into_iter()
                .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
                .map(|(term, _)| term.to_string())
        }
    }
}
