//! Controlled vocabulary loading.
//!
//! The vocabulary file holds one term per line. Blank lines are ignored and
//! duplicate terms collapse to their first occurrence; line order carries no
//! priority.

use std::collections::HashSet;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use papertally_shared::{PaperTallyError, Result};

/// An immutable list of recognised keyword terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Load a line-delimited vocabulary file.
    ///
    /// Fails when the file is missing or holds no terms: nothing downstream
    /// can run without a vocabulary.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PaperTallyError::vocabulary(format!(
                "vocabulary file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| PaperTallyError::io(path, e))?;
        let vocabulary = Self::parse(&content).map_err(|_| {
            PaperTallyError::vocabulary(format!("vocabulary file is empty: {}", path.display()))
        })?;

        debug!(terms = vocabulary.len(), "vocabulary loaded");
        Ok(vocabulary)
    }

    /// Parse vocabulary text (one term per line).
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_terms(content.lines())
    }

    /// Build a vocabulary from an iterator of terms.
    pub fn from_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.clone()))
            .collect();

        if terms.is_empty() {
            return Err(PaperTallyError::vocabulary("vocabulary contains no terms"));
        }

        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// SHA-256 over the sorted term list, so reports can name the exact
    /// vocabulary they were produced with.
    pub fn fingerprint(&self) -> String {
        let mut sorted: Vec<&str> = self.terms.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        let mut hasher = Sha256::new();
        for term in sorted {
            hasher.update(term.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}
