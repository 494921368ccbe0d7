//! Core domain types shared by the papertally crates.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// RunId
// ---------------------------------------------------------------------------

/// A UUID v7 wrapper identifying one corpus run (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Generate a new time-sortable run identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

/// One entry of a document outline: `(level, title, start_page)`.
///
/// `start_page` uses the 1-based numbering of outline readers; `0` means the
/// reader could not resolve a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub level: u32,
    pub title: String,
    pub start_page: i64,
}

impl OutlineEntry {
    pub fn new(level: u32, title: impl Into<String>, start_page: i64) -> Self {
        Self {
            level,
            title: title.into(),
            start_page,
        }
    }
}

/// A document as seen by the section locator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub path: PathBuf,
    pub page_count: usize,
    pub outline: Vec<OutlineEntry>,
}

// ---------------------------------------------------------------------------
// Section names & windows
// ---------------------------------------------------------------------------

/// Methodological section labels used to scope text extraction.
///
/// Declaration order is the default matching priority: more specific labels
/// come before labels they contain ("Materials and Methods" before "Methods").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectionName {
    #[serde(rename = "Methodology")]
    Methodology,
    #[serde(rename = "Materials and Methods")]
    MaterialsAndMethods,
    #[serde(rename = "Results")]
    Results,
    #[serde(rename = "Methods")]
    Methods,
}

impl SectionName {
    /// All section names in default priority order.
    pub const ALL: [SectionName; 4] = [
        SectionName::Methodology,
        SectionName::MaterialsAndMethods,
        SectionName::Results,
        SectionName::Methods,
    ];

    /// The literal looked up inside outline titles.
    pub fn label(self) -> &'static str {
        match self {
            SectionName::Methodology => "Methodology",
            SectionName::MaterialsAndMethods => "Materials and Methods",
            SectionName::Results => "Results",
            SectionName::Methods => "Methods",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SectionName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SectionName::ALL
            .into_iter()
            .find(|name| name.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown section name '{s}'"))
    }
}

/// Contiguous 0-based page range attributed to one section.
///
/// `end_page` is exclusive and stays `None` until a later outline entry or
/// the end of the document closes the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionWindow {
    pub name: SectionName,
    pub start_page: usize,
    pub end_page: Option<usize>,
}

impl SectionWindow {
    /// Page indices covered by this window (empty while unresolved).
    pub fn pages(&self) -> std::ops::Range<usize> {
        self.start_page..self.end_page.unwrap_or(self.start_page)
    }

    pub fn is_empty(&self) -> bool {
        self.pages().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Aggregation results
// ---------------------------------------------------------------------------

/// Keyword → number of documents for which it was the winning term.
///
/// Counts only grow; nothing ever decrements or removes an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable(HashMap<String, u64>);

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `keyword`'s count.
    pub fn increment(&mut self, keyword: &str) {
        *self.0.entry(keyword.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, keyword: &str) -> u64 {
        self.0.get(keyword).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries ordered by count (descending), then keyword (ascending).
    pub fn sorted(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> =
            self.0.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

/// Per-run document counters. Each processed document bumps exactly one of
/// the two totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_classified: u64,
    pub total_skipped: u64,
}

impl CorpusStats {
    pub fn processed(&self) -> u64 {
        self.total_classified + self.total_skipped
    }
}

/// Why skipped documents were skipped. Sums to [`CorpusStats::total_skipped`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipBreakdown {
    /// File name marked the paper as supplementary material.
    pub supplementary: u64,
    /// Too few pages to sample.
    pub insufficient_content: u64,
    /// Tool literal absent from the located text.
    pub no_citation: u64,
    /// No vocabulary term survived the resolver.
    pub no_evidence: u64,
    /// The document could not be read.
    pub failed: u64,
}

impl SkipBreakdown {
    pub fn total(&self) -> u64 {
        self.supplementary + self.insufficient_content + self.no_citation + self.no_evidence + self.failed
    }
}
