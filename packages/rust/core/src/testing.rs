//! In-memory collaborators for unit tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use papertally_matcher::{PhraseMatcher, TermMatcher, Vocabulary};
use papertally_reader::{PaperDocument, PaperReader};
use papertally_shared::{OutlineEntry, PaperTallyError, Result};

#[derive(Debug, Clone)]
struct FakeContent {
    outline: Vec<OutlineEntry>,
    pages: Vec<String>,
}

/// Reader serving documents from memory and counting every page read.
#[derive(Debug, Default)]
pub(crate) struct FakeReader {
    papers: HashMap<PathBuf, FakeContent>,
    unreadable: HashSet<PathBuf>,
    broken_outline: HashSet<PathBuf>,
    panicking: HashSet<PathBuf>,
    opens: AtomicUsize,
    page_reads: Arc<AtomicUsize>,
}

impl FakeReader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_paper(
        mut self,
        path: impl Into<PathBuf>,
        outline: Vec<OutlineEntry>,
        pages: Vec<String>,
    ) -> Self {
        self.papers.insert(path.into(), FakeContent { outline, pages });
        self
    }

    /// Opening this path fails like a corrupt file would.
    pub(crate) fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// This path opens, but its outline cannot be parsed.
    pub(crate) fn with_broken_outline(mut self, path: impl Into<PathBuf>) -> Self {
        self.broken_outline.insert(path.into());
        self
    }

    /// Opening this path panics, like a parser bug on a malformed file.
    pub(crate) fn with_panicking(mut self, path: impl Into<PathBuf>) -> Self {
        self.panicking.insert(path.into());
        self
    }

    pub(crate) fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub(crate) fn page_reads(&self) -> usize {
        self.page_reads.load(Ordering::SeqCst)
    }
}

impl PaperReader for FakeReader {
    fn open(&self, path: &Path) -> Result<Box<dyn PaperDocument>> {
        self.opens.fetch_add(1, Ordering::SeqCst);

        if self.panicking.contains(path) {
            panic!("{}: parser hit an unreachable state", path.display());
        }
        if self.unreadable.contains(path) {
            return Err(PaperTallyError::Pdf(format!("{}: corrupt xref", path.display())));
        }
        let content = self
            .papers
            .get(path)
            .cloned()
            .ok_or_else(|| PaperTallyError::Pdf(format!("{}: not found", path.display())))?;

        Ok(Box::new(FakePaper {
            content,
            broken_outline: self.broken_outline.contains(path),
            page_reads: Arc::clone(&self.page_reads),
        }))
    }
}

struct FakePaper {
    content: FakeContent,
    broken_outline: bool,
    page_reads: Arc<AtomicUsize>,
}

impl PaperDocument for FakePaper {
    fn outline(&mut self) -> Result<Vec<OutlineEntry>> {
        if self.broken_outline {
            return Err(PaperTallyError::Pdf("bad /Outlines".into()));
        }
        Ok(self.content.outline.clone())
    }

    fn page_count(&mut self) -> Result<usize> {
        Ok(self.content.pages.len())
    }

    fn page_text(&mut self, page_index: usize) -> Result<String> {
        self.page_reads.fetch_add(1, Ordering::SeqCst);
        self.content
            .pages
            .get(page_index)
            .cloned()
            .ok_or_else(|| PaperTallyError::Pdf(format!("page {page_index} out of range")))
    }
}

/// Phrase matcher that counts how often it is invoked.
pub(crate) struct CountingMatcher {
    inner: PhraseMatcher,
    calls: AtomicUsize,
}

impl CountingMatcher {
    pub(crate) fn new(terms: &[&str]) -> Self {
        let vocabulary = Vocabulary::from_terms(terms.iter().copied()).expect("test vocabulary");
        Self {
            inner: PhraseMatcher::new(&vocabulary),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TermMatcher for CountingMatcher {
    fn find_occurrences(&self, text: &str) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_occurrences(text)
    }
}

/// `n` pages of filler text with `body` spliced into page `at`.
pub(crate) fn pages_with(n: usize, at: usize, body: &str) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i == at {
                body.to_string()
            } else {
                format!("filler page {i}")
            }
        })
        .collect()
}
