//! PDF reader collaborator backed by `pdf_oxide`.
//!
//! The pipeline only needs three things from a paper: its outline, its page
//! count, and the text of a single page. Everything about the PDF byte
//! structure stays behind the [`PaperDocument`] trait.

use std::path::{Path, PathBuf};

use pdf_oxide::{Destination, OutlineItem, PdfDocument};
use tracing::{debug, instrument};

use papertally_shared::{OutlineEntry, PaperTallyError, Result};

/// An opened paper.
pub trait PaperDocument {
    /// Flattened outline in reading order; `start_page` is 1-based and `0`
    /// when the destination could not be resolved.
    fn outline(&mut self) -> Result<Vec<OutlineEntry>>;

    /// Number of pages in the document.
    fn page_count(&mut self) -> Result<usize>;

    /// Extracted text of one 0-based page.
    fn page_text(&mut self, page_index: usize) -> Result<String>;
}

/// Opens papers from disk.
pub trait PaperReader: Send + Sync {
    fn open(&self, path: &Path) -> Result<Box<dyn PaperDocument>>;
}

// ---------------------------------------------------------------------------
// pdf_oxide implementation
// ---------------------------------------------------------------------------

/// [`PaperReader`] that parses PDFs with `pdf_oxide`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl PaperReader for PdfReader {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn open(&self, path: &Path) -> Result<Box<dyn PaperDocument>> {
        let doc = PdfDocument::open(path).map_err(|e| pdf_error(path, e))?;
        debug!("opened pdf");
        Ok(Box::new(PdfPaper {
            path: path.to_path_buf(),
            doc,
        }))
    }
}

/// A PDF opened through [`PdfReader`].
pub struct PdfPaper {
    path: PathBuf,
    doc: PdfDocument,
}

impl PaperDocument for PdfPaper {
    fn outline(&mut self) -> Result<Vec<OutlineEntry>> {
        let items = self
            .doc
            .get_outline()
            .map_err(|e| pdf_error(&self.path, e))?
            .unwrap_or_default();

        let mut entries = Vec::new();
        flatten_outline(&items, 1, &mut entries);
        Ok(entries)
    }

    fn page_count(&mut self) -> Result<usize> {
        self.doc.page_count().map_err(|e| pdf_error(&self.path, e))
    }

    fn page_text(&mut self, page_index: usize) -> Result<String> {
        self.doc
            .extract_text(page_index)
            .map_err(|e| pdf_error(&self.path, e))
    }
}

/// Depth-first flattening of the bookmark tree into `(level, title, page)`
/// entries, levels starting at 1.
fn flatten_outline(items: &[OutlineItem], level: u32, out: &mut Vec<OutlineEntry>) {
    for item in items {
        let start_page = match item.dest {
            Some(Destination::PageIndex(index)) => index as i64 + 1,
            _ => 0,
        };
        out.push(OutlineEntry::new(level, item.title.trim(), start_page));
        flatten_outline(&item.children, level + 1, out);
    }
}

fn pdf_error(path: &Path, e: impl std::fmt::Display) -> PaperTallyError {
    PaperTallyError::Pdf(format!("{}: {e}", path.display()))
}
