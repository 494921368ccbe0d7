//! Assembles the text of the located pages for one open document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use papertally_reader::PaperDocument;
use papertally_shared::{DocumentRecord, Result, SectionName};

use crate::locator::{PageSelection, select_pages};

/// Where the evidence for a classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Evidence {
    /// The normalized file name.
    Filename,
    /// Pages inside outline-derived section windows.
    Sections,
    /// Positionally sampled pages.
    SampledPages,
    /// Terms replayed from a recorded match log.
    Recorded,
}

/// Text gathered from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatheredText {
    Text {
        text: String,
        evidence: Evidence,
        pages_read: usize,
    },
    /// Document too short to sample.
    Insufficient,
}

/// Read the pages the section locator picks for `doc`.
///
/// A broken outline is treated as a missing one. Page-count and page-text
/// failures propagate: the document as a whole is unreadable then.
pub fn gather_text(
    doc: &mut dyn PaperDocument,
    path: &Path,
    targets: &[SectionName],
) -> Result<GatheredText> {
    let page_count = doc.page_count()?;
    let outline = doc.outline().unwrap_or_else(|e| {
        debug!(path = %path.display(), error = %e, "outline unreadable, treating as absent");
        Vec::new()
    });

    let record = DocumentRecord {
        path: path.to_path_buf(),
        page_count,
        outline,
    };

    let selection = select_pages(&record, targets);
    let evidence = match &selection {
        PageSelection::Sections(_) => Evidence::Sections,
        PageSelection::Sampled(_) => Evidence::SampledPages,
        PageSelection::Insufficient => return Ok(GatheredText::Insufficient),
    };

    let pages = selection.pages();
    let mut text = String::new();
    for &page in &pages {
        let page_text = doc.page_text(page)?;
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&page_text);
    }

    Ok(GatheredText::Text {
        text,
        evidence,
        pages_read: pages.len(),
    })
}
