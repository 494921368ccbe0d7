//! Section locator.
//!
//! Turns a document outline into page windows for the target sections, or
//! falls back to positional sampling when the outline is unusable.
//!
//! Window rules, applied to outline entries in order:
//! 1. Outline pages are 1-based; entries that land before page 0 are dropped.
//! 2. An entry whose title contains a target label opens a window for that
//!    target unless the same target's window is the one currently open.
//!    Opening closes the open window at the new entry's page.
//! 3. A non-target entry at the same or a shallower level than the entry that
//!    opened the current window closes it. Deeper entries are subsections and
//!    leave it open.
//! 4. Whatever is still open at the end runs to the last page.
//!
//! Re-opening a target replaces its earlier window (last write wins); earlier
//! ranges for the same target are not unioned. This is a known approximation.

use std::collections::BTreeMap;

use tracing::debug;

use papertally_shared::{DocumentRecord, OutlineEntry, SectionName, SectionWindow};

/// Target section → its resolved page window.
pub type SectionMap = BTreeMap<SectionName, SectionWindow>;

/// Pages chosen for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    /// Windows derived from the outline (at least one non-empty).
    Sections(SectionMap),
    /// Positional sample used when the outline gave nothing usable.
    Sampled(Vec<usize>),
    /// Too short to sample; the document should be skipped.
    Insufficient,
}

impl PageSelection {
    /// Page indices to read, in page order of the windows.
    pub fn pages(&self) -> Vec<usize> {
        match self {
            PageSelection::Sections(windows) => {
                let mut ordered: Vec<&SectionWindow> = windows.values().collect();
                ordered.sort_by_key(|w| w.start_page);
                ordered.iter().flat_map(|w| w.pages()).collect()
            }
            PageSelection::Sampled(pages) => pages.clone(),
            PageSelection::Insufficient => Vec::new(),
        }
    }
}

/// An outline is unusable when it is empty or every entry points at the same
/// page (typically 0, meaning the reader could not resolve destinations).
pub fn is_degenerate(outline: &[OutlineEntry]) -> bool {
    match outline.first() {
        None => true,
        Some(first) => outline.iter().all(|e| e.start_page == first.start_page),
    }
}

/// Compute page windows for `targets` from an outline.
///
/// Returns an empty map for degenerate outlines; callers fall back to
/// [`sample_pages`]. Every returned window is resolved and satisfies
/// `start_page <= end_page <= page_count`.
pub fn locate_sections(
    outline: &[OutlineEntry],
    page_count: usize,
    targets: &[SectionName],
) -> SectionMap {
    let mut windows = SectionMap::new();

    if is_degenerate(outline) {
        return windows;
    }

    // (target, level of the entry that opened it)
    let mut open: Option<(SectionName, u32)> = None;

    for entry in outline {
        let Ok(page) = usize::try_from(entry.start_page - 1) else {
            continue;
        };
        let page = page.min(page_count);

        let matched = targets
            .iter()
            .copied()
            .find(|target| entry.title.contains(target.label()));

        match (matched, open) {
            (Some(name), Some((current, _))) if name == current => {}
            (Some(name), _) => {
                close_window(&mut windows, open, page);
                windows.insert(
                    name,
                    SectionWindow {
                        name,
                        start_page: page,
                        end_page: None,
                    },
                );
                open = Some((name, entry.level));
            }
            (None, Some((_, level))) if entry.level <= level => {
                close_window(&mut windows, open, page);
                open = None;
            }
            (None, _) => {}
        }
    }

    close_window(&mut windows, open, page_count);
    windows
}

fn close_window(windows: &mut SectionMap, open: Option<(SectionName, u32)>, page: usize) {
    let Some((name, _)) = open else {
        return;
    };
    if let Some(window) = windows.get_mut(&name) {
        window.end_page = Some(page.max(window.start_page));
    }
}

/// Positional fallback: first two pages plus four around the middle for
/// longer documents, every page for short ones, nothing for one or two pages.
pub fn sample_pages(page_count: usize) -> Option<Vec<usize>> {
    if page_count > 6 {
        let mid = page_count / 2;
        let mut pages = vec![0, 1];
        for page in mid - 2..mid + 2 {
            if page < page_count && !pages.contains(&page) {
                pages.push(page);
            }
        }
        Some(pages)
    } else if page_count > 2 {
        Some((0..page_count).collect())
    } else {
        None
    }
}

/// Choose the pages to read for a document.
pub fn select_pages(record: &DocumentRecord, targets: &[SectionName]) -> PageSelection {
    let windows = locate_sections(&record.outline, record.page_count, targets);

    if windows.values().any(|w| !w.is_empty()) {
        debug!(
            path = %record.path.display(),
            sections = windows.len(),
            "using outline sections"
        );
        return PageSelection::Sections(windows);
    }

    match sample_pages(record.page_count) {
        Some(pages) => {
            debug!(
                path = %record.path.display(),
                pages = pages.len(),
                "no usable outline, sampling pages"
            );
            PageSelection::Sampled(pages)
        }
        None => PageSelection::Insufficient,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
