//! Citation survey: which documents of a corpus cite the tool at all.
//!
//! Unlike classification this never looks at keywords; it only runs the
//! supplementary filter, the section locator and the literal check.

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use papertally_reader::PaperReader;
use papertally_shared::{Result, SectionName};

use crate::citation::{contains_literal, is_supplementary};
use crate::corpus::{paper_key, panic_message};
use crate::text::{GatheredText, gather_text};

/// Documents bucketed by citation status, each list in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationSurvey {
    pub citing: Vec<String>,
    pub not_citing: Vec<String>,
    pub supplementary: Vec<String>,
    /// Unreadable (including reader panics), or too short to sample.
    pub unreadable: Vec<String>,
}

impl CitationSurvey {
    /// Documents whose citation status is known.
    pub fn checked(&self) -> usize {
        self.citing.len() + self.not_citing.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Citation {
    Cites,
    DoesNotCite,
    Unreadable,
}

/// Survey `paths` for `literal` inside the target sections.
#[instrument(skip_all, fields(documents = paths.len(), %literal))]
pub fn survey_citations(
    paths: &[PathBuf],
    reader: &dyn PaperReader,
    literal: &str,
    targets: &[SectionName],
    supplementary_markers: &[String],
) -> CitationSurvey {
    let mut survey = CitationSurvey::default();

    for path in paths {
        let key = paper_key(path);
        if is_supplementary(path, supplementary_markers) {
            survey.supplementary.push(key);
            continue;
        }

        let checked = panic::catch_unwind(AssertUnwindSafe(|| {
            check_document(path, reader, literal, targets)
        }));
        let status = match checked {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                warn!(path = %path.display(), error = %e, "failed to read document, skipping");
                Citation::Unreadable
            }
            Err(payload) => {
                let cause = panic_message(payload.as_ref());
                warn!(path = %path.display(), %cause, "reader panicked on document, skipping");
                Citation::Unreadable
            }
        };
        match status {
            Citation::Cites => survey.citing.push(key),
            Citation::DoesNotCite => survey.not_citing.push(key),
            Citation::Unreadable => survey.unreadable.push(key),
        }
    }

    info!(
        citing = survey.citing.len(),
        not_citing = survey.not_citing.len(),
        supplementary = survey.supplementary.len(),
        unreadable = survey.unreadable.len(),
        "citation survey complete"
    );
    survey
}

fn check_document(
    path: &Path,
    reader: &dyn PaperReader,
    literal: &str,
    targets: &[SectionName],
) -> Result<Citation> {
    let mut doc = reader.open(path)?;
    Ok(match gather_text(doc.as_mut(), path, targets)? {
        GatheredText::Text { text, .. } if contains_literal(&text, literal) => Citation::Cites,
        GatheredText::Text { .. } => Citation::DoesNotCite,
        GatheredText::Insufficient => Citation::Unreadable,
    })
}
