//! Match log persistence and replay.
//!
//! A classify run can record every document's raw match sequence. Replaying
//! that log re-runs only the resolver and aggregation, which makes it cheap to
//! compare resolve modes or watch-sets without touching a single PDF.

use std::path::Path;

use tracing::{info, instrument};

use papertally_shared::{PaperTallyError, ResolveMode, Result};

use crate::corpus::{CorpusAggregator, CorpusResult, DocumentOutcome, MatchLog, SkipReason};
use crate::resolver::{TermSet, resolve_top};
use crate::text::Evidence;

/// Read a match log written by [`save_match_log`].
pub fn load_match_log(path: &Path) -> Result<MatchLog> {
    let content = std::fs::read_to_string(path).map_err(|e| PaperTallyError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Write `log` as pretty JSON, creating parent directories as needed.
pub fn save_match_log(log: &MatchLog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PaperTallyError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(log)?;
    std::fs::write(path, json).map_err(|e| PaperTallyError::io(path, e))?;
    Ok(())
}

/// Resolve and aggregate every recorded sequence again.
#[instrument(skip_all, fields(papers = log.len(), %mode))]
pub fn replay(log: &MatchLog, watch: &TermSet, mode: ResolveMode, review: TermSet) -> CorpusResult {
    let mut aggregator = CorpusAggregator::new(review);

    for (paper, terms) in log {
        let outcome = match resolve_top(terms, watch, mode) {
            Some(keyword) => DocumentOutcome::Classified {
                keyword,
                terms: terms.clone(),
                evidence: Evidence::Recorded,
            },
            None => DocumentOutcome::Skipped(SkipReason::NoEvidence {
                terms: terms.clone(),
            }),
        };
        aggregator.record(Path::new(paper), &outcome);
    }

    let result = aggregator.finish();
    info!(
        classified = result.stats.total_classified,
        skipped = result.stats.total_skipped,
        "match log replayed"
    );
    result
}
