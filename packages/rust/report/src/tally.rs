//! The tally report: what a run counted, in a stable, serializable shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use papertally_core::{ClassifyRun, CorpusResult, ReviewHit};
use papertally_shared::{CorpusStats, FrequencyTable, RunId, SkipBreakdown};

/// Current report schema version.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Label of the bucket collecting keywords below the minor threshold.
pub const OTHER_BUCKET: &str = "Other";

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

/// The `report.json` structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyReport {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Classify run that produced the counts; absent for replays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<RunId>,
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    /// SHA-256 of the vocabulary the counts were produced with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_sha256: Option<String>,
    #[serde(default)]
    pub cancelled: bool,
    pub stats: CorpusStats,
    pub skips: SkipBreakdown,
    /// Count descending, then keyword ascending.
    pub counts: Vec<KeywordCount>,
    #[serde(default)]
    pub review: Vec<ReviewHit>,
}

impl TallyReport {
    /// Report for an aggregated result with no run metadata (e.g. a replay).
    pub fn from_result(result: &CorpusResult, tool_version: &str) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            run_id: None,
            generated_at: Utc::now(),
            tool_version: tool_version.to_string(),
            vocabulary_sha256: None,
            cancelled: false,
            stats: result.stats,
            skips: result.skips,
            counts: keyword_counts(&result.frequency_table),
            review: result.review.clone(),
        }
    }

    /// Report for a full classify run.
    pub fn from_run(run: &ClassifyRun, tool_version: &str) -> Self {
        Self {
            run_id: Some(run.run_id.clone()),
            vocabulary_sha256: Some(run.vocabulary_sha256.clone()),
            cancelled: run.cancelled,
            ..Self::from_result(&run.result, tool_version)
        }
    }

    /// Counts with every keyword under `threshold` folded into [`OTHER_BUCKET`].
    pub fn grouped(&self, threshold: u64) -> Vec<KeywordCount> {
        group_minor(&self.counts, threshold)
    }
}

/// Frequency table rows in report order.
pub fn keyword_counts(table: &FrequencyTable) -> Vec<KeywordCount> {
    table
        .sorted()
        .into_iter()
        .map(|(keyword, count)| KeywordCount { keyword, count })
        .collect()
}

/// Fold keywords counted fewer than `threshold` times into one trailing
/// "Other" row. Rows at or above the threshold keep their order; no "Other"
/// row is added when nothing falls below it.
pub fn group_minor(counts: &[KeywordCount], threshold: u64) -> Vec<KeywordCount> {
    let (major, minor): (Vec<&KeywordCount>, Vec<&KeywordCount>) =
        counts.iter().partition(|row| row.count >= threshold);

    let mut grouped: Vec<KeywordCount> = major.into_iter().cloned().collect();
    let other: u64 = minor.iter().map(|row| row.count).sum();
    if !minor.is_empty() {
        grouped.push(KeywordCount {
            keyword: OTHER_BUCKET.to_string(),
            count: other,
        });
    }
    grouped
}
