//! Report export: `report.json` and `keywords.csv`, written atomically.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use papertally_shared::{PaperTallyError, Result};

use crate::tally::{KeywordCount, TallyReport};

/// File name of the JSON report.
pub const REPORT_JSON: &str = "report.json";

/// File name of the CSV keyword table.
pub const KEYWORDS_CSV: &str = "keywords.csv";

/// Metadata about one written report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    /// SHA-256 of the file content.
    pub sha256: String,
    pub size_bytes: usize,
}

/// Render `keyword,count` rows with a header line.
pub fn render_csv(counts: &[KeywordCount]) -> String {
    let mut out = String::from("keyword,count\n");
    for row in counts {
        out.push_str(&csv_field(&row.keyword));
        out.push(',');
        out.push_str(&row.count.to_string());
        out.push('\n');
    }
    out
}

/// Quote a field when it holds a comma, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write `report.json` and `keywords.csv` into `dir`.
///
/// The CSV holds the grouped table when `minor_threshold` is set. Each file
/// is written to a temp name first and then renamed into place.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_report(report: &TallyReport, dir: &Path, minor_threshold: Option<u64>) -> Result<Vec<ExportedFile>> {
    std::fs::create_dir_all(dir).map_err(|e| PaperTallyError::io(dir, e))?;

    let json = serde_json::to_string_pretty(report)
        .map_err(|e| PaperTallyError::Report(format!("JSON serialization failed: {e}")))?;
    let rows = match minor_threshold {
        Some(threshold) => report.grouped(threshold),
        None => report.counts.clone(),
    };
    let csv = render_csv(&rows);

    let files = vec![
        write_atomic(dir, REPORT_JSON, &json)?,
        write_atomic(dir, KEYWORDS_CSV, &csv)?,
    ];

    info!(count = files.len(), "report written");
    Ok(files)
}

fn write_atomic(dir: &Path, filename: &str, content: &str) -> Result<ExportedFile> {
    let target = dir.join(filename);
    let temp = dir.join(format!(".{filename}.tmp"));

    std::fs::write(&temp, content).map_err(|e| PaperTallyError::io(&temp, e))?;
    std::fs::rename(&temp, &target).map_err(|e| PaperTallyError::io(&target, e))?;

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let sha256 = format!("{:x}", hasher.finalize());

    debug!(file = %filename, size = content.len(), "wrote report file");

    Ok(ExportedFile {
        path: target,
        sha256,
        size_bytes: content.len(),
    })
}
