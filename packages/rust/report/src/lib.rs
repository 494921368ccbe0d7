//! Tally report building and export for papertally.
//!
//! Turns an aggregated corpus result into `report.json` and `keywords.csv`.

pub mod export;
pub mod tally;

pub use export::{ExportedFile, KEYWORDS_CSV, REPORT_JSON, render_csv, write_report};
pub use tally::{KeywordCount, OTHER_BUCKET, REPORT_SCHEMA_VERSION, TallyReport, group_minor, keyword_counts};
