//! Core classification logic for papertally.
//!
//! This crate ties together the section locator, citation detection, keyword
//! extraction and resolution into corpus-wide workflows (e.g., `classify_directory`).

pub mod citation;
pub mod corpus;
pub mod keywords;
pub mod locator;
pub mod pipeline;
pub mod replay;
pub mod resolver;
pub mod survey;
pub mod text;

#[cfg(test)]
mod testing;

pub use corpus::{
    CorpusAggregator, CorpusResult, DocumentOutcome, MatchLog, PaperAnalyzer, ReviewHit,
    SkipReason, classify_corpus,
};
pub use pipeline::{
    CancellationFlag, ClassifyConfig, ClassifyRun, CorpusRun, ProgressReporter, SilentProgress,
    classify_directory, run_corpus, survey_directory,
};
pub use replay::{load_match_log, replay, save_match_log};
pub use resolver::{TermSet, resolve_top};
pub use survey::CitationSurvey;
pub use text::Evidence;
