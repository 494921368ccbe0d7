//! Shared types, error model, and configuration for papertally.
//!
//! This crate is the foundation depended on by all other papertally crates.
//! It provides:
//! - [`PaperTallyError`]: the unified error type
//! - Domain types ([`OutlineEntry`], [`SectionWindow`], [`FrequencyTable`], [`CorpusStats`])
//! - Configuration ([`AppConfig`], [`CorpusConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CitationConfig, CorpusConfig, DefaultsConfig, KeywordsConfig, ReportConfig,
    ResolveMode, SectionsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from, validate_config,
};
pub use error::{PaperTallyError, Result};
pub use types::{
    CorpusStats, DocumentRecord, FrequencyTable, OutlineEntry, RunId, SectionName, SectionWindow,
    SkipBreakdown,
};
