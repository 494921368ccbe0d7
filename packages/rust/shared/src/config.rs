//! Application configuration for papertally.
//!
//! User config lives at `~/.papertally/papertally.toml`.
//! CLI flags override config file values, which override defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaperTallyError, Result};
use crate::types::SectionName;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "papertally.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".papertally";

// ---------------------------------------------------------------------------
// Resolve mode
// ---------------------------------------------------------------------------

/// How the top-keyword resolver treats watch-set terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolveMode {
    /// Drop watch-set terms, then vote.
    #[default]
    ExcludeThenPick,
    /// Vote over the raw match sequence.
    PickFromRaw,
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveMode::ExcludeThenPick => f.write_str("exclude-then-pick"),
            ResolveMode::PickFromRaw => f.write_str("pick-from-raw"),
        }
    }
}

impl FromStr for ResolveMode {
    type Err = PaperTallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exclude-then-pick" => Ok(ResolveMode::ExcludeThenPick),
            "pick-from-raw" => Ok(ResolveMode::PickFromRaw),
            other => Err(PaperTallyError::config(format!(
                "unknown resolve mode '{other}': expected 'exclude-then-pick' or 'pick-from-raw'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Config structs (matching papertally.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Tool-citation settings.
    #[serde(default)]
    pub citation: CitationConfig,

    /// Section targeting.
    #[serde(default)]
    pub sections: SectionsConfig,

    /// Vocabulary and keyword voting.
    #[serde(default)]
    pub keywords: KeywordsConfig,

    /// Report export.
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// File extension of corpus documents (without the dot).
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Documents processed concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            concurrency: default_concurrency(),
        }
    }
}

fn default_extension() -> String {
    "pdf".into()
}
fn default_concurrency() -> u32 {
    1
}

/// `[citation]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationConfig {
    /// Whether a paper must mention the tool to be classified.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Case-sensitive tool name looked up in section text.
    #[serde(default = "default_literal")]
    pub literal: String,

    /// Case-sensitive filename substrings marking supplementary material.
    #[serde(default = "default_supplementary_markers")]
    pub supplementary_markers: Vec<String>,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            literal: default_literal(),
            supplementary_markers: default_supplementary_markers(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_literal() -> String {
    "DeepLabCut".into()
}
fn default_supplementary_markers() -> Vec<String> {
    ["Supplementary", "supplementary", "suppl", "supplement"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// `[sections]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionsConfig {
    /// Target sections, in matching priority order.
    #[serde(default = "default_targets")]
    pub targets: Vec<SectionName>,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
        }
    }
}

fn default_targets() -> Vec<SectionName> {
    SectionName::ALL.to_vec()
}

/// `[keywords]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Line-delimited vocabulary file.
    #[serde(default = "default_vocabulary")]
    pub vocabulary: String,

    /// Resolver mode.
    #[serde(default)]
    pub mode: ResolveMode,

    /// Try the file name before reading section text.
    #[serde(default = "default_true")]
    pub filename_first: bool,

    /// Terms that may not win the vote in `exclude-then-pick` mode.
    #[serde(default = "default_watch_terms")]
    pub watch_terms: Vec<String>,

    /// Winning terms worth a manual look; reported as diagnostics.
    #[serde(default = "default_review_terms")]
    pub review_terms: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            vocabulary: default_vocabulary(),
            mode: ResolveMode::default(),
            filename_first: true,
            watch_terms: default_watch_terms(),
            review_terms: default_review_terms(),
        }
    }
}

fn default_vocabulary() -> String {
    "classes".into()
}
fn default_watch_terms() -> Vec<String> {
    ["egg", "python", "rodent", "pupa", "larva", "primate", "insect", "bug"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_review_terms() -> Vec<String> {
    ["rodent", "pupa"].into_iter().map(String::from).collect()
}

/// `[report]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Keywords counted fewer times than this fold into "Other" (0 disables).
    #[serde(default = "default_minor_threshold")]
    pub minor_threshold: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            minor_threshold: default_minor_threshold(),
        }
    }
}

fn default_minor_threshold() -> u64 {
    5
}

// ---------------------------------------------------------------------------
// Corpus config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime corpus configuration: merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Corpus file extension (without the dot).
    pub extension: String,
    /// Documents processed concurrently.
    pub concurrency: u32,
    /// Tool literal; `None` disables the citation gate.
    pub citation_literal: Option<String>,
    /// Supplementary filename markers.
    pub supplementary_markers: Vec<String>,
    /// Target sections in priority order.
    pub targets: Vec<SectionName>,
    /// Resolver mode.
    pub mode: ResolveMode,
    /// Try the file name before section text.
    pub filename_first: bool,
    /// Watch-set terms.
    pub watch_terms: Vec<String>,
    /// Review-list terms.
    pub review_terms: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for CorpusConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            extension: config.defaults.extension.clone(),
            concurrency: config.defaults.concurrency,
            citation_literal: config
                .citation
                .enabled
                .then(|| config.citation.literal.clone()),
            supplementary_markers: config.citation.supplementary_markers.clone(),
            targets: config.sections.targets.clone(),
            mode: config.keywords.mode,
            filename_first: config.keywords.filename_first,
            watch_terms: config.keywords.watch_terms.clone(),
            review_terms: config.keywords.review_terms.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.papertally/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PaperTallyError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.papertally/papertally.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| PaperTallyError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        PaperTallyError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| PaperTallyError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| PaperTallyError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| PaperTallyError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Reject configurations the pipeline cannot run with.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.sections.targets.is_empty() {
        return Err(PaperTallyError::config("[sections] targets must not be empty"));
    }
    if config.citation.enabled && config.citation.literal.is_empty() {
        return Err(PaperTallyError::config(
            "[citation] literal must not be empty while citation checking is enabled",
        ));
    }
    if config.defaults.concurrency == 0 {
        return Err(PaperTallyError::config("[defaults] concurrency must be at least 1"));
    }
    Ok(())
}
