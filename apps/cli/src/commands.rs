//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use papertally_core::pipeline::{
    CancellationFlag, ClassifyConfig, ClassifyRun, ProgressReporter, classify_directory,
    survey_directory,
};
use papertally_core::{CorpusResult, DocumentOutcome, TermSet, load_match_log, replay, save_match_log};
use papertally_reader::PdfReader;
use papertally_report::{KeywordCount, TallyReport, write_report};
use papertally_shared::{
    AppConfig, CorpusConfig, ResolveMode, SectionName, init_config, load_config, load_config_from,
    validate_config,
};

const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// papertally: count which organisms a literature corpus studies.
#[derive(Parser)]
#[command(
    name = "papertally",
    version,
    about = "Tally the most-studied vocabulary term across a corpus of papers citing a tool.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ~/.papertally/papertally.toml).
    #[arg(long, env = "PAPERTALLY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Classify every paper in a directory and print the keyword tally.
    Classify(ClassifyArgs),

    /// List which papers cite the tool inside their target sections.
    Cite {
        /// Corpus directory.
        dir: PathBuf,

        /// Tool name to look for (overrides config).
        #[arg(long)]
        literal: Option<String>,
    },

    /// Re-resolve a recorded match log without reading any PDF.
    Replay {
        /// Match log written by `classify --record`.
        log: PathBuf,

        /// Resolver mode (overrides config).
        #[arg(long)]
        mode: Option<ResolveMode>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags of `papertally classify`.
#[derive(Args, Debug, Default)]
pub(crate) struct ClassifyArgs {
    /// Corpus directory (not searched recursively).
    pub dir: PathBuf,

    /// Vocabulary file, one term per line (overrides config).
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Tool name papers must cite (overrides config).
    #[arg(long)]
    pub literal: Option<String>,

    /// Classify papers whether or not they cite the tool.
    #[arg(long)]
    pub no_citation: bool,

    /// Resolver mode: exclude-then-pick or pick-from-raw.
    #[arg(long)]
    pub mode: Option<ResolveMode>,

    /// Target section, repeatable (e.g. --target Methods --target Results).
    #[arg(long = "target")]
    pub targets: Vec<SectionName>,

    /// Documents processed concurrently.
    #[arg(short = 'j', long)]
    pub concurrency: Option<u32>,

    /// Only read section text; ignore matches in the file name.
    #[arg(long)]
    pub no_filename_first: bool,

    /// Write every paper's raw match sequence to this JSON file.
    #[arg(long)]
    pub record: Option<PathBuf>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Report export flags shared by `classify` and `replay`.
#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Write report.json and keywords.csv into this directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Fold keywords counted fewer times into "Other" (0 disables; overrides config).
    #[arg(long)]
    pub minor_threshold: Option<u64>,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "papertally=info",
        1 => "papertally=debug",
        _ => "papertally=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Classify(args) => cmd_classify(config_path, args).await,
        Command::Cite { dir, literal } => cmd_cite(config_path, &dir, literal).await,
        Command::Replay { log, mode, report } => cmd_replay(config_path, &log, mode, &report).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show(config_path).await,
        },
    }
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    Ok(match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    })
}

/// Fold `classify` flags into the loaded config and re-validate.
fn apply_classify_overrides(config: &mut AppConfig, args: &ClassifyArgs) -> Result<()> {
    if let Some(vocabulary) = &args.vocabulary {
        config.keywords.vocabulary = vocabulary.to_string_lossy().into_owned();
    }
    if let Some(literal) = &args.literal {
        config.citation.literal = literal.clone();
    }
    if args.no_citation {
        config.citation.enabled = false;
    }
    if let Some(mode) = args.mode {
        config.keywords.mode = mode;
    }
    if !args.targets.is_empty() {
        config.sections.targets = args.targets.clone();
    }
    if let Some(concurrency) = args.concurrency {
        config.defaults.concurrency = concurrency;
    }
    if args.no_filename_first {
        config.keywords.filename_first = false;
    }
    if let Some(threshold) = args.report.minor_threshold {
        config.report.minor_threshold = threshold;
    }
    validate_config(config)?;
    Ok(())
}

/// Cancel `flag` on the first ctrl-c; documents already started still finish.
fn cancel_on_ctrl_c(flag: &CancellationFlag) {
    let flag = flag.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, finishing in-flight documents");
            flag.cancel();
        }
    });
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_classify(config_path: Option<&Path>, args: ClassifyArgs) -> Result<()> {
    let mut config = resolve_config(config_path)?;
    apply_classify_overrides(&mut config, &args)?;

    let classify_config = ClassifyConfig {
        corpus_dir: args.dir.clone(),
        vocabulary_path: PathBuf::from(&config.keywords.vocabulary),
        corpus: CorpusConfig::from(&config),
    };

    info!(
        dir = %args.dir.display(),
        vocabulary = %classify_config.vocabulary_path.display(),
        mode = %config.keywords.mode,
        concurrency = config.defaults.concurrency,
        citation = config.citation.enabled,
        "classifying corpus"
    );

    let cancel = CancellationFlag::new();
    cancel_on_ctrl_c(&cancel);

    let reporter = CliProgress::new();
    let run = classify_directory(&classify_config, Arc::new(PdfReader), &reporter, &cancel).await?;

    if let Some(record) = &args.record {
        save_match_log(&run.result.match_log, record)?;
        info!(path = %record.display(), papers = run.result.match_log.len(), "match log recorded");
    }

    print_tally(&run.result, config.report.minor_threshold);
    println!("  Documents:  {}", run.documents);
    println!("  Vocabulary: {} terms (sha256 {})", run.vocabulary_terms, short_hash(&run.vocabulary_sha256));
    println!("  Run:        {}", run.run_id);
    println!("  Time:       {:.1}s", run.elapsed.as_secs_f64());
    if run.cancelled {
        println!("  Cancelled:  counts cover only the documents processed before the interrupt");
    }
    println!();

    if let Some(out) = &args.report.out {
        let report = TallyReport::from_run(&run, TOOL_VERSION);
        export_report(&report, out, config.report.minor_threshold)?;
    }

    Ok(())
}

async fn cmd_cite(config_path: Option<&Path>, dir: &Path, literal: Option<String>) -> Result<()> {
    let mut config = resolve_config(config_path)?;
    if let Some(literal) = literal {
        config.citation.literal = literal;
    }
    config.citation.enabled = true;
    validate_config(&config)?;

    let corpus = CorpusConfig::from(&config);
    info!(dir = %dir.display(), literal = %config.citation.literal, "surveying citations");

    let survey = survey_directory(dir, Arc::new(PdfReader), &corpus).await?;

    println!();
    for paper in &survey.citing {
        println!("  cites    {paper}");
    }
    for paper in &survey.not_citing {
        println!("  ---      {paper}");
    }
    println!();
    println!("  Citing:        {}", survey.citing.len());
    println!("  Not citing:    {}", survey.not_citing.len());
    println!("  Supplementary: {}", survey.supplementary.len());
    println!("  Unreadable:    {}", survey.unreadable.len());
    println!();

    Ok(())
}

async fn cmd_replay(
    config_path: Option<&Path>,
    log: &Path,
    mode: Option<ResolveMode>,
    report_args: &ReportArgs,
) -> Result<()> {
    let config = resolve_config(config_path)?;
    let mode = mode.unwrap_or(config.keywords.mode);
    let threshold = report_args
        .minor_threshold
        .unwrap_or(config.report.minor_threshold);

    let match_log = load_match_log(log)?;
    if match_log.is_empty() {
        return Err(eyre!("match log '{}' holds no papers", log.display()));
    }

    let result = replay(
        &match_log,
        &TermSet::new(config.keywords.watch_terms.iter().cloned()),
        mode,
        TermSet::new(config.keywords.review_terms.iter().cloned()),
    );

    print_tally(&result, threshold);

    if let Some(out) = &report_args.out {
        let report = TallyReport::from_result(&result, TOOL_VERSION);
        export_report(&report, out, threshold)?;
    }

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_tally(result: &CorpusResult, minor_threshold: u64) {
    let counts = papertally_report::keyword_counts(&result.frequency_table);
    let rows: Vec<KeywordCount> = if minor_threshold > 0 {
        papertally_report::group_minor(&counts, minor_threshold)
    } else {
        counts
    };
    let width = rows.iter().map(|r| r.keyword.len()).max().unwrap_or(7).max(7);

    println!();
    println!("  {:<width$}  count", "keyword");
    for row in &rows {
        println!("  {:<width$}  {}", row.keyword, row.count);
    }
    println!();

    for hit in &result.review {
        println!("  review: {} won in {} from {:?}", hit.keyword, hit.paper, hit.terms);
    }
    if !result.review.is_empty() {
        println!();
    }

    println!("  Total classified: {}", result.stats.total_classified);
    println!("  Total skipped:    {}", result.stats.total_skipped);
    let skips = &result.skips;
    println!(
        "    supplementary {}, too short {}, no citation {}, no evidence {}, failed {}",
        skips.supplementary, skips.insufficient_content, skips.no_citation, skips.no_evidence, skips.failed
    );
}

fn export_report(report: &TallyReport, out: &Path, minor_threshold: u64) -> Result<()> {
    let files = write_report(report, out, (minor_threshold > 0).then_some(minor_threshold))?;
    for file in &files {
        println!("  Wrote {} ({} bytes)", file.path.display(), file.size_bytes);
    }
    Ok(())
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn document_processed(&self, path: &Path, outcome: &DocumentOutcome, current: usize, total: usize) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.spinner
            .set_message(format!("Classifying [{current}/{total}] {name}: {}", outcome.label()));
    }

    fn done(&self, _run: &ClassifyRun) {
        self.spinner.finish_and_clear();
    }
}
