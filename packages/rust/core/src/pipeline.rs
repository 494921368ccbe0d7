//! End-to-end `classify` pipeline: vocabulary → corpus listing → per-document
//! analysis → aggregation.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tracing::{info, instrument, warn};

use papertally_matcher::{PhraseMatcher, TermMatcher, Vocabulary};
use papertally_reader::{PaperReader, list_documents};
use papertally_shared::{CorpusConfig, PaperTallyError, Result, RunId};

use crate::corpus::{CorpusAggregator, CorpusResult, DocumentOutcome, PaperAnalyzer};
use crate::resolver::TermSet;
use crate::survey::{CitationSurvey, survey_citations};

/// Input of the `classify` pipeline.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Directory holding the corpus (not searched recursively).
    pub corpus_dir: PathBuf,
    /// Newline-separated vocabulary file.
    pub vocabulary_path: PathBuf,
    /// Runtime settings.
    pub corpus: CorpusConfig,
}

/// Result of one `classify` run.
#[derive(Debug)]
pub struct ClassifyRun {
    pub run_id: RunId,
    /// Documents found in the corpus directory.
    pub documents: usize,
    /// Terms loaded from the vocabulary file.
    pub vocabulary_terms: usize,
    /// SHA-256 of the loaded vocabulary.
    pub vocabulary_sha256: String,
    pub result: CorpusResult,
    /// True when the run stopped early; `result` then covers a prefix of the corpus.
    pub cancelled: bool,
    pub elapsed: Duration,
}

/// What [`run_corpus`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRun {
    pub result: CorpusResult,
    /// True only when the flag stopped the run with documents left unprocessed.
    pub cancelled: bool,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called once per document, in corpus order.
    fn document_processed(&self, path: &Path, outcome: &DocumentOutcome, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, run: &ClassifyRun);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn document_processed(&self, _path: &Path, _outcome: &DocumentOutcome, _current: usize, _total: usize) {}
    fn done(&self, _run: &ClassifyRun) {}
}

/// Shared stop signal, checked between batches.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Classify `paths`, up to `config.concurrency` documents at a time.
///
/// PDF parsing is blocking work, so every document runs on the blocking pool.
/// Outcomes are folded in corpus order regardless of completion order, which
/// keeps runs reproducible. A panicking document counts as failed.
#[instrument(skip_all, fields(documents = paths.len(), concurrency = config.concurrency))]
pub async fn run_corpus(
    paths: &[PathBuf],
    reader: Arc<dyn PaperReader>,
    matcher: Arc<dyn TermMatcher>,
    config: Arc<CorpusConfig>,
    progress: &dyn ProgressReporter,
    cancel: &CancellationFlag,
) -> CorpusRun {
    let concurrency = config.concurrency.max(1) as usize;
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let mut aggregator = CorpusAggregator::new(TermSet::new(config.review_terms.iter().cloned()));
    let total = paths.len();
    let mut done = 0;
    let mut cancelled = false;

    for batch in paths.chunks(concurrency) {
        if cancel.is_cancelled() {
            warn!(processed = done, total, "run cancelled, stopping early");
            cancelled = true;
            break;
        }

        let mut handles = Vec::with_capacity(batch.len());
        for path in batch {
            let reader = Arc::clone(&reader);
            let matcher = Arc::clone(&matcher);
            let config = Arc::clone(&config);
            let sem = Arc::clone(&semaphore);
            let path_owned = path.clone();

            handles.push(tokio::spawn(async move {
                let _permit = sem.acquire_owned().await;
                tokio::task::spawn_blocking(move || {
                    PaperAnalyzer::new(reader.as_ref(), matcher.as_ref(), &config).analyze(&path_owned)
                })
                .await
            }));
        }

        for (path, handle) in batch.iter().zip(handles) {
            let outcome = match handle.await {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(e)) | Err(e) => {
                    warn!(path = %path.display(), error = %e, "document task failed");
                    DocumentOutcome::Failed(e.to_string())
                }
            };
            aggregator.record(path, &outcome);
            done += 1;
            progress.document_processed(path, &outcome, done, total);
        }
    }

    CorpusRun {
        result: aggregator.finish(),
        cancelled,
    }
}

/// Run the full `classify` pipeline.
///
/// 1. Load the vocabulary (fails before any document is touched)
/// 2. List the corpus
/// 3. Analyze and aggregate
#[instrument(skip_all, fields(corpus = %config.corpus_dir.display()))]
pub async fn classify_directory(
    config: &ClassifyConfig,
    reader: Arc<dyn PaperReader>,
    progress: &dyn ProgressReporter,
    cancel: &CancellationFlag,
) -> Result<ClassifyRun> {
    let start = Instant::now();
    let run_id = RunId::new();
    info!(%run_id, "starting classify pipeline");

    progress.phase("Loading vocabulary");
    let vocabulary = Vocabulary::load(&config.vocabulary_path)?;
    let matcher: Arc<dyn TermMatcher> = Arc::new(PhraseMatcher::new(&vocabulary));

    progress.phase("Listing corpus");
    let paths = list_documents(&config.corpus_dir, &config.corpus.extension)?;
    if paths.is_empty() {
        warn!(
            extension = %config.corpus.extension,
            "no documents found in corpus directory"
        );
    }

    progress.phase("Classifying documents");
    let corpus_run = run_corpus(
        &paths,
        reader,
        matcher,
        Arc::new(config.corpus.clone()),
        progress,
        cancel,
    )
    .await;

    let run = ClassifyRun {
        run_id,
        documents: paths.len(),
        vocabulary_terms: vocabulary.len(),
        vocabulary_sha256: vocabulary.fingerprint(),
        result: corpus_run.result,
        cancelled: corpus_run.cancelled,
        elapsed: start.elapsed(),
    };

    info!(
        run_id = %run.run_id,
        documents = run.documents,
        classified = run.result.stats.total_classified,
        skipped = run.result.stats.total_skipped,
        elapsed_ms = run.elapsed.as_millis(),
        "classify pipeline complete"
    );
    progress.done(&run);
    Ok(run)
}

/// List `dir` and survey it for the configured citation literal.
#[instrument(skip_all, fields(corpus = %dir.display()))]
pub async fn survey_directory(
    dir: &Path,
    reader: Arc<dyn PaperReader>,
    config: &CorpusConfig,
) -> Result<CitationSurvey> {
    let literal = config
        .citation_literal
        .clone()
        .ok_or_else(|| PaperTallyError::validation("citation survey needs a citation literal"))?;
    let paths = list_documents(dir, &config.extension)?;
    let targets = config.targets.clone();
    let markers = config.supplementary_markers.clone();

    tokio::task::spawn_blocking(move || {
        survey_citations(&paths, reader.as_ref(), &literal, &targets, &markers)
    })
    .await
    .map_err(|e| PaperTallyError::validation(format!("survey task failed: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
