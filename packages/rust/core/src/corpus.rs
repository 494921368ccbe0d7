//! Per-document classification and corpus aggregation.
//!
//! Each document walks the same chain:
//!
//! ```text
//! START ─ supplementary? ──────────────────────────────▶ SKIPPED
//!   └─ sections located ─ literal absent? ─────────────▶ SKIPPED
//!        └─ terms extracted ─ resolver returns none? ──▶ SKIPPED
//!             └─ CLASSIFIED (frequency[term] += 1)
//! ```
//!
//! Read failures and reader panics degrade the one document to `Failed`
//! (counted as skipped);
//! the traversal always continues.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use papertally_matcher::TermMatcher;
use papertally_reader::PaperReader;
use papertally_shared::{CorpusConfig, CorpusStats, FrequencyTable, Result, SkipBreakdown};

use crate::citation::{contains_literal, is_supplementary};
use crate::keywords::{extract_terms, filename_terms};
use crate::resolver::{TermSet, resolve_top};
use crate::text::{Evidence, GatheredText, gather_text};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why a document did not contribute to the frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Supplementary,
    InsufficientContent,
    NoCitation,
    /// Nothing survived the resolver; carries the raw matches (possibly empty).
    NoEvidence { terms: Vec<String> },
}

/// Final state of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Classified {
        keyword: String,
        terms: Vec<String>,
        evidence: Evidence,
    },
    Skipped(SkipReason),
    /// The document could not be read.
    Failed(String),
}

impl DocumentOutcome {
    /// Raw match sequence, when extraction got that far.
    pub fn terms(&self) -> Option<&[String]> {
        match self {
            DocumentOutcome::Classified { terms, .. } => Some(terms),
            DocumentOutcome::Skipped(SkipReason::NoEvidence { terms }) => Some(terms),
            _ => None,
        }
    }

    /// Short label for logs and progress output.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentOutcome::Classified { .. } => "classified",
            DocumentOutcome::Skipped(SkipReason::Supplementary) => "supplementary",
            DocumentOutcome::Skipped(SkipReason::InsufficientContent) => "insufficient content",
            DocumentOutcome::Skipped(SkipReason::NoCitation) => "no citation",
            DocumentOutcome::Skipped(SkipReason::NoEvidence { .. }) => "no evidence",
            DocumentOutcome::Failed(_) => "failed",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-document analysis
// ---------------------------------------------------------------------------

/// Runs the classification chain for single documents.
///
/// Holds only shared, read-only collaborators, so one analyzer can serve many
/// documents (and threads).
pub struct PaperAnalyzer<'a> {
    reader: &'a dyn PaperReader,
    matcher: &'a dyn TermMatcher,
    config: &'a CorpusConfig,
    watch: TermSet,
}

impl<'a> PaperAnalyzer<'a> {
    pub fn new(
        reader: &'a dyn PaperReader,
        matcher: &'a dyn TermMatcher,
        config: &'a CorpusConfig,
    ) -> Self {
        Self {
            reader,
            matcher,
            config,
            watch: TermSet::new(config.watch_terms.iter().cloned()),
        }
    }

    /// Classify one document. Never fails: read errors and reader panics
    /// become [`DocumentOutcome::Failed`].
    pub fn analyze(&self, path: &Path) -> DocumentOutcome {
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_analyze(path))) {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                warn!(path = %path.display(), error = %e, "failed to read document, skipping");
                DocumentOutcome::Failed(e.to_string())
            }
            Err(payload) => {
                let cause = panic_message(payload.as_ref());
                warn!(path = %path.display(), %cause, "reader panicked on document, skipping");
                DocumentOutcome::Failed(cause)
            }
        }
    }

    fn try_analyze(&self, path: &Path) -> Result<DocumentOutcome> {
        if is_supplementary(path, &self.config.supplementary_markers) {
            return Ok(DocumentOutcome::Skipped(SkipReason::Supplementary));
        }

        // The file name is nearly free to match, so it goes first.
        let mut filename_hit = if self.config.filename_first {
            self.classify_by_filename(path)
        } else {
            None
        };

        if self.config.citation_literal.is_none() {
            if let Some(outcome) = filename_hit.take() {
                return Ok(outcome);
            }
        }

        let mut doc = self.reader.open(path)?;
        let (text, evidence) = match gather_text(doc.as_mut(), path, &self.config.targets)? {
            GatheredText::Text { text, evidence, .. } => (text, evidence),
            GatheredText::Insufficient => {
                return Ok(DocumentOutcome::Skipped(SkipReason::InsufficientContent));
            }
        };

        if let Some(literal) = &self.config.citation_literal {
            if !contains_literal(&text, literal) {
                return Ok(DocumentOutcome::Skipped(SkipReason::NoCitation));
            }
        }

        if let Some(outcome) = filename_hit {
            return Ok(outcome);
        }

        let terms = extract_terms(&text, self.matcher);
        Ok(self.resolve(terms, evidence))
    }

    /// A classification from the file name alone. `None` when the name holds
    /// no term that survives the resolver (e.g. only watch-set terms), in
    /// which case the section text decides.
    fn classify_by_filename(&self, path: &Path) -> Option<DocumentOutcome> {
        let terms = filename_terms(path, self.matcher);
        let keyword = resolve_top(&terms, &self.watch, self.config.mode)?;
        Some(DocumentOutcome::Classified {
            keyword,
            terms,
            evidence: Evidence::Filename,
        })
    }

    fn resolve(&self, terms: Vec<String>, evidence: Evidence) -> DocumentOutcome {
        match resolve_top(&terms, &self.watch, self.config.mode) {
            Some(keyword) => DocumentOutcome::Classified {
                keyword,
                terms,
                evidence,
            },
            None => DocumentOutcome::Skipped(SkipReason::NoEvidence { terms }),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Recorded match sequences keyed by paper file name.
pub type MatchLog = BTreeMap<String, Vec<String>>;

/// A winning keyword that sits on the review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewHit {
    pub paper: String,
    pub keyword: String,
    pub terms: Vec<String>,
}

/// Everything a corpus run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusResult {
    pub frequency_table: FrequencyTable,
    pub stats: CorpusStats,
    pub skips: SkipBreakdown,
    pub review: Vec<ReviewHit>,
    pub match_log: MatchLog,
}

/// Owns the frequency table and statistics for one traversal.
///
/// Only [`CorpusAggregator::record`] mutates them, one document at a time, and
/// only ever by adding.
#[derive(Debug, Default)]
pub struct CorpusAggregator {
    review_terms: TermSet,
    result: CorpusResult,
}

impl CorpusAggregator {
    pub fn new(review_terms: TermSet) -> Self {
        Self {
            review_terms,
            result: CorpusResult::default(),
        }
    }

    /// Fold one document's outcome into the running totals.
    pub fn record(&mut self, paper: &Path, outcome: &DocumentOutcome) {
        let key = paper_key(paper);
        if let Some(terms) = outcome.terms() {
            self.result.match_log.insert(key.clone(), terms.to_vec());
        }

        let skips = &mut self.result.skips;
        match outcome {
            DocumentOutcome::Classified { keyword, terms, .. } => {
                self.result.frequency_table.increment(keyword);
                self.result.stats.total_classified += 1;

                if self.review_terms.contains(keyword) {
                    warn!(paper = %key, %keyword, ?terms, "winning keyword is on the review list");
                    self.result.review.push(ReviewHit {
                        paper: key,
                        keyword: keyword.clone(),
                        terms: terms.clone(),
                    });
                }
                return;
            }
            DocumentOutcome::Skipped(SkipReason::Supplementary) => skips.supplementary += 1,
            DocumentOutcome::Skipped(SkipReason::InsufficientContent) => {
                skips.insufficient_content += 1
            }
            DocumentOutcome::Skipped(SkipReason::NoCitation) => skips.no_citation += 1,
            DocumentOutcome::Skipped(SkipReason::NoEvidence { .. }) => skips.no_evidence += 1,
            DocumentOutcome::Failed(_) => skips.failed += 1,
        }
        self.result.stats.total_skipped += 1;
        debug!(paper = %key, reason = outcome.label(), "document skipped");
    }

    pub fn finish(self) -> CorpusResult {
        self.result
    }
}

/// Readable cause from a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("reader panicked: {message}")
}

/// Key used for a paper in match logs and review hits: its file name.
pub fn paper_key(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Classify every document in `paths`, one at a time.
#[instrument(skip_all, fields(documents = paths.len()))]
pub fn classify_corpus(
    paths: &[PathBuf],
    reader: &dyn PaperReader,
    matcher: &dyn TermMatcher,
    config: &CorpusConfig,
) -> CorpusResult {
    let analyzer = PaperAnalyzer::new(reader, matcher, config);
    let mut aggregator = CorpusAggregator::new(TermSet::new(config.review_terms.iter().cloned()));

    for path in paths {
        let outcome = analyzer.analyze(path);
        aggregator.record(path, &outcome);
    }

    let result = aggregator.finish();
    info!(
        classified = result.stats.total_classified,
        skipped = result.stats.total_skipped,
        keywords = result.frequency_table.len(),
        "corpus classified"
    );
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingMatcher, FakeReader, pages_with};
    use papertally_shared::OutlineEntry;

    fn methods_outline() -> Vec<OutlineEntry> {
        vec![
            OutlineEntry::new(1, "Introduction", 1),
            OutlineEntry::new(1, "Methods", 2),
            OutlineEntry::new(1, "Discussion", 3),
        ]
    }

    fn config() -> CorpusConfig {
        CorpusConfig::default()
    }

    #[test]
    fn classifies_by_most_frequent_term() {
        let reader = FakeReader::new().with_paper(
            "p1.pdf",
            methods_outline(),
            pages_with(5, 1, "We used DeepLabCut on each mouse, one rat and a mouse."),
        );
        let matcher = CountingMatcher::new(&["mouse", "rat"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        let outcome = analyzer.analyze(Path::new("p1.pdf"));
        assert_eq!(
            outcome,
            DocumentOutcome::Classified {
                keyword: "mouse".into(),
                terms: vec!["mouse".into(), "rat".into(), "mouse".into()],
                evidence: Evidence::Sections,
            }
        );
    }

    #[test]
    fn supplementary_files_are_never_opened() {
        let reader = FakeReader::new();
        let matcher = CountingMatcher::new(&["mouse"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        let outcome = analyzer.analyze(Path::new("mouse_supplementary.pdf"));
        assert_eq!(outcome, DocumentOutcome::Skipped(SkipReason::Supplementary));
        assert_eq!(reader.opens(), 0);
        assert_eq!(reader.page_reads(), 0);
        assert_eq!(matcher.calls(), 0);
    }

    #[test]
    fn missing_citation_skips() {
        let reader = FakeReader::new().with_paper(
            "p1.pdf",
            methods_outline(),
            pages_with(5, 1, "We tracked each mouse by hand."),
        );
        let matcher = CountingMatcher::new(&["mouse"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        assert_eq!(
            analyzer.analyze(Path::new("p1.pdf")),
            DocumentOutcome::Skipped(SkipReason::NoCitation)
        );
    }

    #[test]
    fn citation_outside_sections_does_not_count() {
        let reader = FakeReader::new().with_paper(
            "p1.pdf",
            methods_outline(),
            pages_with(5, 0, "Unlike DeepLabCut, ... mouse"),
        );
        let matcher = CountingMatcher::new(&["mouse"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        assert_eq!(
            analyzer.analyze(Path::new("p1.pdf")),
            DocumentOutcome::Skipped(SkipReason::NoCitation)
        );
    }

    #[test]
    fn only_watch_terms_means_no_evidence() {
        let reader = FakeReader::new().with_paper(
            "p1.pdf",
            methods_outline(),
            pages_with(5, 1, "DeepLabCut tracked every rodent and insect"),
        );
        let matcher = CountingMatcher::new(&["rodent", "insect", "mouse"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        assert_eq!(
            analyzer.analyze(Path::new("p1.pdf")),
            DocumentOutcome::Skipped(SkipReason::NoEvidence {
                terms: vec!["rodent".into(), "insect".into()],
            })
        );
    }

    #[test]
    fn watch_only_filename_falls_back_to_sections() {
        let reader = FakeReader::new().with_paper(
            "rodent_gait.pdf",
            methods_outline(),
            pages_with(5, 1, "DeepLabCut tracked each mouse"),
        );
        let matcher = CountingMatcher::new(&["rodent", "mouse"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        assert_eq!(
            analyzer.analyze(Path::new("rodent_gait.pdf")),
            DocumentOutcome::Classified {
                keyword: "mouse".into(),
                terms: vec!["mouse".into()],
                evidence: Evidence::Sections,
            }
        );
        // file name, then section text
        assert_eq!(matcher.calls(), 2);
    }

    #[test]
    fn watch_only_filename_without_citation_gate_reads_sections() {
        let reader = FakeReader::new().with_paper(
            "rodent_gait.pdf",
            methods_outline(),
            pages_with(5, 1, "we tracked each mouse"),
        );
        let matcher = CountingMatcher::new(&["rodent", "mouse"]);
        let cfg = CorpusConfig {
            citation_literal: None,
            ..config()
        };
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        let outcome = analyzer.analyze(Path::new("rodent_gait.pdf"));
        assert!(matches!(
            outcome,
            DocumentOutcome::Classified { ref keyword, evidence: Evidence::Sections, .. } if keyword == "mouse"
        ));
        assert_eq!(reader.opens(), 1);
    }

    #[test]
    fn pick_from_raw_lets_watch_terms_win() {
        let reader = FakeReader::new().with_paper(
            "p1.pdf",
            methods_outline(),
            pages_with(5, 1, "DeepLabCut tracked every rodent"),
        );
        let matcher = CountingMatcher::new(&["rodent"]);
        let cfg = CorpusConfig {
            mode: papertally_shared::ResolveMode::PickFromRaw,
            ..config()
        };
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        assert!(matches!(
            analyzer.analyze(Path::new("p1.pdf")),
            DocumentOutcome::Classified { keyword, .. } if keyword == "rodent"
        ));
    }

    #[test]
    fn short_document_is_skipped() {
        let reader = FakeReader::new().with_paper("p1.pdf", vec![], pages_with(2, 0, "DeepLabCut mouse"));
        let matcher = CountingMatcher::new(&["mouse"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        assert_eq!(
            analyzer.analyze(Path::new("p1.pdf")),
            DocumentOutcome::Skipped(SkipReason::InsufficientContent)
        );
    }

    #[test]
    fn unreadable_document_fails_softly() {
        let reader = FakeReader::new().with_unreadable("bad.pdf");
        let matcher = CountingMatcher::new(&["mouse"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        match analyzer.analyze(Path::new("bad.pdf")) {
            DocumentOutcome::Failed(cause) => assert!(cause.contains("corrupt")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn filename_match_skips_page_reads_without_citation_gate() {
        let reader = FakeReader::new().with_paper(
            "Mouse_Gait.pdf",
            methods_outline(),
            pages_with(5, 1, "rat rat rat"),
        );
        let matcher = CountingMatcher::new(&["mouse", "rat"]);
        let cfg = CorpusConfig {
            citation_literal: None,
            ..config()
        };
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        let outcome = analyzer.analyze(Path::new("Mouse_Gait.pdf"));
        assert_eq!(
            outcome,
            DocumentOutcome::Classified {
                keyword: "mouse".into(),
                terms: vec!["mouse".into()],
                evidence: Evidence::Filename,
            }
        );
        assert_eq!(reader.opens(), 0);
        assert_eq!(reader.page_reads(), 0);
        assert_eq!(matcher.calls(), 1);
    }

    #[test]
    fn filename_match_skips_text_matching_with_citation_gate() {
        let reader = FakeReader::new().with_paper(
            "Mouse_Gait.pdf",
            methods_outline(),
            pages_with(5, 1, "DeepLabCut and a rat"),
        );
        let matcher = CountingMatcher::new(&["mouse", "rat"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        let outcome = analyzer.analyze(Path::new("Mouse_Gait.pdf"));
        assert!(matches!(
            outcome,
            DocumentOutcome::Classified { ref keyword, evidence: Evidence::Filename, .. } if keyword == "mouse"
        ));
        // Pages were read for the citation check, but the matcher only saw the file name.
        assert_eq!(reader.page_reads(), 1);
        assert_eq!(matcher.calls(), 1);
    }

    #[test]
    fn filename_first_can_be_disabled() {
        let reader = FakeReader::new().with_paper(
            "Mouse_Gait.pdf",
            methods_outline(),
            pages_with(5, 1, "DeepLabCut and a rat"),
        );
        let matcher = CountingMatcher::new(&["mouse", "rat"]);
        let cfg = CorpusConfig {
            filename_first: false,
            ..config()
        };
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        assert!(matches!(
            analyzer.analyze(Path::new("Mouse_Gait.pdf")),
            DocumentOutcome::Classified { keyword, evidence: Evidence::Sections, .. } if keyword == "rat"
        ));
    }

    #[test]
    fn aggregator_counts_every_document_once() {
        let mut agg = CorpusAggregator::new(TermSet::new(["rodent"]));
        let classified = |k: &str| DocumentOutcome::Classified {
            keyword: k.into(),
            terms: vec![k.into()],
            evidence: Evidence::Sections,
        };

        agg.record(Path::new("a.pdf"), &classified("mouse"));
        agg.record(Path::new("b.pdf"), &classified("mouse"));
        agg.record(Path::new("c.pdf"), &classified("rodent"));
        agg.record(Path::new("d.pdf"), &DocumentOutcome::Skipped(SkipReason::NoCitation));
        agg.record(Path::new("e.pdf"), &DocumentOutcome::Failed("boom".into()));
        agg.record(
            Path::new("f.pdf"),
            &DocumentOutcome::Skipped(SkipReason::NoEvidence { terms: vec![] }),
        );

        let result = agg.finish();
        assert_eq!(result.frequency_table.get("mouse"), 2);
        assert_eq!(result.frequency_table.get("rodent"), 1);
        assert_eq!(
            result.stats,
            CorpusStats {
                total_classified: 3,
                total_skipped: 3
            }
        );
        assert_eq!(result.skips.total(), result.stats.total_skipped);
        assert_eq!(result.skips.failed, 1);
        assert_eq!(result.review.len(), 1);
        assert_eq!(result.review[0].paper, "c.pdf");
        assert_eq!(result.match_log.len(), 4);
        assert_eq!(result.match_log["f.pdf"], Vec::<String>::new());
    }

    fn sample_corpus() -> (FakeReader, Vec<PathBuf>) {
        let reader = FakeReader::new()
            .with_paper("a.pdf", methods_outline(), pages_with(5, 1, "DeepLabCut mouse mouse rat"))
            .with_paper("b.pdf", methods_outline(), pages_with(5, 1, "DeepLabCut rat"))
            .with_paper("c.pdf", methods_outline(), pages_with(5, 1, "no tool here, mouse"))
            .with_paper("d.pdf", vec![], pages_with(8, 4, "DeepLabCut with a fly"))
            .with_unreadable("e.pdf");
        let paths = ["a.pdf", "b.pdf", "c.pdf", "d.pdf", "e.pdf", "f_supplementary.pdf"]
            .iter()
            .map(PathBuf::from)
            .collect();
        (reader, paths)
    }

    #[test]
    fn corpus_run_isolates_failures() {
        let (reader, paths) = sample_corpus();
        let matcher = CountingMatcher::new(&["mouse", "rat", "fly"]);

        let result = classify_corpus(&paths, &reader, &matcher, &config());

        assert_eq!(result.frequency_table.get("mouse"), 1);
        assert_eq!(result.frequency_table.get("rat"), 1);
        assert_eq!(result.frequency_table.get("fly"), 1);
        assert_eq!(result.stats.total_classified, 3);
        assert_eq!(result.stats.total_skipped, 3);
        assert_eq!(result.skips.no_citation, 1);
        assert_eq!(result.skips.failed, 1);
        assert_eq!(result.skips.supplementary, 1);
    }

    #[test]
    fn panicking_reader_fails_only_its_document() {
        let reader = FakeReader::new()
            .with_paper("a.pdf", methods_outline(), pages_with(5, 1, "DeepLabCut mouse"))
            .with_panicking("bad.pdf")
            .with_paper("c.pdf", methods_outline(), pages_with(5, 1, "DeepLabCut rat"));
        let paths: Vec<PathBuf> = ["a.pdf", "bad.pdf", "c.pdf"].iter().map(PathBuf::from).collect();
        let matcher = CountingMatcher::new(&["mouse", "rat"]);

        let result = classify_corpus(&paths, &reader, &matcher, &config());

        assert_eq!(result.stats.total_classified, 2);
        assert_eq!(result.stats.total_skipped, 1);
        assert_eq!(result.skips.failed, 1);
        assert_eq!(result.frequency_table.get("mouse"), 1);
        assert_eq!(result.frequency_table.get("rat"), 1);
    }

    #[test]
    fn panic_cause_is_kept() {
        let reader = FakeReader::new().with_panicking("bad.pdf");
        let matcher = CountingMatcher::new(&["mouse"]);
        let cfg = config();
        let analyzer = PaperAnalyzer::new(&reader, &matcher, &cfg);

        match analyzer.analyze(Path::new("bad.pdf")) {
            DocumentOutcome::Failed(cause) => {
                assert!(cause.starts_with("reader panicked: "));
                assert!(cause.contains("unreachable state"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn corpus_run_is_idempotent() {
        let (reader, paths) = sample_corpus();
        let matcher = CountingMatcher::new(&["mouse", "rat", "fly"]);
        let cfg = config();

        let first = classify_corpus(&paths, &reader, &matcher, &cfg);
        let second = classify_corpus(&paths, &reader, &matcher, &cfg);
        assert_eq!(first, second);
    }

    #[test]
    fn paper_key_is_file_name() {
        assert_eq!(paper_key(Path::new("/corpus/x/Smith2020.pdf")), "Smith2020.pdf");
    }
}
