//! Aspect matching and per-aspect aggregation.
//!
//! The pipeline is pure: text is tokenized once, then every aspect walks the
//! sentences independently, collecting evidence from the sentences that
//! mention it. A sentence can count toward any number of aspects.
//!
//! Two entry points exist:
//!
//! - [`analyze`] takes the catalog and lexicon by reference and always uses
//!   substring matching.
//! - [`Analyzer`] owns its configuration, precompiles every term for the
//!   chosen [`MatchMode`], and adds batch analysis.
//!
//! ```
//! use aspectlens::{analyze, AspectCatalog, Sentiment, SentimentLexicon};
//!
//! let results = analyze(
//!     "The dietitian was very supportive and caring.",
//!     &AspectCatalog::reference(),
//!     &SentimentLexicon::reference(),
//! );
//!
//! assert_eq!(results[0].id, "dietitian");
//! assert_eq!(results[0].sentiment, Sentiment::Positive);
//! assert_eq!(results[0].confidence, 1.0);
//! ```

pub mod summary;

pub use summary::{AspectSummary, BatchSummary};

use crate::aspects::{AspectCatalog, AspectCategory};
use crate::config::AspectlensConfig;
use crate::core::{AnalysisReport, AnalysisResult, Evidence};
use crate::errors::Result;
use crate::lexicon::SentimentLexicon;
use crate::matching::{compile_terms, MatchMode, TermMatcher};
use crate::scoring::{score_sentence, SentenceScorer};
use crate::tokenizer::tokenize;
use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

/// Score `text` against every aspect of `aspects`, in catalog order.
///
/// Never fails: empty or unpunctuated text is a regular input and yields
/// well-formed results.
pub fn analyze(
    text: &str,
    aspects: &AspectCatalog,
    lexicon: &SentimentLexicon,
) -> Vec<AnalysisResult> {
    let sentences = tokenize(text);
    aspects
        .iter()
        .map(|aspect| {
            collect_aspect(
                aspect,
                &sentences,
                |sentence| aspect.is_mentioned_in(sentence),
                |sentence| score_sentence(sentence, lexicon),
            )
        })
        .collect()
}

fn collect_aspect(
    aspect: &AspectCategory,
    sentences: &[String],
    mentions: impl Fn(&str) -> bool,
    score: impl Fn(&str) -> i64,
) -> AnalysisResult {
    let evidence: Vec<Evidence> = sentences
        .iter()
        .filter(|sentence| mentions(sentence))
        .map(|sentence| Evidence::new(sentence.as_str(), score(sentence)))
        .collect();

    trace!(aspect = %aspect.id, mentions = evidence.len(), "aspect collected");
    AnalysisResult::from_evidence(aspect.id.as_str(), aspect.label.as_str(), evidence)
}

/// Analyzer with an owned catalog and lexicon compiled for one match mode.
///
/// Immutable after construction, so a single instance can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    catalog: AspectCatalog,
    lexicon: SentimentLexicon,
    mode: MatchMode,
    keywords: Vec<Vec<TermMatcher>>,
    scorer: SentenceScorer,
}

impl Analyzer {
    /// Substring-matching analyzer.
    pub fn new(catalog: AspectCatalog, lexicon: SentimentLexicon) -> Self {
        let keywords = catalog
            .iter()
            .map(|aspect| {
                aspect
                    .keywords
                    .iter()
                    .map(|k| TermMatcher::substring(k))
                    .collect()
            })
            .collect();
        let positive = lexicon.positive().map(TermMatcher::substring).collect();
        let negative = lexicon.negative().map(TermMatcher::substring).collect();

        Self {
            catalog,
            lexicon,
            mode: MatchMode::Substring,
            keywords,
            scorer: SentenceScorer::from_matchers(positive, negative),
        }
    }

    pub fn with_mode(
        catalog: AspectCatalog,
        lexicon: SentimentLexicon,
        mode: MatchMode,
    ) -> Result<Self> {
        if mode == MatchMode::Substring {
            return Ok(Self::new(catalog, lexicon));
        }

        let keywords = catalog
            .iter()
            .map(|aspect| compile_terms(aspect.keywords.iter().map(String::as_str), mode))
            .collect::<Result<Vec<_>>>()?;
        let scorer = SentenceScorer::new(&lexicon, mode)?;

        Ok(Self {
            catalog,
            lexicon,
            mode,
            keywords,
            scorer,
        })
    }

    /// Reference catalog and lexicon with substring matching.
    pub fn reference() -> Self {
        Self::new(AspectCatalog::reference(), SentimentLexicon::reference())
    }

    pub fn from_config(config: &AspectlensConfig) -> Result<Self> {
        let analyzer = Self::with_mode(config.catalog(), config.lexicon()?, config.match_mode())?;
        debug!(
            aspects = analyzer.catalog.len(),
            terms = analyzer.lexicon.len(),
            mode = ?analyzer.mode,
            "analyzer built from configuration"
        );
        Ok(analyzer)
    }

    pub fn catalog(&self) -> &AspectCatalog {
        &self.catalog
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// One result per catalog aspect, in catalog order.
    pub fn analyze(&self, text: &str) -> Vec<AnalysisResult> {
        self.report(text).results
    }

    /// Absent text is analyzed as the empty string.
    pub fn analyze_opt(&self, text: Option<&str>) -> Vec<AnalysisResult> {
        self.analyze(text.unwrap_or_default())
    }

    pub fn report(&self, text: &str) -> AnalysisReport {
        let _span = debug_span!("analyze", aspects = self.catalog.len()).entered();
        let sentences = tokenize(text);
        debug!(sentences = sentences.len(), "text tokenized");

        let results = self
            .catalog
            .iter()
            .zip(&self.keywords)
            .map(|(aspect, keywords)| {
                collect_aspect(
                    aspect,
                    &sentences,
                    |sentence| keywords.iter().any(|k| k.is_match(sentence)),
                    |sentence| self.scorer.score(sentence),
                )
            })
            .collect();

        AnalysisReport::new(sentences.len(), results)
    }

    /// Analyze many independent texts in parallel, preserving input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Vec<AnalysisResult>>
    where
        S: AsRef<str> + Sync,
    {
        let _span = debug_span!("analyze_batch", documents = texts.len()).entered();
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    /// Analyze a batch and fold it into per-aspect totals.
    pub fn summarize<S>(&self, texts: &[S]) -> BatchSummary
    where
        S: AsRef<str> + Sync,
    {
        BatchSummary::from_results(&self.catalog, &self.analyze_batch(texts))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::reference()
    }
}
