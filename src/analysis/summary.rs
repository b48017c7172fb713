use crate::aspects::AspectCatalog;
use crate::core::{confidence, AnalysisResult, Sentiment};
use serde::{Deserialize, Serialize};

/// Totals for one aspect across a batch of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSummary {
    pub id: String,
    pub label: String,
    /// Documents that mentioned the aspect at least once
    pub documents: usize,
    pub mentions: usize,
    pub score: i64,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub not_mentioned: usize,
    /// Mean confidence over the documents that mentioned the aspect
    pub mean_confidence: f64,
    /// Sentiment of the pooled score, derived like a single result
    pub sentiment: Sentiment,
    /// Confidence of the pooled score and mention count
    pub confidence: f64,
}

impl AspectSummary {
    fn empty(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            documents: 0,
            mentions: 0,
            score: 0,
            positive: 0,
            negative: 0,
            neutral: 0,
            not_mentioned: 0,
            mean_confidence: 0.0,
            sentiment: Sentiment::NotMentioned,
            confidence: 0.0,
        }
    }

    fn record(&mut self, result: &AnalysisResult) {
        match result.sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::NotMentioned => {
                self.not_mentioned += 1;
                return;
            }
        }
        self.documents += 1;
        self.mentions += result.mentions;
        self.score += result.score;
        self.mean_confidence += result.confidence;
    }

    fn finish(mut self) -> Self {
        if self.documents > 0 {
            self.mean_confidence /= self.documents as f64;
        }
        self.sentiment = Sentiment::from_score(self.score, self.mentions);
        self.confidence = confidence(self.score, self.mentions);
        self
    }
}

/// Per-aspect totals for a batch, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub documents: usize,
    pub aspects: Vec<AspectSummary>,
}

impl BatchSummary {
    /// Fold per-document results into per-aspect totals.
    ///
    /// Each row of `results` is expected in catalog order, as produced by
    /// the analyzer for the same catalog.
    pub fn from_results(catalog: &AspectCatalog, results: &[Vec<AnalysisResult>]) -> Self {
        let mut aspects: Vec<AspectSummary> = catalog
            .iter()
            .map(|aspect| AspectSummary::empty(&aspect.id, &aspect.label))
            .collect();

        for row in results {
            for (summary, result) in aspects.iter_mut().zip(row) {
                summary.record(result);
            }
        }

        Self {
            documents: results.len(),
            aspects: aspects.into_iter().map(AspectSummary::finish).collect(),
        }
    }

    pub fn aspect(&self, id: &str) -> Option<&AspectSummary> {
        self.aspects.iter().find(|a| a.id == id)
    }
}
