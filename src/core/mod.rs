//! Result types produced by aspect analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Net opinion expressed about a single aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    NotMentioned,
}

impl Sentiment {
    /// Derive the sentiment of an accumulated score.
    ///
    /// With no mentions the aspect is `NotMentioned` regardless of score;
    /// otherwise the sign of the score decides, zero being `Neutral`.
    pub fn from_score(score: i64, mentions: usize) -> Self {
        match (mentions, score.signum()) {
            (0, _) => Self::NotMentioned,
            (_, 1) => Self::Positive,
            (_, -1) => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::NotMentioned => "not-mentioned",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence that mentioned an aspect, with its signed contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub sentence: String,
    pub score: i64,
}

impl Evidence {
    pub fn new(sentence: impl Into<String>, score: i64) -> Self {
        Self {
            sentence: sentence.into(),
            score,
        }
    }
}

/// Per-aspect outcome of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub label: String,
    pub sentiment: Sentiment,
    pub score: i64,
    pub mentions: usize,
    pub confidence: f64,
    pub evidence: Vec<Evidence>,
}

impl AnalysisResult {
    /// Build a result from the evidence collected for an aspect.
    ///
    /// Score, mention count, sentiment and confidence are all derived from
    /// `evidence`, so the result invariants hold by construction.
    pub fn from_evidence(
        id: impl Into<String>,
        label: impl Into<String>,
        evidence: Vec<Evidence>,
    ) -> Self {
        let score: i64 = evidence.iter().map(|e| e.score).sum();
        let mentions = evidence.len();

        Self {
            id: id.into(),
            label: label.into(),
            sentiment: Sentiment::from_score(score, mentions),
            score,
            mentions,
            confidence: confidence(score, mentions),
            evidence,
        }
    }

    pub fn not_mentioned(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::from_evidence(id, label, Vec::new())
    }

    pub fn is_mentioned(&self) -> bool {
        self.mentions > 0
    }
}

/// Strength of the net sentiment relative to the number of mentions.
///
/// `min(1, |score| / (mentions * 2))`, and `0` when nothing was mentioned.
pub fn confidence(score: i64, mentions: usize) -> f64 {
    if mentions == 0 {
        return 0.0;
    }
    let ratio = score.unsigned_abs() as f64 / (mentions as f64 * 2.0);
    ratio.min(1.0)
}

/// Results of one analysis call together with the sentence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sentences: usize,
    pub results: Vec<AnalysisResult>,
}

impl AnalysisReport {
    pub fn new(sentences: usize, results: Vec<AnalysisResult>) -> Self {
        Self { sentences, results }
    }

    /// Results for aspects that were mentioned at least once, in catalog order.
    pub fn mentioned(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.results.iter().filter(|r| r.is_mentioned())
    }

    pub fn result(&self, id: &str) -> Option<&AnalysisResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// The mentioned aspect with the highest confidence.
    ///
    /// Ties go to the aspect that comes first in the catalog.
    pub fn dominant(&self) -> Option<&AnalysisResult> {
        self.mentioned().fold(None, |best, candidate| match best {
            Some(current) if current.confidence >= candidate.confidence => Some(current),
            _ => Some(candidate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_from_score() {
        assert_eq!(Sentiment::from_score(0, 0), Sentiment::NotMentioned);
        assert_eq!(Sentiment::from_score(3, 0), Sentiment::NotMentioned);
        assert_eq!(Sentiment::from_score(2, 1), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(-1, 4), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(0, 2), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_serializes_kebab_case() {
        let json = serde_json::to_string(&Sentiment::NotMentioned).unwrap();
        assert_eq!(json, "\"not-mentioned\"");
        assert_eq!(Sentiment::NotMentioned.to_string(), "not-mentioned");
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(confidence(0, 0), 0.0);
        assert_eq!(confidence(2, 1), 1.0);
        assert_eq!(confidence(5, 1), 1.0);
        assert_eq!(confidence(-1, 1), 0.5);
        assert_eq!(confidence(1, 4), 0.125);
    }

    #[test]
    fn test_from_evidence_derives_totals() {
        let result = AnalysisResult::from_evidence(
            "staff",
            "Care Staff",
            vec![Evidence::new("nurses were kind", 1), Evidence::new("staff was rude", -1)],
        );

        assert_eq!(result.score, 0);
        assert_eq!(result.mentions, 2);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_not_mentioned_is_empty() {
        let result = AnalysisResult::not_mentioned("charts", "Diet Charts");
        assert!(!result.is_mentioned());
        assert_eq!(result.sentiment, Sentiment::NotMentioned);
        assert!(result.evidence.is_empty());
    }

    #[test]
    fn test_dominant_prefers_first_on_tie() {
        let report = AnalysisReport::new(
            2,
            vec![
                AnalysisResult::not_mentioned("a", "A"),
                AnalysisResult::from_evidence("b", "B", vec![Evidence::new("x", 2)]),
                AnalysisResult::from_evidence("c", "C", vec![Evidence::new("y", -2)]),
            ],
        );

        assert_eq!(report.dominant().map(|r| r.id.as_str()), Some("b"));
        assert_eq!(report.mentioned().count(), 2);
        assert!(report.result("a").is_some());
        assert!(report.result("missing").is_none());
    }

    #[test]
    fn test_dominant_none_when_nothing_mentioned() {
        let report = AnalysisReport::new(0, vec![AnalysisResult::not_mentioned("a", "A")]);
        assert!(report.dominant().is_none());
    }
}
