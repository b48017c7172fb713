//! Property-based tests for aspect analysis
//!
//! These tests verify invariants that should hold for all inputs:
//! - Analysis is deterministic
//! - Every aspect gets exactly one result, in catalog order
//! - Mentions, sentiment, confidence and evidence agree with each other
//! - The score is the sum of the evidence scores

use aspectlens::{analyze, Analyzer, AspectCatalog, MatchMode, Sentiment, SentimentLexicon};
use proptest::prelude::*;

/// Words drawn from the reference catalog and lexicon plus filler, so that
/// generated feedback actually mentions aspects and carries sentiment.
const VOCABULARY: &[&str] = &[
    "the", "was", "and", "but", "very", "dietitian", "plan", "staff", "nurse", "clinic",
    "room", "chart", "menu", "recommend", "model", "hardware", "supportive", "caring",
    "friendly", "clear", "crowded", "rude", "hard", "unsafe", "useless", "long wait",
    ".", "!", "?", "...",
];

fn feedback() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..40).prop_map(|words| words.join(" "))
}

fn check_invariants(results: &[aspectlens::AnalysisResult], catalog: &AspectCatalog) {
    assert_eq!(results.len(), catalog.len());
    for (result, aspect) in results.iter().zip(catalog.iter()) {
        assert_eq!(result.id, aspect.id);
        assert_eq!(result.label, aspect.label);

        let mentioned = result.mentions > 0;
        assert_eq!(mentioned, result.sentiment != Sentiment::NotMentioned);
        assert_eq!(mentioned, !result.evidence.is_empty());
        assert_eq!(result.mentions, result.evidence.len());
        assert_eq!(result.score, result.evidence.iter().map(|e| e.score).sum::<i64>());
        assert!((0.0..=1.0).contains(&result.confidence));

        if mentioned {
            let expected =
                (result.score.unsigned_abs() as f64 / (result.mentions as f64 * 2.0)).min(1.0);
            assert_eq!(result.confidence, expected);
        } else {
            assert_eq!(result.confidence, 0.0);
            assert_eq!(result.score, 0);
        }
    }
}

proptest! {
    /// Property: repeated analysis of the same text yields identical results
    #[test]
    fn prop_analysis_is_deterministic(text in feedback()) {
        let catalog = AspectCatalog::reference();
        let lexicon = SentimentLexicon::reference();
        prop_assert_eq!(
            analyze(&text, &catalog, &lexicon),
            analyze(&text, &catalog, &lexicon)
        );
    }

    /// Property: result invariants hold for arbitrary unicode input
    #[test]
    fn prop_invariants_hold_for_any_string(text in any::<String>()) {
        let catalog = AspectCatalog::reference();
        let results = analyze(&text, &catalog, &SentimentLexicon::reference());
        check_invariants(&results, &catalog);
    }

    /// Property: result invariants hold for vocabulary-heavy feedback
    #[test]
    fn prop_invariants_hold_for_feedback(text in feedback()) {
        let catalog = AspectCatalog::reference();
        let results = analyze(&text, &catalog, &SentimentLexicon::reference());
        check_invariants(&results, &catalog);
    }

    /// Property: the precompiled analyzer agrees with the free function
    #[test]
    fn prop_analyzer_matches_free_function(text in feedback()) {
        let analyzer = Analyzer::reference();
        prop_assert_eq!(
            analyzer.analyze(&text),
            analyze(&text, analyzer.catalog(), analyzer.lexicon())
        );
    }

    /// Property: word-boundary mode keeps the same invariants
    #[test]
    fn prop_word_boundary_invariants(text in feedback()) {
        let analyzer = Analyzer::with_mode(
            AspectCatalog::reference(),
            SentimentLexicon::reference(),
            MatchMode::WordBoundary,
        ).unwrap();
        check_invariants(&analyzer.analyze(&text), analyzer.catalog());
    }

    /// Property: batch analysis equals analyzing each entry on its own
    #[test]
    fn prop_batch_matches_sequential(texts in prop::collection::vec(feedback(), 0..8)) {
        let analyzer = Analyzer::reference();
        let sequential: Vec<_> = texts.iter().map(|t| analyzer.analyze(t)).collect();
        prop_assert_eq!(analyzer.analyze_batch(&texts), sequential);
    }
}
