//! Sentence-level sentiment scoring.

use crate::errors::Result;
use crate::lexicon::SentimentLexicon;
use crate::matching::{compile_terms, MatchMode, TermMatcher};
use std::borrow::Cow;

/// Signed score of a sentence under substring matching.
///
/// Each positive entry present adds one, each negative entry present
/// subtracts one. An entry counts once no matter how often it occurs, and it
/// may sit inside a larger word. Matching ignores case.
pub fn score_sentence(sentence: &str, lexicon: &SentimentLexicon) -> i64 {
    let sentence = lowercased(sentence);
    let positive = lexicon
        .positive()
        .filter(|term| sentence.contains(*term))
        .count() as i64;
    let negative = lexicon
        .negative()
        .filter(|term| sentence.contains(*term))
        .count() as i64;
    positive - negative
}

/// A lexicon compiled for one match mode.
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    positive: Vec<TermMatcher>,
    negative: Vec<TermMatcher>,
}

impl SentenceScorer {
    pub fn new(lexicon: &SentimentLexicon, mode: MatchMode) -> Result<Self> {
        Ok(Self {
            positive: compile_terms(lexicon.positive(), mode)?,
            negative: compile_terms(lexicon.negative(), mode)?,
        })
    }

    pub fn from_matchers(positive: Vec<TermMatcher>, negative: Vec<TermMatcher>) -> Self {
        Self { positive, negative }
    }

    pub fn score(&self, sentence: &str) -> i64 {
        let sentence = lowercased(sentence);
        count_hits(&self.positive, &sentence) - count_hits(&self.negative, &sentence)
    }
}

/// Tokenized sentences are already lowercase and pass through unchanged.
fn lowercased(sentence: &str) -> Cow<'_, str> {
    if sentence.chars().any(char::is_uppercase) {
        Cow::Owned(sentence.to_lowercase())
    } else {
        Cow::Borrowed(sentence)
    }
}

fn count_hits(terms: &[TermMatcher], sentence: &str) -> i64 {
    terms.iter().filter(|term| term.is_match(sentence)).count() as i64
}
