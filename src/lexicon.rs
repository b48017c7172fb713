//! Positive and negative trigger words.

use crate::config::ConfigIssue;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const REFERENCE_POSITIVE: &[&str] = &[
    "supportive",
    "caring",
    "friendly",
    "helpful",
    "excellent",
    "good",
    "great",
    "clean",
    "clear",
    "easy",
    "knowledgeable",
    "professional",
    "kind",
    "attentive",
    "effective",
    "accurate",
    "useful",
    "comfortable",
    "spacious",
    "organized",
    "punctual",
    "responsive",
    "satisfied",
    "informative",
    "relevant",
];

const REFERENCE_NEGATIVE: &[&str] = &[
    "crowded",
    "rude",
    "dirty",
    "hard",
    "poor",
    "bad",
    "slow",
    "confusing",
    "vague",
    "messy",
    "delayed",
    "difficult",
    "expensive",
    "noisy",
    "unhygienic",
    "outdated",
    "neglected",
    "ignored",
    "dismissive",
    "careless",
    "broken",
    "long wait",
    "complicated",
    "useless",
    "disappointing",
    "unsafe",
];

/// Two disjoint sets of lowercase terms, each worth one point.
///
/// Iteration order is sorted, which keeps scoring independent of how the
/// lexicon was assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl SentimentLexicon {
    /// Build a lexicon, normalizing entries to trimmed lowercase.
    ///
    /// Empty entries are dropped. A term listed under both polarities is
    /// rejected.
    pub fn try_new<P, N>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let positive = normalize(positive);
        let negative = normalize(negative);

        let overlap: Vec<ConfigIssue> = positive
            .intersection(&negative)
            .map(|term| {
                ConfigIssue::new(
                    "lexicon",
                    format!("'{term}' is listed as both positive and negative"),
                )
            })
            .collect();
        if !overlap.is_empty() {
            return Err(Error::InvalidConfig(overlap));
        }

        Ok(Self { positive, negative })
    }

    /// The general-purpose feedback lexicon shipped with the crate.
    pub fn reference() -> Self {
        Self {
            positive: normalize(REFERENCE_POSITIVE),
            negative: normalize(REFERENCE_NEGATIVE),
        }
    }

    pub fn reference_positive() -> &'static [&'static str] {
        REFERENCE_POSITIVE
    }

    pub fn reference_negative() -> &'static [&'static str] {
        REFERENCE_NEGATIVE
    }

    pub fn positive(&self) -> impl Iterator<Item = &str> {
        self.positive.iter().map(String::as_str)
    }

    pub fn negative(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::reference()
    }
}

fn normalize<I>(terms: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    terms
        .into_iter()
        .map(|term| term.as_ref().trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}
