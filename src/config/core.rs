use serde::{Deserialize, Serialize};

use crate::aspects::{AspectCatalog, AspectCategory};
use crate::errors::Result;
use crate::io::output::OutputFormat;
use crate::lexicon::SentimentLexicon;
use crate::matching::MatchMode;

/// Root configuration structure for aspectlens
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AspectlensConfig {
    /// Term matching configuration
    #[serde(default)]
    pub matching: Option<MatchingConfig>,

    /// Sentiment lexicon overrides
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,

    /// Aspect catalog, replacing the reference catalog when present
    #[serde(default)]
    pub aspects: Option<Vec<AspectConfig>>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct MatchingConfig {
    #[serde(default)]
    pub mode: MatchMode,
}

/// Either polarity may be given on its own; the other keeps the reference list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LexiconConfig {
    #[serde(default)]
    pub positive: Option<Vec<String>>,
    #[serde(default)]
    pub negative: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AspectConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

impl AspectlensConfig {
    pub fn match_mode(&self) -> MatchMode {
        self.matching.map(|m| m.mode).unwrap_or_default()
    }

    /// Configured catalog, or the reference catalog when none is given.
    pub fn catalog(&self) -> AspectCatalog {
        match &self.aspects {
            Some(aspects) => AspectCatalog::new(
                aspects
                    .iter()
                    .map(|a| AspectCategory::new(a.id.trim(), a.label.trim(), &a.keywords))
                    .collect(),
            ),
            None => AspectCatalog::reference(),
        }
    }

    /// Configured lexicon, filling a missing polarity from the reference lists.
    pub fn lexicon(&self) -> Result<SentimentLexicon> {
        let Some(lexicon) = &self.lexicon else {
            return Ok(SentimentLexicon::reference());
        };

        let positive: Vec<&str> = match &lexicon.positive {
            Some(words) => words.iter().map(String::as_str).collect(),
            None => SentimentLexicon::reference_positive().to_vec(),
        };
        let negative: Vec<&str> = match &lexicon.negative {
            Some(words) => words.iter().map(String::as_str).collect(),
            None => SentimentLexicon::reference_negative().to_vec(),
        };

        SentimentLexicon::try_new(positive, negative)
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }
}
