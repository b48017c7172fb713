//! Term matching used by both aspect keywords and lexicon entries.

use crate::errors::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a keyword or lexicon entry is located inside a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// The term matches anywhere in the sentence, including inside a
    /// larger word ("hardware" contains "hard").
    #[default]
    Substring,
    /// The term only matches as a whole word or phrase.
    WordBoundary,
}

/// A single lowercase term prepared for repeated lookups.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    pattern: Option<Regex>,
}

impl TermMatcher {
    pub fn new(term: &str, mode: MatchMode) -> Result<Self> {
        match mode {
            MatchMode::Substring => Ok(Self::substring(term)),
            MatchMode::WordBoundary => Self::word_boundary(term),
        }
    }

    pub fn substring(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
            pattern: None,
        }
    }

    pub fn word_boundary(term: &str) -> Result<Self> {
        let term = term.to_lowercase();
        let pattern = Regex::new(&boundary_pattern(&term))?;
        Ok(Self {
            term,
            pattern: Some(pattern),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Presence test against an already lowercased sentence.
    pub fn is_match(&self, sentence: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(sentence),
            None => sentence.contains(self.term.as_str()),
        }
    }
}

// `\b` only means something next to a word character, so terms that start or
// end with punctuation are anchored on their word-character side only.
fn boundary_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let leading = term.chars().next().is_some_and(is_word);
    let trailing = term.chars().next_back().is_some_and(is_word);

    format!(
        "{}{}{}",
        if leading { r"\b" } else { "" },
        regex::escape(term),
        if trailing { r"\b" } else { "" }
    )
}

/// Compile a list of terms with the same mode.
pub fn compile_terms<'a, I>(terms: I, mode: MatchMode) -> Result<Vec<TermMatcher>>
where
    I: IntoIterator<Item = &'a str>,
{
    terms
        .into_iter()
        .map(|term| TermMatcher::new(term, mode))
        .collect()
}
