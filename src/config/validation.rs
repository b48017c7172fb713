//! Validation with error accumulation for configuration.
//!
//! Every problem in a configuration is collected before reporting, so a user
//! fixing a file sees all issues in one run. Issues carry the dotted field
//! path they refer to (`aspects[2].keywords`).
//!
//! ```rust
//! use aspectlens::config::{validate_config, AspectlensConfig};
//!
//! let validation = validate_config(&AspectlensConfig::default());
//! assert!(validation.is_success());
//! ```

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;
use stillwater::{NonEmptyVec, Validation};

use super::core::{AspectConfig, LexiconConfig};
use super::AspectlensConfig;
use crate::errors::{Error, Result};

/// A single problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result carrying every issue found.
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigIssue>>;

/// Validate an entire config, accumulating ALL issues.
pub fn validate_config(config: &AspectlensConfig) -> ConfigValidation {
    let mut issues = Vec::new();

    if let Some(lexicon) = &config.lexicon {
        issues.extend(lexicon_issues(lexicon));
    }
    if let Some(aspects) = &config.aspects {
        issues.extend(aspect_issues(aspects));
    }

    into_validation(issues)
}

/// Validate config with the fail-fast Result API.
pub fn validate_config_result(config: &AspectlensConfig) -> Result<()> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(issues) => Err(Error::InvalidConfig(issues.into_vec())),
    }
}

fn into_validation(issues: Vec<ConfigIssue>) -> ConfigValidation {
    let mut issues = issues.into_iter();
    match issues.next() {
        None => Validation::Success(()),
        Some(first) => Validation::Failure(NonEmptyVec::new(first, issues.collect())),
    }
}

fn lexicon_issues(lexicon: &LexiconConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    let positive = normalized_terms("lexicon.positive", lexicon.positive.as_deref(), &mut issues);
    let negative = normalized_terms("lexicon.negative", lexicon.negative.as_deref(), &mut issues);

    issues.extend(positive.intersection(&negative).map(|term| {
        ConfigIssue::new(
            "lexicon",
            format!("'{term}' is listed as both positive and negative"),
        )
    }));

    issues
}

fn normalized_terms(
    field: &str,
    terms: Option<&[String]>,
    issues: &mut Vec<ConfigIssue>,
) -> BTreeSet<String> {
    let mut normalized = BTreeSet::new();
    for (index, term) in terms.unwrap_or_default().iter().enumerate() {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            issues.push(ConfigIssue::new(
                format!("{field}[{index}]"),
                "entry must not be empty",
            ));
        } else {
            normalized.insert(term);
        }
    }
    normalized
}

fn aspect_issues(aspects: &[AspectConfig]) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, aspect) in aspects.iter().enumerate() {
        let field = format!("aspects[{index}]");
        let id = aspect.id.trim();

        if id.is_empty() {
            issues.push(ConfigIssue::new(format!("{field}.id"), "must not be empty"));
        } else if !seen.insert(id) {
            issues.push(ConfigIssue::new(
                format!("{field}.id"),
                format!("duplicate aspect id '{id}'"),
            ));
        }

        if aspect.label.trim().is_empty() {
            issues.push(ConfigIssue::new(format!("{field}.label"), "must not be empty"));
        }

        if aspect.keywords.iter().all(|k| k.trim().is_empty()) {
            issues.push(ConfigIssue::new(
                format!("{field}.keywords"),
                "at least one non-empty keyword is required",
            ));
        }
    }

    issues
}
