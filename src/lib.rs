// Export modules for library usage
pub mod analysis;
pub mod aspects;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod lexicon;
pub mod matching;
pub mod observability;
pub mod scoring;
pub mod tokenizer;

// Re-export commonly used types
pub use crate::core::{confidence, AnalysisReport, AnalysisResult, Evidence, Sentiment};

pub use crate::analysis::{analyze, Analyzer, AspectSummary, BatchSummary};

pub use crate::aspects::{AspectCatalog, AspectCategory};

pub use crate::lexicon::SentimentLexicon;

pub use crate::matching::{MatchMode, TermMatcher};

pub use crate::scoring::{score_sentence, SentenceScorer};

pub use crate::tokenizer::tokenize;

pub use crate::config::{load_config, AspectlensConfig};

pub use crate::errors::{Error, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
