//! CLI command implementations.
//!
//! Available commands:
//! - **analyze**: Score one piece of feedback against every aspect
//! - **batch**: Score many entries in parallel and summarize per aspect
//! - **aspects**: List the configured aspect catalog
//! - **init**: Write a starter `.aspectlens.toml`
//! - **validate**: Report every problem in a configuration file

pub mod analyze;
pub mod aspects;
pub mod batch;
pub mod init;
pub mod validate;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use aspects::list_aspects;
pub use batch::{handle_batch, BatchConfig};
pub use init::init_config;
pub use validate::validate_config_file;

use crate::config::{self, AspectlensConfig};
use crate::formatting::FormattingConfig;
use crate::matching::MatchMode;
use crate::Analyzer;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Explicit config paths must load cleanly; otherwise fall back to discovery.
pub(crate) fn resolve_config(path: Option<&Path>) -> Result<AspectlensConfig> {
    match path {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Loading configuration from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

pub(crate) fn build_analyzer(config: &AspectlensConfig, word_boundary: bool) -> Result<Analyzer> {
    let mut config = config.clone();
    if word_boundary {
        config.matching = Some(config::MatchingConfig {
            mode: MatchMode::WordBoundary,
        });
    }
    Ok(Analyzer::from_config(&config)?)
}

/// Colors only make sense on a terminal; files and `--plain` get none.
pub(crate) fn apply_formatting(plain: bool, output: Option<&Path>) {
    let formatting = if plain || output.is_some() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    formatting.apply();
}

pub(crate) fn emit(rendered: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Writing report to {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
