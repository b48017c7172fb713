use super::{apply_formatting, build_analyzer, emit, resolve_config};
use crate::io::{self, create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct BatchConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub word_boundary: bool,
    pub plain: bool,
}

pub fn handle_batch(config: BatchConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let analyzer = build_analyzer(&settings, config.word_boundary)?;
    let format = config.format.unwrap_or_else(|| settings.default_format());

    let contents = io::read_text(&config.path)
        .with_context(|| format!("Reading batch from {}", config.path.display()))?;
    let entries = io::batch_entries(&contents);
    if entries.is_empty() {
        log::warn!("{} contains no feedback entries", config.path.display());
    }

    let summary = analyzer.summarize(&entries);
    log::info!("Summarized {} feedback entries", summary.documents);

    apply_formatting(config.plain, config.output.as_deref());
    let mut rendered = Vec::new();
    {
        let mut writer = create_writer(format, Box::new(&mut rendered));
        writer.write_summary(&summary)?;
    }
    emit(&rendered, config.output.as_deref())
}
