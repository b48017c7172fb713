use super::{apply_formatting, build_analyzer, emit, resolve_config};
use crate::io::{self, create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub text: Option<String>,
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub word_boundary: bool,
    pub plain: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let analyzer = build_analyzer(&settings, config.word_boundary)?;
    let format = config.format.unwrap_or_else(|| settings.default_format());
    let text = read_feedback(config.text, config.input.as_deref())?;

    let report = analyzer.report(&text);
    log::info!(
        "Analyzed {} sentence(s); {} of {} aspect(s) mentioned",
        report.sentences,
        report.mentioned().count(),
        report.results.len()
    );

    apply_formatting(config.plain, config.output.as_deref());
    let mut rendered = Vec::new();
    {
        let mut writer = create_writer(format, Box::new(&mut rendered));
        writer.write_report(&report)?;
    }
    emit(&rendered, config.output.as_deref())
}

fn read_feedback(text: Option<String>, input: Option<&std::path::Path>) -> Result<String> {
    match (text, input) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => io::read_text(path)
            .with_context(|| format!("Reading feedback from {}", path.display())),
        (None, None) => io::read_stdin().context("Reading feedback from stdin"),
    }
}
