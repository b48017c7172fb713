use crate::analysis::{AspectSummary, BatchSummary};
use crate::core::{AnalysisReport, AnalysisResult, Sentiment};
use crate::io::output::OutputWriter;
use colored::*;
use std::io::Write;

const BAR_WIDTH: usize = 10;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.print_header("Feedback Aspect Report")?;
        self.print_overview(report)?;
        for result in &report.results {
            self.print_result(result)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &BatchSummary) -> anyhow::Result<()> {
        self.print_header("Feedback Batch Summary")?;
        writeln!(self.writer, "  Documents analyzed: {}", summary.documents)?;
        writeln!(self.writer)?;
        for aspect in &summary.aspects {
            self.print_aspect_summary(aspect)?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_overview(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "  Sentences: {}", report.sentences)?;
        writeln!(
            self.writer,
            "  Aspects mentioned: {} of {}",
            report.mentioned().count(),
            report.results.len()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  {:<24} {:<24} {} {:.2}  score {:+}, {} mention(s)",
            result.label.bold(),
            paint(result.sentiment),
            confidence_bar(result.confidence),
            result.confidence,
            result.score,
            result.mentions
        )?;
        for evidence in &result.evidence {
            writeln!(
                self.writer,
                "      {} {}",
                format!("({:+})", evidence.score).dimmed(),
                evidence.sentence
            )?;
        }
        Ok(())
    }

    fn print_aspect_summary(&mut self, aspect: &AspectSummary) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  {:<24} {:<24} {} {:.2}  +{} / -{} / ={} across {} document(s)",
            aspect.label.bold(),
            paint(aspect.sentiment),
            confidence_bar(aspect.mean_confidence),
            aspect.mean_confidence,
            aspect.positive,
            aspect.negative,
            aspect.neutral,
            aspect.documents
        )?;
        Ok(())
    }
}

fn paint(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.as_str().green(),
        Sentiment::Negative => sentiment.as_str().red(),
        Sentiment::Neutral => sentiment.as_str().yellow(),
        Sentiment::NotMentioned => sentiment.as_str().dimmed(),
    }
}

/// Fixed-width bar such as `[######----]` for a value in `[0, 1]`.
fn confidence_bar(confidence: f64) -> String {
    let filled = (confidence.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
