use crate::analysis::BatchSummary;
use crate::core::{AnalysisReport, AnalysisResult};
use crate::io::output::OutputWriter;
use chrono::Utc;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let writers: Vec<fn(&mut Self, &AnalysisReport) -> anyhow::Result<()>> = vec![
            |w, _| w.write_header("Feedback Aspect Report"),
            |w, r| w.write_overview(r),
            |w, r| w.write_results_table(r),
            |w, r| w.write_evidence(r),
        ];

        writers.iter().try_for_each(|writer| writer(self, report))
    }

    fn write_summary(&mut self, summary: &BatchSummary) -> anyhow::Result<()> {
        self.write_header("Feedback Batch Summary")?;
        writeln!(self.writer, "Documents analyzed: {}", summary.documents)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Aspect | Sentiment | Score | Documents | Positive | Negative | Neutral | Mean Confidence |"
        )?;
        writeln!(
            self.writer,
            "|--------|-----------|-------|-----------|----------|----------|---------|-----------------|"
        )?;
        for aspect in &summary.aspects {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {:.2} |",
                aspect.label,
                aspect.sentiment,
                aspect.score,
                aspect.documents,
                aspect.positive,
                aspect.negative,
                aspect.neutral,
                aspect.mean_confidence
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_overview(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Overview")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Sentences: {}", report.sentences)?;
        writeln!(
            self.writer,
            "- Aspects mentioned: {} of {}",
            report.mentioned().count(),
            report.results.len()
        )?;
        if let Some(dominant) = report.dominant() {
            writeln!(
                self.writer,
                "- Strongest signal: {} ({}, confidence {:.2})",
                dominant.label, dominant.sentiment, dominant.confidence
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_results_table(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Aspects")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Aspect | Sentiment | Score | Mentions | Confidence |"
        )?;
        writeln!(
            self.writer,
            "|--------|-----------|-------|----------|------------|"
        )?;
        for result in &report.results {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {:.2} |",
                result.label, result.sentiment, result.score, result.mentions, result.confidence
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_evidence(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let mentioned: Vec<&AnalysisResult> = report.mentioned().collect();
        if mentioned.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Evidence")?;
        writeln!(self.writer)?;
        for result in mentioned {
            writeln!(self.writer, "### {}", result.label)?;
            for evidence in &result.evidence {
                writeln!(self.writer, "- ({:+}) {}", evidence.score, evidence.sentence)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Analyzer;
    use indoc::indoc;

    #[test]
    fn test_markdown_report_sections() {
        let report =
            Analyzer::reference().report("The clinic was crowded but the staff was friendly.");
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_report(&report).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# Feedback Aspect Report"));
        assert!(output.contains("| Care Staff | neutral | 0 | 1 | 0.00 |"));
        assert!(output.contains("| Diet Charts | not-mentioned | 0 | 0 | 0.00 |"));
        assert!(output.contains(indoc! {"
            ### Infrastructure
            - (+0) the clinic was crowded but the staff was friendly
        "}));
    }

    #[test]
    fn test_markdown_skips_evidence_when_nothing_mentioned() {
        let report = Analyzer::reference().report("");
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_report(&report).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(!output.contains("## Evidence"));
        assert!(!output.contains("Strongest signal"));
    }
}
