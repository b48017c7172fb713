use crate::analysis::BatchSummary;
use crate::core::AnalysisReport;
use crate::io::output::OutputWriter;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_summary(&mut self, summary: &BatchSummary) -> anyhow::Result<()> {
        self.write_json(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Analyzer;

    #[test]
    fn test_report_json_shape() {
        let report = Analyzer::reference().report("The dietitian was very supportive and caring.");
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let first = &json["results"][0];
        assert_eq!(first["id"], "dietitian");
        assert_eq!(first["sentiment"], "positive");
        assert_eq!(first["score"], 2);
        assert_eq!(first["confidence"], 1.0);
        assert_eq!(
            first["evidence"][0]["sentence"],
            "the dietitian was very supportive and caring"
        );
        assert_eq!(json["results"][5]["sentiment"], "not-mentioned");
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = Analyzer::reference().summarize(&["The clinic was dirty."]);
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_summary(&summary).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json["documents"], 1);
        assert_eq!(json["aspects"][3]["id"], "infrastructure");
        assert_eq!(json["aspects"][3]["negative"], 1);
    }
}
