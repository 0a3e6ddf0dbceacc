//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of records generated.
    pub records: usize,
    /// Records left out under `--keep-going`.
    pub skipped: usize,
    /// Files written to disk; empty when writing to stdout.
    pub written: Vec<PathBuf>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.written.is_empty() {
            return;
        }
        out.key_value("Records", &self.records.to_string());
        if self.skipped > 0 {
            out.key_value("Skipped", &self.skipped.to_string());
        }
        out.preformatted("Written:");
        for path in &self.written {
            out.added_item(&path.display().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written_files() {
        let report = GenerateReport {
            records: 2,
            skipped: 1,
            written: vec![PathBuf::from("lib/models.dart"), PathBuf::from("lib/jsonbase.dart")],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "Records: 2",
                "Skipped: 1",
                "Written:",
                "  + lib/models.dart",
                "  + lib/jsonbase.dart",
            ]
        );
    }

    #[test]
    fn test_stdout_renders_nothing() {
        let report = GenerateReport {
            records: 1,
            skipped: 0,
            written: vec![],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert!(out.lines.is_empty());
    }
}
