//! Check command report data structures.

use std::path::PathBuf;

use dartjsonclass_codegen::lint::Diagnostic;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Schema files that were checked.
    pub paths: Vec<PathBuf>,
    /// Number of records loaded.
    pub records: usize,
    /// Diagnostics from lints and generation, errors and warnings mixed.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.diagnostic(&format!("{}[{}]: {}", diag.severity, diag.lint, diag.message));
            if let Some(loc) = &diag.location {
                out.diagnostic(&format!("  --> {}", loc));
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            let paths: Vec<String> = self.paths.iter().map(|p| p.display().to_string()).collect();
            out.preformatted(&format!(
                "✓ {} valid ({} record{})",
                paths.join(", "),
                self.records,
                if self.records == 1 { "" } else { "s" }
            ));
        }
    }
}
