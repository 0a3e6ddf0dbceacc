//! Record validation through configurable lints.

mod diagnostic;
pub mod lints;

use dartjsonclass_schema::RecordSpec;
pub use diagnostic::{Diagnostic, Severity};
pub use lints::{FieldNamingLint, RecordNamingLint, UnknownReferenceLint};

/// A lint that checks the records of one generation run.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the records and add any diagnostics.
    fn check(&self, records: &[&RecordSpec], diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Runs a set of lints over the records of a generation run.
pub struct Validator {
    lints: Vec<Box<dyn Lint>>,
}

impl Validator {
    /// Create a validator with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnknownReferenceLint),
                Box::new(RecordNamingLint),
                Box::new(FieldNamingLint),
            ],
        }
    }

    /// Create a validator with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint and return the collected diagnostics.
    pub fn run<'a>(&self, records: impl IntoIterator<Item = &'a RecordSpec>) -> Vec<Diagnostic> {
        let records: Vec<&RecordSpec> = records.into_iter().collect();
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(&records, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
