//! Lint for record naming conventions.

use dartjsonclass_schema::RecordSpec;

use super::super::Lint;
use crate::lint::Diagnostic;

/// Lint that warns about record names that aren't UpperCamelCase.
///
/// Examples: `Item`, `UserProfile`, `HttpConfig`
pub struct RecordNamingLint;

impl Lint for RecordNamingLint {
    fn name(&self) -> &'static str {
        "record-naming"
    }

    fn description(&self) -> &'static str {
        "Check record names follow UpperCamelCase conventions"
    }

    fn check(&self, records: &[&RecordSpec], diagnostics: &mut Vec<Diagnostic>) {
        for record in records {
            if !is_upper_camel_case(record.name()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "record '{}' should use UpperCamelCase (e.g., 'UserProfile' not 'user_profile')",
                            record.name()
                        ),
                    )
                    .at(record.name()),
                );
            }
        }
    }
}

fn is_upper_camel_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}
