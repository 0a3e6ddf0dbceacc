//! Lint for references to records outside the current run.

use std::collections::HashSet;

use dartjsonclass_schema::RecordSpec;

use super::super::Lint;
use crate::lint::Diagnostic;

/// Lint that warns when a field names a record type that is not being
/// generated.
///
/// The reference compiles only if the type is provided elsewhere, for
/// example by a record excluded from this run.
pub struct UnknownReferenceLint;

impl Lint for UnknownReferenceLint {
    fn name(&self) -> &'static str {
        "unknown-reference"
    }

    fn description(&self) -> &'static str {
        "Detect fields referring to record types that are not generated"
    }

    fn check(&self, records: &[&RecordSpec], diagnostics: &mut Vec<Diagnostic>) {
        let known: HashSet<&str> = records.iter().map(|r| r.name()).collect();

        for record in records {
            for field in record.fields() {
                for name in field.ty.referenced_records() {
                    if !known.contains(name) {
                        diagnostics.push(
                            Diagnostic::warning(
                                self.name(),
                                format!(
                                    "{} ref'd by {} is not among the generated records",
                                    name,
                                    record.name()
                                ),
                            )
                            .at(format!("{}.{}", record.name(), field.name)),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_references() {
        let item = RecordSpec::from_declarations("Item", &["int a"]).unwrap();
        let wrapper = RecordSpec::from_declarations("Wrapper", &["List<Item>? items"]).unwrap();

        let mut diagnostics = Vec::new();
        UnknownReferenceLint.check(&[&item, &wrapper], &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_reference() {
        let msg =
            RecordSpec::from_declarations("Msg", &["Map<String, Other> others", "Other? one"])
                .unwrap();

        let mut diagnostics = Vec::new();
        UnknownReferenceLint.check(&[&msg], &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("Msg.others"));
        assert!(diagnostics[0].message.contains("Other"));
    }
}
