//! Lint for field names that cannot be used in the generated class.

use dartjsonclass_schema::RecordSpec;

use super::super::Lint;
use crate::lint::Diagnostic;

/// Dart reserved words, which cannot name a field.
const RESERVED_WORDS: &[&str] = &[
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
    "while", "with",
];

/// Members every generated class declares or inherits.
const GENERATED_MEMBERS: &[&str] = &[
    "fields",
    "getAttr",
    "setAttr",
    "toMap",
    "copy",
    "hashCode",
    "runtimeType",
    "toString",
    "noSuchMethod",
];

/// Lint that errors on field names which would not compile.
pub struct FieldNamingLint;

impl Lint for FieldNamingLint {
    fn name(&self) -> &'static str {
        "field-naming"
    }

    fn description(&self) -> &'static str {
        "Detect field names that are reserved or clash with generated members"
    }

    fn check(&self, records: &[&RecordSpec], diagnostics: &mut Vec<Diagnostic>) {
        for record in records {
            for field in record.fields() {
                let location = format!("{}.{}", record.name(), field.name);
                let message = if RESERVED_WORDS.contains(&field.name.as_str()) {
                    format!("'{}' is a Dart reserved word", field.name)
                } else if GENERATED_MEMBERS.contains(&field.name.as_str()) {
                    format!("'{}' clashes with a generated member", field.name)
                } else if field.name == record.name() {
                    format!("'{}' has the same name as its record", field.name)
                } else {
                    continue;
                };
                diagnostics.push(Diagnostic::error(self.name(), message).at(location));
            }
        }
    }
}
