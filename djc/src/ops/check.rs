//! Check operation - schema validation.

use std::path::PathBuf;

use dartjsonclass_codegen::lint::{Diagnostic, Validator};
use dartjsonclass_codegen_dart::Generator;
use dartjsonclass_schema::Catalog;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the lints, then dry-runs generation of every record so types the
/// generator rejects show up as errors too.
pub fn check(catalog: &Catalog, paths: &[PathBuf]) -> CheckReport {
    let mut diagnostics = Validator::new().run(catalog.records());

    let generator = Generator::new(catalog);
    for record in catalog.records() {
        if let Err(err) = generator.class_lines(record) {
            diagnostics.push(
                Diagnostic::error("codegen", err.to_string())
                    .at(format!("{}.{}", err.record(), err.field())),
            );
        }
    }

    CheckReport {
        paths: paths.to_vec(),
        records: catalog.len(),
        diagnostics,
    }
}
