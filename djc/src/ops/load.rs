//! Load operation - schema files into a catalog.

use std::path::PathBuf;

use dartjsonclass_schema::{Catalog, RecordFilter, Result, SchemaFile};

/// Parse every schema file and collect the records `filter` admits.
///
/// Records keep the order of `paths`, then document order within a file.
pub fn load(paths: &[PathBuf], filter: &RecordFilter) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for path in paths {
        let file = SchemaFile::open(path)?;
        tracing::debug!(
            "{}: {} records",
            path.display(),
            file.records().len()
        );
        catalog.add_file(file, filter)?;
    }
    tracing::info!("loaded {} records", catalog.len());
    Ok(catalog)
}
