//! Collections of records gathered from several schema files.

use indexmap::{IndexMap, map::Entry};

use crate::{ParseError, RecordSpec, Result, SchemaFile};

/// Include/exclude filter on record names.
///
/// An empty include list admits every record; exclusion always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, name: impl Into<String>) -> Self {
        self.include.push(name.into());
        self
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.push(name.into());
        self
    }

    pub fn allows(&self, name: &str) -> bool {
        if self.exclude.iter().any(|n| n == name) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|n| n == name)
    }
}

/// A record together with the module (schema file stem) it came from.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub module: String,
    pub source: String,
    pub record: RecordSpec,
}

/// Every record selected for one generation run, in input order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the records of `file` that pass `filter`.
    ///
    /// Fails on a record name already added from another file.
    pub fn add_file(&mut self, file: SchemaFile, filter: &RecordFilter) -> Result<()> {
        let module = file.module_name();
        let source = file.path().display().to_string();
        for record in file.into_records() {
            if !filter.allows(record.name()) {
                continue;
            }
            self.insert(CatalogEntry {
                module: module.clone(),
                source: source.clone(),
                record,
            })?;
        }
        Ok(())
    }

    pub fn insert(&mut self, entry: CatalogEntry) -> Result<()> {
        match self.entries.entry(entry.record.name().to_string()) {
            Entry::Occupied(existing) => Err(Box::new(ParseError::DuplicateRecord {
                name: entry.record.name().to_string(),
                path: entry.source,
                previous: existing.get().source.clone(),
            })),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Entries in input order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn records(&self) -> impl Iterator<Item = &RecordSpec> {
        self.entries.values().map(|e| &e.record)
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaFormat;

    fn file(path: &str, json: &str) -> SchemaFile {
        SchemaFile::parse(json, SchemaFormat::Json, path).unwrap()
    }

    #[test]
    fn test_filter() {
        let all = RecordFilter::new();
        assert!(all.allows("Item"));

        let filter = RecordFilter::new().include("Item").include("Msg").exclude("Msg");
        assert!(filter.allows("Item"));
        assert!(!filter.allows("Msg"));
        assert!(!filter.allows("Other"));
    }

    #[test]
    fn test_add_file_applies_filter() {
        let mut catalog = Catalog::new();
        catalog
            .add_file(
                file(
                    "models.json",
                    r#"{"Item": {"fields": ["int a"]}, "Skip": {"fields": ["int b"]}}"#,
                ),
                &RecordFilter::new().exclude("Skip"),
            )
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Item"));
        assert_eq!(catalog.get("Item").unwrap().module, "models");
    }

    #[test]
    fn test_entries_keep_input_order() {
        let mut catalog = Catalog::new();
        let filter = RecordFilter::new();
        catalog
            .add_file(
                file("b.json", r#"{"Zed": {"fields": ["int z"]}, "Mid": {"fields": ["int m"]}}"#),
                &filter,
            )
            .unwrap();
        catalog
            .add_file(file("a.json", r#"{"Alpha": {"fields": ["int a"]}}"#), &filter)
            .unwrap();

        let names: Vec<&str> = catalog.records().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Zed", "Mid", "Alpha"]);
        let modules: Vec<&str> = catalog.entries().map(|e| e.module.as_str()).collect();
        assert_eq!(modules, vec!["b", "b", "a"]);
    }

    #[test]
    fn test_duplicate_across_files() {
        let mut catalog = Catalog::new();
        let filter = RecordFilter::new();
        catalog
            .add_file(file("a.json", r#"{"Item": {"fields": ["int a"]}}"#), &filter)
            .unwrap();
        let err = catalog
            .add_file(file("b.json", r#"{"Item": {"fields": ["int a"]}}"#), &filter)
            .unwrap_err();

        match *err {
            ParseError::DuplicateRecord {
                name,
                path,
                previous,
            } => {
                assert_eq!(name, "Item");
                assert_eq!(path, "b.json");
                assert_eq!(previous, "a.json");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
