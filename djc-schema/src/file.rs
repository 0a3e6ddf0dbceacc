//! Schema files: record definitions read from JSON or TOML.
//!
//! Both formats share one shape, a table of record names to field lists:
//!
//! ```toml
//! [Item]
//! fields = ["int a", "String b"]
//!
//! [Wrapper]
//! fields = [{ type = "List<Item>?", name = "items" }]
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{FieldSpec, ParseError, RecordSpec, Result};

/// Top-level key reserved for generator metadata.
pub const META_KEY: &str = "_djcmeta";

#[derive(Debug, Deserialize)]
struct RawRecord {
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawField {
    Declaration(String),
    Typed {
        #[serde(rename = "type", alias = "dart_type")]
        ty: String,
        name: String,
    },
}

/// Input format of a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Toml,
}

impl SchemaFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Records parsed from one schema file, in document order.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: PathBuf,
    records: Vec<RecordSpec>,
}

impl SchemaFile {
    /// Read and parse a schema file, picking the format from its extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SchemaFormat::from_path(path).ok_or_else(|| {
            Box::new(ParseError::UnsupportedFile {
                path: path.to_path_buf(),
            })
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ParseError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(&content, format, path)
    }

    /// Parse schema content. `path` is used for error reporting and to name
    /// the generated module.
    pub fn parse(content: &str, format: SchemaFormat, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = path.display().to_string();
        let raw: IndexMap<String, RawRecord> = match format {
            SchemaFormat::Json => {
                serde_json::from_str(content).map_err(|e| ParseError::json(e, &filename))?
            }
            SchemaFormat::Toml => {
                toml::from_str(content).map_err(|e| ParseError::toml(e, content, &filename))?
            }
        };

        let records = raw
            .into_iter()
            .map(|(name, record)| lower_record(name, record))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File stem, used as the generated module name.
    pub fn module_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "records".to_string())
    }

    pub fn records(&self) -> &[RecordSpec] {
        &self.records
    }

    pub fn into_records(self) -> Vec<RecordSpec> {
        self.records
    }
}

fn lower_record(name: String, raw: RawRecord) -> Result<RecordSpec> {
    if name == META_KEY {
        return Err(Box::new(ParseError::ReservedName { name }));
    }
    let fields = raw
        .fields
        .into_iter()
        .enumerate()
        .map(|(i, field)| match field {
            RawField::Declaration(decl) => FieldSpec::parse_declaration(&name, i, &decl),
            RawField::Typed { ty, name: field } => FieldSpec::from_parts(&name, &field, &ty),
        })
        .collect::<Result<Vec<_>>>()?;
    RecordSpec::new(name, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let file = SchemaFile::parse(
            r#"{
                "Item": {"fields": ["int a", "String b"]},
                "Wrapper": {"fields": [{"dart_type": "List<Item>?", "name": "items"}]}
            }"#,
            SchemaFormat::Json,
            "models.json",
        )
        .unwrap();

        let names: Vec<_> = file.records().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Item", "Wrapper"]);
        assert_eq!(file.records()[1].fields()[0].ty.to_string(), "List<Item>?");
        assert_eq!(file.module_name(), "models");
    }

    #[test]
    fn test_parse_toml_keeps_document_order() {
        let file = SchemaFile::parse(
            r#"
            [Zebra]
            fields = ["int stripes"]

            [Apple]
            fields = [{ type = "String", name = "color" }]
            "#,
            SchemaFormat::Toml,
            "zoo.toml",
        )
        .unwrap();

        let names: Vec<_> = file.records().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Zebra", "Apple"]);
    }

    #[test]
    fn test_reserved_meta_key() {
        let err = SchemaFile::parse(
            r#"{"_djcmeta": {"fields": ["int a"]}}"#,
            SchemaFormat::Json,
            "meta.json",
        )
        .unwrap_err();
        assert!(matches!(*err, ParseError::ReservedName { .. }));
    }

    #[test]
    fn test_invalid_names_stop_the_file() {
        let err = SchemaFile::parse(
            r#"{"Item": {"fields": [{"type": "int", "name": "a b"}]}}"#,
            SchemaFormat::Json,
            "bad.json",
        )
        .unwrap_err();
        assert!(matches!(*err, ParseError::InvalidName { ref name, .. } if name == "a b"));

        let err = SchemaFile::parse(
            "[\"my record\"]\nfields = [\"int a\"]\n",
            SchemaFormat::Toml,
            "bad.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, ParseError::InvalidName { ref name, .. } if name == "my record"));
    }

    #[test]
    fn test_field_error_stops_the_file() {
        let err = SchemaFile::parse(
            r#"{"Item": {"fields": ["int a", "List<int b"]}}"#,
            SchemaFormat::Json,
            "bad.json",
        )
        .unwrap_err();
        assert_eq!(err.record(), Some("Item"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = SchemaFile::parse("[Item\n", SchemaFormat::Toml, "bad.toml").unwrap_err();
        assert!(matches!(*err, ParseError::Toml { .. }));
    }

    #[test]
    fn test_open_rejects_unknown_extension() {
        let err = SchemaFile::open("models.yaml").unwrap_err();
        assert!(matches!(*err, ParseError::UnsupportedFile { .. }));
    }

    #[test]
    fn test_open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");
        std::fs::write(&path, r#"{"Item": {"fields": ["int a"]}}"#).unwrap();

        let file = SchemaFile::open(&path).unwrap();
        assert_eq!(file.records().len(), 1);
        assert_eq!(file.path(), path.as_path());
    }
}
