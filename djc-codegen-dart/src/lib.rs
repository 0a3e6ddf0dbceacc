//! Dart code generator for dartjsonclass.
//!
//! Turns [`RecordSpec`](dartjsonclass_schema::RecordSpec)s into Dart classes
//! with JSON (de)serialization, attribute accessors and value semantics.
//!
//! # Usage
//!
//! ```
//! use dartjsonclass_codegen_dart::Generator;
//! use dartjsonclass_schema::{Catalog, RecordFilter, SchemaFile, SchemaFormat};
//!
//! let file = SchemaFile::parse(
//!     r#"{"Item": {"fields": ["int a"]}}"#,
//!     SchemaFormat::Json,
//!     "models.json",
//! )?;
//! let mut catalog = Catalog::new();
//! catalog.add_file(file, &RecordFilter::new())?;
//!
//! let dart = Generator::new(&catalog).single_file()?;
//! assert!(dart.output.contains("class Item implements JsonBase {"));
//! assert_eq!(dart.records, vec!["Item"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Generated Output
//!
//! Each class declares its fields, a positional constructor, `fromMap`,
//! `fromJson` and `toMap`, optionally followed by `fields` / `getAttr` /
//! `setAttr` and `==` / `hashCode` / `copy`. Every file imports
//! `jsonbase.dart`, which [`files::JsonBaseDart`] renders.

mod class;
mod code_file;
mod error;
mod generator;
mod synth;

pub mod ast;
pub mod files;

pub use class::{ClassOptions, assemble};
pub use code_file::{CodeFile, GeneratedFile, HEADER};
pub use error::{CodegenError, Result};
pub use generator::{Generated, Generator};
pub use synth::{copy_term, deserialize, equality_term, hash_term, serialize};
