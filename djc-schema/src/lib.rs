//! Record definitions and the field type grammar for dartjsonclass.
//!
//! This crate turns schema files into [`RecordSpec`]s whose fields carry a
//! parsed [`TypeNode`]. Code generators consume these and never see raw
//! type strings.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod error;
mod file;
mod record;
mod types;

pub use catalog::{Catalog, CatalogEntry, RecordFilter};
pub use error::{ParseError, Result, TypeSyntaxError};
pub use file::{META_KEY, SchemaFile, SchemaFormat};
pub use record::{FieldSpec, RecordSpec};
pub use types::{Builtin, ContainerKind, TypeKind, TypeNode, scoped_split};
