//! Built-in lints for record validation.

mod field_naming;
mod record_naming;
mod unknown_reference;

pub use field_naming::FieldNamingLint;
pub use record_naming::RecordNamingLint;
pub use unknown_reference::UnknownReferenceLint;
