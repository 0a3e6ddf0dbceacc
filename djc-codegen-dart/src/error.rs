//! Errors raised while synthesizing Dart code for a record.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

/// A field type the generator cannot translate.
///
/// Every variant names the offending field and its record, so a failure can
/// be reported and the record skipped without losing context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("unknown container {container} in {record}.{field}; only List and Map are supported")]
    UnknownContainer {
        container: String,
        record: String,
        field: String,
    },

    #[error("maps need plain String keys, got {key} in {record}.{field}")]
    NonStringMapKey {
        key: String,
        record: String,
        field: String,
    },
}

impl CodegenError {
    /// Name of the record the failing field belongs to.
    pub fn record(&self) -> &str {
        match self {
            Self::UnknownContainer { record, .. } | Self::NonStringMapKey { record, .. } => record,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::UnknownContainer { field, .. } | Self::NonStringMapKey { field, .. } => field,
        }
    }
}
