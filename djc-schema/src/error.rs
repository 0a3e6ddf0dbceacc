use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ParseError>>;

/// Errors raised while parsing a single type expression such as
/// `Map<String, List<Item>>?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeSyntaxError {
    #[error("unbalanced brackets in '{text}'")]
    UnbalancedBrackets { text: String },

    #[error("'{name}' is not a valid type name (in '{text}')")]
    InvalidIdentifier { name: String, text: String },

    #[error("empty type argument in '{text}'")]
    EmptyArgument { text: String },

    #[error("unexpected '{trailing}' after type arguments in '{text}'")]
    TrailingInput { trailing: String, text: String },

    #[error("{container} takes {expected} type argument(s), got {found} in '{text}'")]
    Arity {
        container: String,
        expected: usize,
        found: usize,
        text: String,
    },

    #[error("{container} requires type arguments (in '{text}')")]
    MissingArguments { container: String, text: String },
}

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(djc::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported schema file '{path}'")]
    #[diagnostic(
        code(djc::unsupported_file),
        help("record definitions are read from .json or .toml files")
    )]
    UnsupportedFile { path: PathBuf },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(djc::json_error))]
    Json {
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(djc::toml_error))]
    Toml {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("problem splitting field {index} of {record}: {text}")]
    #[diagnostic(
        code(djc::invalid_field),
        help("fields are declared as '<type> <name>', e.g. 'List<Item>? items'")
    )]
    InvalidField {
        record: String,
        index: usize,
        text: String,
    },

    #[error("invalid type for field '{field}' of {record}")]
    #[diagnostic(code(djc::invalid_type))]
    InvalidType {
        record: String,
        field: String,
        #[source]
        source: TypeSyntaxError,
    },

    #[error("'{name}' in {record} is not a valid Dart identifier")]
    #[diagnostic(
        code(djc::invalid_name),
        help("names start with a letter, '_' or '$' and contain only ASCII letters, digits, '_' and '$'")
    )]
    InvalidName { record: String, name: String },

    #[error("record {record} has no fields")]
    #[diagnostic(
        code(djc::empty_record),
        help("generated equality needs at least one field to compare")
    )]
    EmptyRecord { record: String },

    #[error("duplicate field '{field}' in {record}")]
    #[diagnostic(code(djc::duplicate_field))]
    DuplicateField { record: String, field: String },

    #[error("duplicate record {name} in {path} (previous {previous})")]
    #[diagnostic(
        code(djc::duplicate_record),
        help("exclude one of them with --exclude, or rename it")
    )]
    DuplicateRecord {
        name: String,
        path: String,
        previous: String,
    },

    #[error("'{name}' is reserved")]
    #[diagnostic(code(djc::reserved_name))]
    ReservedName { name: String },
}

impl ParseError {
    /// Create a parse error from a toml error with source context
    pub fn toml(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(ParseError::Toml {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a parse error from a serde_json error
    pub fn json(source: serde_json::Error, filename: &str) -> Box<Self> {
        Box::new(ParseError::Json {
            filename: filename.to_string(),
            source,
        })
    }

    /// Name of the record this error belongs to, if any.
    pub fn record(&self) -> Option<&str> {
        match self {
            Self::InvalidField { record, .. }
            | Self::InvalidType { record, .. }
            | Self::InvalidName { record, .. }
            | Self::EmptyRecord { record }
            | Self::DuplicateField { record, .. } => Some(record),
            Self::DuplicateRecord { name, .. } => Some(name),
            Self::Io { .. }
            | Self::UnsupportedFile { .. }
            | Self::Json { .. }
            | Self::Toml { .. }
            | Self::ReservedName { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        let err = ParseError::InvalidField {
            record: "Item".into(),
            index: 2,
            text: "List<".into(),
        };
        assert_eq!(err.to_string(), "problem splitting field 2 of Item: List<");
        assert_eq!(err.record(), Some("Item"));
    }

    #[test]
    fn test_invalid_type_keeps_source() {
        let err = ParseError::InvalidType {
            record: "Item".into(),
            field: "tags".into(),
            source: TypeSyntaxError::UnbalancedBrackets {
                text: "List<String".into(),
            },
        };
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "unbalanced brackets in 'List<String'");
    }

    #[test]
    fn test_toml_error_has_span() {
        let src = "[Item\nfields = []";
        let toml_err = toml::from_str::<toml::Table>(src).unwrap_err();
        let err = ParseError::toml(toml_err, src, "records.toml");
        match *err {
            ParseError::Toml { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
