//! Record and field definitions.

use std::{collections::HashSet, sync::LazyLock};

use indexmap::IndexSet;
use regex::Regex;

use crate::{ParseError, Result, TypeNode, types::is_identifier};

// e.g. `Map<String, List<OtherClass>>? others`
static FIELD_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\w+(?:<.+>)?\s*\??)\s+(\S+)\s*$").expect("field declaration regex")
});

/// A single declared field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeNode,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Parse a `"<type> <name>"` declaration, the `index`th field of `record`.
    pub fn parse_declaration(record: &str, index: usize, declaration: &str) -> Result<Self> {
        let captures = FIELD_DECLARATION.captures(declaration).ok_or_else(|| {
            Box::new(ParseError::InvalidField {
                record: record.to_string(),
                index,
                text: declaration.to_string(),
            })
        })?;
        Self::from_parts(record, &captures[2], &captures[1])
    }

    /// Build a field from a separate name and type string.
    pub fn from_parts(record: &str, name: &str, type_text: &str) -> Result<Self> {
        check_name(record, name)?;
        let ty = TypeNode::parse(type_text).map_err(|source| {
            Box::new(ParseError::InvalidType {
                record: record.to_string(),
                field: name.to_string(),
                source,
            })
        })?;
        Ok(Self::new(name, ty))
    }
}

fn check_name(record: &str, name: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(Box::new(ParseError::InvalidName {
            record: record.to_string(),
            name: name.to_string(),
        }))
    }
}

/// A named record with its ordered fields.
///
/// Field names are unique and there is at least one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    name: String,
    fields: Vec<FieldSpec>,
}

impl RecordSpec {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self> {
        let name = name.into();
        check_name(&name, &name)?;
        if fields.is_empty() {
            return Err(Box::new(ParseError::EmptyRecord { record: name }));
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(Box::new(ParseError::DuplicateField {
                    record: name,
                    field: field.name.clone(),
                }));
            }
        }

        Ok(Self { name, fields })
    }

    /// Parse a record from field declaration strings.
    pub fn from_declarations<S: AsRef<str>>(name: &str, declarations: &[S]) -> Result<Self> {
        let fields = declarations
            .iter()
            .enumerate()
            .map(|(i, decl)| FieldSpec::parse_declaration(name, i, decl.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(name, fields)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Records referenced by any field, first occurrence first.
    pub fn referenced_records(&self) -> IndexSet<&str> {
        self.fields
            .iter()
            .flat_map(|field| field.ty.referenced_records())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeSyntaxError;

    #[test]
    fn test_parse_declaration() {
        let field = FieldSpec::parse_declaration("Msg", 0, "Map<String, List<Other>>? others")
            .unwrap();
        assert_eq!(field.name, "others");
        assert_eq!(field.ty.to_string(), "Map<String, List<Other>>?");
    }

    #[test]
    fn test_parse_declaration_simple() {
        let field = FieldSpec::parse_declaration("Item", 0, "int a").unwrap();
        assert_eq!(field.name, "a");
        assert_eq!(field.ty.to_string(), "int");
    }

    #[test]
    fn test_unsplittable_declaration() {
        let err = FieldSpec::parse_declaration("Item", 3, "justaname").unwrap_err();
        assert!(matches!(
            *err,
            ParseError::InvalidField { ref record, index: 3, ref text }
                if record == "Item" && text == "justaname"
        ));
    }

    #[test]
    fn test_bad_brackets_name_the_field() {
        let err = FieldSpec::parse_declaration("Item", 0, "List<Map<String, int> xs").unwrap_err();
        match *err {
            ParseError::InvalidType {
                record,
                field,
                source,
            } => {
                assert_eq!(record, "Item");
                assert_eq!(field, "xs");
                assert!(matches!(source, TypeSyntaxError::UnbalancedBrackets { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_declared_name_must_be_identifier() {
        for decl in ["int 9lives", "int a-b", "String naïve"] {
            let err = FieldSpec::parse_declaration("Item", 0, decl).unwrap_err();
            assert!(
                matches!(*err, ParseError::InvalidName { ref record, .. } if record == "Item"),
                "{decl}: {err}"
            );
        }
        assert!(FieldSpec::parse_declaration("Item", 0, "int a b").is_err());
        assert!(FieldSpec::parse_declaration("Item", 0, "int _private$").is_ok());
    }

    #[test]
    fn test_structured_name_must_be_identifier() {
        let err = FieldSpec::from_parts("Item", "a b", "int").unwrap_err();
        assert!(matches!(
            *err,
            ParseError::InvalidName { ref name, .. } if name == "a b"
        ));
    }

    #[test]
    fn test_record_name_must_be_identifier() {
        let field = FieldSpec::parse_declaration("my record", 0, "int a").unwrap();
        let err = RecordSpec::new("my record", vec![field]).unwrap_err();
        assert!(matches!(
            *err,
            ParseError::InvalidName { ref record, ref name } if record == "my record" && name == "my record"
        ));
    }

    #[test]
    fn test_empty_record_rejected() {
        let err = RecordSpec::new("Empty", Vec::new()).unwrap_err();
        assert!(matches!(*err, ParseError::EmptyRecord { .. }));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = RecordSpec::from_declarations("Item", &["int a", "String a"]).unwrap_err();
        assert!(matches!(
            *err,
            ParseError::DuplicateField { ref field, .. } if field == "a"
        ));
    }

    #[test]
    fn test_referenced_records() {
        let record = RecordSpec::from_declarations(
            "Msg",
            &["Item item", "List<Item> items", "Map<String, Other>? others", "int n"],
        )
        .unwrap();
        assert!(record.referenced_records().iter().eq(&["Item", "Other"]));
        assert!(record.field("items").is_some());
        assert!(record.field("missing").is_none());
    }
}
