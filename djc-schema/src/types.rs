//! Type grammar for field declarations.
//!
//! A field type is written `ident ('<' args '>')? '?'?`, where `args` is a
//! comma separated list of nested type expressions:
//!
//! ```
//! use dartjsonclass_schema::{TypeKind, TypeNode};
//!
//! let ty = TypeNode::parse("Map<String, List<Item>>?").unwrap();
//! assert!(ty.is_nullable());
//! assert!(matches!(ty.kind(), TypeKind::Map { .. }));
//! assert!(ty.is_extension_type());
//! assert_eq!(ty.to_string(), "Map<String, List<Item>>?");
//! ```

use std::fmt;

use indexmap::IndexSet;

use crate::error::TypeSyntaxError;

/// Scalar types the generator treats as plain JSON values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    String,
    Int,
    Double,
    Num,
    Bool,
    /// Carried as an ISO-8601 string on the wire.
    DateTime,
    Dynamic,
    Object,
}

impl Builtin {
    /// Look up a builtin by its Dart spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Self::String),
            "int" => Some(Self::Int),
            "double" => Some(Self::Double),
            "num" => Some(Self::Num),
            "bool" => Some(Self::Bool),
            "DateTime" => Some(Self::DateTime),
            "dynamic" => Some(Self::Dynamic),
            "Object" => Some(Self::Object),
            _ => None,
        }
    }

    /// Get the Dart spelling of this builtin.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "int",
            Self::Double => "double",
            Self::Num => "num",
            Self::Bool => "bool",
            Self::DateTime => "DateTime",
            Self::Dynamic => "dynamic",
            Self::Object => "Object",
        }
    }

    /// Whether values of this type need a conversion to and from JSON.
    pub fn needs_conversion(&self) -> bool {
        matches!(self, Self::DateTime)
    }
}

/// Shape of a parsed type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A builtin or record type without type arguments.
    Scalar,
    /// `List<element>`.
    List(Box<TypeNode>),
    /// `Map<key, value>`.
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },
    /// Any other generic type, e.g. `Set<int>`. Parsed but not generated.
    Generic(Vec<TypeNode>),
}

/// Container shapes the generator knows how to (de)serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    List,
    Map,
}

/// One position in a parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeNode {
    name: String,
    nullable: bool,
    kind: TypeKind,
}

impl TypeNode {
    /// Parse a type expression such as `List<Item>?`.
    pub fn parse(raw: &str) -> Result<Self, TypeSyntaxError> {
        let text = raw.trim();
        let (body, nullable) = match text.strip_suffix('?') {
            Some(body) => (body.trim_end(), true),
            None => (text, false),
        };

        let (name, args) = split_generic(body, text)?;
        if !is_identifier(name) {
            return Err(TypeSyntaxError::InvalidIdentifier {
                name: name.to_string(),
                text: text.to_string(),
            });
        }

        let kind = match (name, args) {
            ("List" | "Map", None) => {
                return Err(TypeSyntaxError::MissingArguments {
                    container: name.to_string(),
                    text: text.to_string(),
                });
            }
            (_, None) => TypeKind::Scalar,
            (_, Some(inner)) => {
                let mut children = scoped_split(inner, ',')?
                    .into_iter()
                    .map(|segment| {
                        if segment.is_empty() {
                            Err(TypeSyntaxError::EmptyArgument {
                                text: text.to_string(),
                            })
                        } else {
                            Self::parse(segment)
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let expected = match name {
                    "List" => Some(1),
                    "Map" => Some(2),
                    _ => None,
                };
                if let Some(expected) = expected
                    && children.len() != expected
                {
                    return Err(TypeSyntaxError::Arity {
                        container: name.to_string(),
                        expected,
                        found: children.len(),
                        text: text.to_string(),
                    });
                }

                match name {
                    "List" => TypeKind::List(Box::new(children.remove(0))),
                    "Map" => {
                        let value = children.remove(1);
                        let key = children.remove(0);
                        TypeKind::Map {
                            key: Box::new(key),
                            value: Box::new(value),
                        }
                    }
                    _ => TypeKind::Generic(children),
                }
            }
        };

        Ok(Self {
            name: name.to_string(),
            nullable,
            kind,
        })
    }

    /// Base identifier, e.g. `List` for `List<int>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Container shape, if this is a `List` or a `Map`.
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self.kind {
            TypeKind::List(_) => Some(ContainerKind::List),
            TypeKind::Map { .. } => Some(ContainerKind::Map),
            TypeKind::Scalar | TypeKind::Generic(_) => None,
        }
    }

    /// Type arguments in declaration order.
    pub fn children(&self) -> Vec<&TypeNode> {
        match &self.kind {
            TypeKind::Scalar => Vec::new(),
            TypeKind::List(element) => vec![element.as_ref()],
            TypeKind::Map { key, value } => vec![key.as_ref(), value.as_ref()],
            TypeKind::Generic(args) => args.iter().collect(),
        }
    }

    /// The builtin this scalar names, if any.
    pub fn builtin(&self) -> Option<Builtin> {
        match self.kind {
            TypeKind::Scalar => Builtin::from_name(&self.name),
            _ => None,
        }
    }

    /// True for scalar builtins such as `int` or `String?`.
    pub fn is_builtin_scalar(&self) -> bool {
        self.builtin().is_some()
    }

    /// True if this type, or any type nested inside it, names a record
    /// rather than a builtin.
    pub fn is_extension_type(&self) -> bool {
        match &self.kind {
            TypeKind::Scalar => self.builtin().is_none(),
            TypeKind::List(element) => element.is_extension_type(),
            TypeKind::Map { key, value } => key.is_extension_type() || value.is_extension_type(),
            TypeKind::Generic(args) => args.iter().any(TypeNode::is_extension_type),
        }
    }

    /// Record names referenced anywhere in this type, first occurrence first.
    pub fn referenced_records(&self) -> IndexSet<&str> {
        let mut names = IndexSet::new();
        self.collect_records(&mut names);
        names
    }

    fn collect_records<'a>(&'a self, names: &mut IndexSet<&'a str>) {
        match &self.kind {
            TypeKind::Scalar => {
                if self.builtin().is_none() {
                    names.insert(&self.name);
                }
            }
            _ => {
                for child in self.children() {
                    child.collect_records(names);
                }
            }
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match &self.kind {
            TypeKind::Scalar => {}
            TypeKind::List(element) => write!(f, "<{}>", element)?,
            TypeKind::Map { key, value } => write!(f, "<{}, {}>", key, value)?,
            TypeKind::Generic(args) => {
                let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                write!(f, "<{}>", args.join(", "))?;
            }
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// Split `text` on `delim`, ignoring delimiters nested inside `<...>`.
///
/// Segments are trimmed. Fails if a `>` closes more than was opened, or if
/// brackets are still open at the end.
pub fn scoped_split(text: &str, delim: char) -> Result<Vec<&str>, TypeSyntaxError> {
    let unbalanced = || TypeSyntaxError::UnbalancedBrackets {
        text: text.to_string(),
    };

    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
            c if c == delim && depth == 0 => {
                segments.push(text[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(unbalanced());
    }
    segments.push(text[start..].trim());
    Ok(segments)
}

/// Split `List<int>` into `("List", Some("int"))`.
fn split_generic<'a>(
    body: &'a str,
    text: &str,
) -> Result<(&'a str, Option<&'a str>), TypeSyntaxError> {
    let unbalanced = || TypeSyntaxError::UnbalancedBrackets {
        text: text.to_string(),
    };

    let Some(open) = body.find('<') else {
        if body.contains('>') {
            return Err(unbalanced());
        }
        return Ok((body.trim(), None));
    };

    let mut depth = 0usize;
    let mut close = None;
    for (i, c) in body[open..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + i);
                    break;
                }
            }
            _ => {}
        }
    }

    let close = close.ok_or_else(unbalanced)?;
    let trailing = body[close + 1..].trim();
    if !trailing.is_empty() {
        if trailing.contains('<') || trailing.contains('>') {
            return Err(unbalanced());
        }
        return Err(TypeSyntaxError::TrailingInput {
            trailing: trailing.to_string(),
            text: text.to_string(),
        });
    }

    Ok((body[..open].trim(), Some(&body[open + 1..close])))
}

/// Whether `name` is a plain Dart identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
