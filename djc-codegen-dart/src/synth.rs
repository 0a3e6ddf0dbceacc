//! Type-directed synthesis of per-field expressions.
//!
//! Each function walks the field's [`TypeNode`] and builds the Dart
//! expression for one generated member: the `fromMap` argument, the `toMap`
//! value, the `==` term and the `copy` argument.

use dartjsonclass_schema::{Builtin, ContainerKind, FieldSpec, RecordSpec, TypeKind, TypeNode};

use crate::{
    ast::{BinaryOp, Expr},
    error::{CodegenError, Result},
};

/// Record and field a synthesis call works on, for error reporting.
struct FieldContext<'a> {
    record: &'a str,
    field: &'a FieldSpec,
}

impl<'a> FieldContext<'a> {
    fn new(record: &'a RecordSpec, field: &'a FieldSpec) -> Self {
        Self {
            record: record.name(),
            field,
        }
    }

    /// Reject types no member can be generated for.
    fn validate(&self, node: &TypeNode) -> Result<()> {
        match node.kind() {
            TypeKind::Scalar => Ok(()),
            TypeKind::List(element) => self.validate(element),
            TypeKind::Map { key, value } => {
                self.check_key(key)?;
                self.validate(value)
            }
            TypeKind::Generic(_) => Err(self.unknown_container(node)),
        }
    }

    fn check_key(&self, key: &TypeNode) -> Result<()> {
        if key.builtin() == Some(Builtin::String) && !key.is_nullable() {
            Ok(())
        } else {
            Err(CodegenError::NonStringMapKey {
                key: key.to_string(),
                record: self.record.to_string(),
                field: self.field.name.clone(),
            })
        }
    }

    fn unknown_container(&self, node: &TypeNode) -> CodegenError {
        CodegenError::UnknownContainer {
            container: node.name().to_string(),
            record: self.record.to_string(),
            field: self.field.name.clone(),
        }
    }

    /// The field as seen from a member body, qualified with `this.` when
    /// one of the member's parameters has the same name.
    fn field_ref(&self, params: &[&str]) -> Expr {
        field_ref(&self.field.name, params)
    }
}

pub(crate) fn field_ref(name: &str, params: &[&str]) -> Expr {
    if params.contains(&name) {
        Expr::ident("this").dot(name)
    } else {
        Expr::ident(name)
    }
}

fn null() -> Expr {
    Expr::ident("null")
}

/// `value == null ? null : expr`
fn null_guard(value: Expr, expr: Expr) -> Expr {
    Expr::ternary(value.eq(null()), null(), expr)
}

/// Lambda parameter name for nesting `depth`: `elt`, `elt1`, `elt2`, ...
fn param(base: &str, depth: usize) -> String {
    if depth == 0 {
        base.to_string()
    } else {
        format!("{}{}", base, depth)
    }
}

/// A builtin whose JSON form is already the Dart value.
fn is_plain(node: &TypeNode) -> bool {
    node.builtin().is_some_and(|b| !b.needs_conversion())
}

fn needs_conversion(node: &TypeNode) -> bool {
    match node.kind() {
        TypeKind::Scalar => !is_plain(node),
        TypeKind::List(element) => needs_conversion(element),
        TypeKind::Map { value, .. } => needs_conversion(value),
        TypeKind::Generic(_) => true,
    }
}

/// Expression reading `field` out of the `raw` map in `fromMap`.
pub fn deserialize(record: &RecordSpec, field: &FieldSpec) -> Result<Expr> {
    let ctx = FieldContext::new(record, field);
    ctx.validate(&field.ty)?;
    let lookup = Expr::ident("raw").index(Expr::string(field.name.as_str()));
    from_wire(&ctx, &field.ty, lookup, 0)
}

fn from_wire(ctx: &FieldContext<'_>, node: &TypeNode, value: Expr, depth: usize) -> Result<Expr> {
    let converted = match node.kind() {
        TypeKind::Scalar => match node.builtin() {
            Some(Builtin::DateTime) => {
                Some(Expr::ident("DateTime").method("parse", vec![value.clone()]))
            }
            Some(_) => None,
            None => Some(Expr::ident(node.name()).method("fromMap", vec![value.clone()])),
        },
        TypeKind::List(element) if is_plain(element) => Some(Expr::list(
            Some(element.to_string()),
            vec![value.clone().spread()],
        )),
        TypeKind::List(element) => {
            let elt = param("elt", depth);
            let body = from_wire(ctx, element, Expr::ident(elt.as_str()), depth + 1)?;
            Some(
                value
                    .clone()
                    .cast("List")
                    .dot("map")
                    .invoke_typed(vec![element.to_string()], vec![Expr::lambda([elt], body)])
                    .method("toList", vec![]),
            )
        }
        TypeKind::Map { key, value: inner } => {
            ctx.check_key(key)?;
            if is_plain(inner) {
                Some(Expr::map(
                    Some((key.to_string(), inner.to_string())),
                    vec![value.clone().spread()],
                ))
            } else {
                let (k, v) = (param("key", depth), param("val", depth));
                let body = from_wire(ctx, inner, Expr::ident(v.as_str()), depth + 1)?;
                let entry = Expr::call("MapEntry", vec![Expr::ident(k.as_str()), body]);
                Some(
                    value
                        .clone()
                        .cast("Map<String, dynamic>")
                        .dot("map")
                        .invoke_typed(
                            vec![key.to_string(), inner.to_string()],
                            vec![Expr::lambda([k, v], entry)],
                        ),
                )
            }
        }
        TypeKind::Generic(_) => return Err(ctx.unknown_container(node)),
    };

    Ok(match converted {
        None if node.is_nullable() => value,
        None => value.bang(),
        Some(expr) if node.is_nullable() => null_guard(value, expr),
        Some(expr) => expr,
    })
}

/// Expression producing the JSON value of `field` in `toMap`.
pub fn serialize(record: &RecordSpec, field: &FieldSpec) -> Result<Expr> {
    let ctx = FieldContext::new(record, field);
    ctx.validate(&field.ty)?;
    to_wire(&ctx, &field.ty, ctx.field_ref(&[]), 0)
}

fn to_wire(ctx: &FieldContext<'_>, node: &TypeNode, value: Expr, depth: usize) -> Result<Expr> {
    if !needs_conversion(node) {
        return Ok(value);
    }
    let nullable = node.is_nullable();
    Ok(match node.kind() {
        TypeKind::Scalar if node.is_builtin_scalar() => value
            .member("toIso8601String", nullable)
            .invoke(vec![]),
        TypeKind::Scalar => value.member("toMap", nullable).invoke(vec![]),
        TypeKind::List(element) => {
            let elt = param("elt", depth);
            let body = to_wire(ctx, element, Expr::ident(elt.as_str()), depth + 1)?;
            value
                .member("map", nullable)
                .invoke(vec![Expr::lambda([elt], body)])
                .method("toList", vec![])
        }
        TypeKind::Map { key, value: inner } => {
            ctx.check_key(key)?;
            let (k, v) = (param("key", depth), param("val", depth));
            let body = to_wire(ctx, inner, Expr::ident(v.as_str()), depth + 1)?;
            let entry = Expr::call("MapEntry", vec![Expr::ident(k.as_str()), body]);
            value
                .member("map", nullable)
                .invoke(vec![Expr::lambda([k, v], entry)])
        }
        TypeKind::Generic(_) => return Err(ctx.unknown_container(node)),
    })
}

/// Term comparing `field` with `other`'s in `operator ==`.
///
/// Containers are compared one level deep with `listEquals` / `mapEquals`;
/// nested containers fall back to identity of the inner values.
pub fn equality_term(record: &RecordSpec, field: &FieldSpec) -> Result<Expr> {
    let ctx = FieldContext::new(record, field);
    ctx.validate(&field.ty)?;
    let this = ctx.field_ref(&["other"]);
    let other = Expr::ident("other").dot(field.name.as_str());
    Ok(match field.ty.container_kind() {
        Some(ContainerKind::List) => Expr::call("listEquals", vec![this, other]),
        Some(ContainerKind::Map) => Expr::call("mapEquals", vec![this, other]),
        None => this.binary(BinaryOp::Eq, other),
    })
}

/// Value `field` feeds into `hashCode`, consistent with [`equality_term`].
///
/// Scalars are passed as is. Lists hash their elements in order and maps
/// hash their entries in any order, matching `listEquals` / `mapEquals`.
/// A null container hashes to 0.
pub fn hash_term(record: &RecordSpec, field: &FieldSpec) -> Result<Expr> {
    let ctx = FieldContext::new(record, field);
    ctx.validate(&field.ty)?;
    let ty = &field.ty;
    let value = ctx.field_ref(&[]);
    let target = if ty.is_nullable() {
        value.clone().bang()
    } else {
        value.clone()
    };

    let hashed = match ty.container_kind() {
        None => return Ok(value),
        Some(ContainerKind::List) => Expr::ident("Object").method("hashAll", vec![target]),
        Some(ContainerKind::Map) => {
            let entry = Expr::ident("Object").method("hash", vec![
                Expr::ident("kv").dot("key"),
                Expr::ident("kv").dot("value"),
            ]);
            let entries = target
                .dot("entries")
                .method("map", vec![Expr::lambda(["kv"], entry)]);
            Expr::ident("Object").method("hashAllUnordered", vec![entries])
        }
    };

    Ok(if ty.is_nullable() {
        Expr::ternary(value.eq(null()), Expr::ident("0"), hashed)
    } else {
        hashed
    })
}

/// Argument passed for `field` to the constructor in `copy()`.
///
/// Records copy themselves; containers are re-materialized one level deep,
/// so records held inside a list or map are shared with the original.
pub fn copy_term(record: &RecordSpec, field: &FieldSpec) -> Result<Expr> {
    let ctx = FieldContext::new(record, field);
    ctx.validate(&field.ty)?;
    let ty = &field.ty;
    let value = ctx.field_ref(&[]);
    let spread = if ty.is_nullable() {
        value.clone().bang().spread()
    } else {
        value.clone().spread()
    };

    let copied = match ty.kind() {
        TypeKind::Scalar if ty.is_builtin_scalar() => return Ok(value),
        TypeKind::Scalar => {
            return Ok(value.member("copy", ty.is_nullable()).invoke(vec![]));
        }
        TypeKind::List(element) => Expr::list(Some(element.to_string()), vec![spread]),
        TypeKind::Map { key, value: inner } => {
            Expr::map(Some((key.to_string(), inner.to_string())), vec![spread])
        }
        TypeKind::Generic(_) => return Err(ctx.unknown_container(ty)),
    };

    Ok(if ty.is_nullable() {
        null_guard(value, copied)
    } else {
        copied
    })
}
