//! Whole-class assembly.

use dartjsonclass_schema::{FieldSpec, RecordSpec};

use crate::{
    ast::{BinaryOp, Expr},
    error::Result,
    synth::{self, field_ref},
};

/// Records with more fields than this hash through `Object.hashAll`.
const MAX_HASH_ARGS: usize = 20;

/// Optional member groups of a generated class.
///
/// Serialization members are always generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassOptions {
    /// `fields`, `getAttr` and `setAttr`.
    pub include_accessors: bool,
    /// `operator ==`, `hashCode` and `copy`.
    pub include_value_semantics: bool,
}

impl ClassOptions {
    pub fn without_accessors(mut self) -> Self {
        self.include_accessors = false;
        self
    }

    pub fn without_value_semantics(mut self) -> Self {
        self.include_value_semantics = false;
        self
    }
}

impl Default for ClassOptions {
    fn default() -> Self {
        Self {
            include_accessors: true,
            include_value_semantics: true,
        }
    }
}

/// Build the class for `record`.
///
/// Members come out in a fixed order: field declarations, constructor,
/// `fromMap`, `fromJson`, `toMap`, then the accessor group and the value
/// semantics group when enabled.
pub fn assemble(record: &RecordSpec, options: &ClassOptions) -> Result<Expr> {
    let name = record.name();
    let fields = record.fields();

    let mut members: Vec<Expr> = fields
        .iter()
        .map(|f| Expr::field(f.ty.to_string(), f.name.as_str()))
        .collect();

    members.push(Expr::signature(
        None,
        name,
        fields
            .iter()
            .map(|f| Expr::ident("this").dot(f.name.as_str()))
            .collect(),
    ));

    let from_map = fields
        .iter()
        .map(|f| synth::deserialize(record, f))
        .collect::<Result<Vec<_>>>()?;
    members.push(
        Expr::signature(None, format!("{}.fromMap", name), vec![Expr::field(
            "Map<String, dynamic>",
            "raw",
        )])
        .modifier("factory")
        .arrow(Expr::call(name, from_map)),
    );

    members.push(
        Expr::signature(None, format!("{}.fromJson", name), vec![Expr::field(
            "String", "json",
        )])
        .modifier("factory")
        .arrow(Expr::ident(name).method("fromMap", vec![Expr::call(
            "jsonDecode",
            vec![Expr::ident("json")],
        )])),
    );

    let entries = fields
        .iter()
        .map(|f| Ok(Expr::entry(Expr::string(f.name.as_str()), synth::serialize(record, f)?)))
        .collect::<Result<Vec<_>>>()?;
    members.push(
        Expr::signature(Some("Map<String, dynamic>"), "toMap", vec![])
            .arrow(Expr::map(None, entries))
            .overriding(),
    );

    if options.include_accessors {
        members.extend(accessors(fields));
    }

    if options.include_value_semantics {
        members.extend(value_semantics(record)?);
    }

    Ok(Expr::class_header(name)
        .implements("JsonBase")
        .block(members))
}

fn unknown_field() -> Expr {
    Expr::throw(Expr::ident("ArgumentError").method("value", vec![
        Expr::ident("name"),
        Expr::string("name"),
        Expr::string("unknown field"),
    ]))
}

/// `fields`, `getAttr` and `setAttr`.
fn accessors(fields: &[FieldSpec]) -> Vec<Expr> {
    const PARAMS: &[&str] = &["name", "value"];

    let names = Expr::field("List<String>", "fields")
        .modifier("static")
        .modifier("const")
        .init(Expr::list(
            None,
            fields.iter().map(|f| Expr::string(f.name.as_str())).collect(),
        ));

    let mut get_arms: Vec<Expr> = fields
        .iter()
        .map(|f| {
            Expr::case(Expr::string(f.name.as_str()), vec![Expr::ret(field_ref(
                &f.name, PARAMS,
            ))])
        })
        .collect();
    get_arms.push(Expr::default_case(vec![unknown_field()]));

    let mut set_arms: Vec<Expr> = fields
        .iter()
        .map(|f| {
            Expr::case(Expr::string(f.name.as_str()), vec![
                field_ref(&f.name, PARAMS).assign(Expr::ident("value")),
            ])
            .with_break()
        })
        .collect();
    set_arms.push(Expr::default_case(vec![unknown_field()]));

    vec![
        names,
        Expr::signature(Some("dynamic"), "getAttr", vec![Expr::field("String", "name")])
            .block(vec![Expr::switch(Expr::ident("name"), get_arms)]),
        Expr::signature(Some("void"), "setAttr", vec![
            Expr::field("String", "name"),
            Expr::field("dynamic", "value"),
        ])
        .block(vec![Expr::switch(Expr::ident("name"), set_arms)]),
    ]
}

/// `operator ==`, `hashCode` and `copy`.
fn value_semantics(record: &RecordSpec) -> Result<Vec<Expr>> {
    let name = record.name();
    let fields = record.fields();

    let mut equality = Expr::ident("other").binary(BinaryOp::Is, Expr::ident(name));
    for field in fields {
        equality = equality.and(synth::equality_term(record, field)?);
    }

    let copies = fields
        .iter()
        .map(|f| synth::copy_term(record, f))
        .collect::<Result<Vec<_>>>()?;

    Ok(vec![
        Expr::signature(Some("bool"), "operator ==", vec![Expr::field("Object", "other")])
            .arrow(equality)
            .overriding(),
        Expr::getter("int", "hashCode")
            .arrow(hash(record)?)
            .overriding(),
        Expr::signature(Some(name), "copy", vec![]).arrow(Expr::call(name, copies)),
    ])
}

/// Order-sensitive combination of every field's hash.
fn hash(record: &RecordSpec) -> Result<Expr> {
    if let [field] = record.fields() {
        let term = synth::hash_term(record, field)?;
        return Ok(match field.ty.container_kind() {
            None => term.dot("hashCode"),
            Some(_) => term,
        });
    }

    let terms = record
        .fields()
        .iter()
        .map(|f| synth::hash_term(record, f))
        .collect::<Result<Vec<_>>>()?;
    Ok(if terms.len() <= MAX_HASH_ARGS {
        Expr::ident("Object").method("hash", terms)
    } else {
        Expr::ident("Object").method("hashAll", vec![Expr::list(None, terms)])
    })
}
