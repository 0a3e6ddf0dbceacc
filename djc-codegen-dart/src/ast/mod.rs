//! Dart expression AST.
//!
//! Every construct the generator emits is one variant of [`Expr`]. Nodes are
//! plain values: build them with the helper constructors, then render them
//! through [`Renderable`](dartjsonclass_codegen::builder::Renderable), which
//! is an exhaustive match in [`render`].
//!
//! ```
//! use dartjsonclass_codegen::builder::{Indent, Renderable};
//! use dartjsonclass_codegen_dart::ast::Expr;
//!
//! let expr = Expr::ident("raw").index(Expr::string("a")).bang();
//! assert_eq!(expr.to_lines(Indent::DART), vec![r#"raw["a"]!"#]);
//! ```

mod render;

/// Binary operators used by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `==`
    Eq,
    /// `&&`
    And,
    /// `is`
    Is,
    /// `as`
    As,
    /// `=`
    Assign,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::And => "&&",
            Self::Is => "is",
            Self::As => "as",
            Self::Assign => "=",
        }
    }
}

/// A Dart construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Identifier, keyword or literal copied verbatim (`raw`, `null`, `this`).
    Ident(String),
    /// Double-quoted string literal.
    Str(String),
    /// `callee<T>(args)`
    Call {
        callee: Box<Expr>,
        type_args: Vec<String>,
        args: Vec<Expr>,
    },
    /// `target[index]`
    Index { target: Box<Expr>, index: Box<Expr> },
    /// `target.name` or `target?.name`
    Member {
        target: Box<Expr>,
        name: String,
        null_safe: bool,
    },
    /// `expr!`
    Bang(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `cond ? then : otherwise`
    Ternary {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Paren(Box<Expr>),
    /// `<T>[items]`
    ListLit {
        elem_type: Option<String>,
        items: Vec<Expr>,
    },
    /// `<K, V>{entries}`; entries are [`Expr::Entry`] or [`Expr::Spread`].
    MapLit {
        types: Option<(String, String)>,
        entries: Vec<Expr>,
    },
    /// `key: value` inside a map literal.
    Entry { key: Box<Expr>, value: Box<Expr> },
    /// `...expr`
    Spread(Box<Expr>),
    /// `(params) => body`
    Lambda { params: Vec<String>, body: Box<Expr> },
    /// Member signature: `modifiers ret name(params)`.
    ///
    /// A signature without a parameter list is a getter and renders with
    /// the `get` keyword.
    Signature {
        modifiers: Vec<String>,
        ret: Option<String>,
        name: String,
        params: Option<Vec<Expr>>,
    },
    /// `sig => body`
    Arrow { sig: Box<Expr>, body: Box<Expr> },
    /// `header { body; ... }`. Never followed by a statement terminator.
    Block { header: Box<Expr>, body: Vec<Expr> },
    /// `class Name extends Base implements A, B`
    ClassHeader {
        name: String,
        extends: Option<String>,
        implements: Vec<String>,
    },
    /// Field or parameter declaration: `modifiers type name = init`.
    Field {
        modifiers: Vec<String>,
        ty: String,
        name: String,
        init: Option<Box<Expr>>,
    },
    /// `switch (subject) { arms }`
    Switch { subject: Box<Expr>, arms: Vec<Expr> },
    /// `case pattern:` or `default:` followed by its statements.
    CaseArm {
        pattern: Option<Box<Expr>>,
        body: Vec<Expr>,
        brk: bool,
    },
    Return(Box<Expr>),
    Throw(Box<Expr>),
    /// `@annotation` on its own line before `inner`.
    Annotated { annotation: String, inner: Box<Expr> },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// `callee(args)` where callee is an identifier.
    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::ident(callee).invoke(args)
    }

    /// Call this expression with `args`.
    pub fn invoke(self, args: Vec<Expr>) -> Self {
        Self::Call {
            callee: Box::new(self),
            type_args: Vec::new(),
            args,
        }
    }

    /// Call this expression with type arguments, e.g. `map<Item>(...)`.
    pub fn invoke_typed(self, type_args: Vec<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            callee: Box::new(self),
            type_args,
            args,
        }
    }

    pub fn index(self, index: Expr) -> Self {
        Self::Index {
            target: Box::new(self),
            index: Box::new(index),
        }
    }

    /// `self.name`
    pub fn dot(self, name: impl Into<String>) -> Self {
        self.member(name, false)
    }

    /// `self.name`, or `self?.name` when `null_safe`.
    pub fn member(self, name: impl Into<String>, null_safe: bool) -> Self {
        Self::Member {
            target: Box::new(self),
            name: name.into(),
            null_safe,
        }
    }

    /// Call method `name` with `args`.
    pub fn method(self, name: impl Into<String>, args: Vec<Expr>) -> Self {
        self.dot(name).invoke(args)
    }

    pub fn bang(self) -> Self {
        Self::Bang(Box::new(self))
    }

    pub fn binary(self, op: BinaryOp, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    pub fn eq(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::Eq, rhs)
    }

    pub fn and(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::And, rhs)
    }

    pub fn assign(self, rhs: Expr) -> Self {
        self.binary(BinaryOp::Assign, rhs)
    }

    /// `(self as ty)`
    pub fn cast(self, ty: impl Into<String>) -> Self {
        Self::Paren(Box::new(self.binary(BinaryOp::As, Self::ident(ty))))
    }

    /// `cond ? then : otherwise`
    pub fn ternary(cond: Expr, then: Expr, otherwise: Expr) -> Self {
        Self::Ternary {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn list(elem_type: Option<String>, items: Vec<Expr>) -> Self {
        Self::ListLit { elem_type, items }
    }

    pub fn map(types: Option<(String, String)>, entries: Vec<Expr>) -> Self {
        Self::MapLit { types, entries }
    }

    pub fn entry(key: Expr, value: Expr) -> Self {
        Self::Entry {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn spread(self) -> Self {
        Self::Spread(Box::new(self))
    }

    pub fn lambda<S: Into<String>>(params: impl IntoIterator<Item = S>, body: Expr) -> Self {
        Self::Lambda {
            params: params.into_iter().map(Into::into).collect(),
            body: Box::new(body),
        }
    }

    /// Signature of a method or constructor.
    pub fn signature(ret: Option<&str>, name: impl Into<String>, params: Vec<Expr>) -> Self {
        Self::Signature {
            modifiers: Vec::new(),
            ret: ret.map(str::to_string),
            name: name.into(),
            params: Some(params),
        }
    }

    /// Signature of a getter: `ret get name`.
    pub fn getter(ret: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Signature {
            modifiers: Vec::new(),
            ret: Some(ret.into()),
            name: name.into(),
            params: None,
        }
    }

    /// Prefix a signature or field with a modifier such as `factory`.
    ///
    /// Other nodes are returned unchanged.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        if let Self::Signature { modifiers, .. } | Self::Field { modifiers, .. } = &mut self {
            modifiers.push(modifier.into());
        }
        self
    }

    /// `self => body`
    pub fn arrow(self, body: Expr) -> Self {
        Self::Arrow {
            sig: Box::new(self),
            body: Box::new(body),
        }
    }

    /// `self { body }`
    pub fn block(self, body: Vec<Expr>) -> Self {
        Self::Block {
            header: Box::new(self),
            body,
        }
    }

    pub fn class_header(name: impl Into<String>) -> Self {
        Self::ClassHeader {
            name: name.into(),
            extends: None,
            implements: Vec::new(),
        }
    }

    /// Add an interface to a class header. Other nodes are returned unchanged.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        if let Self::ClassHeader { implements, .. } = &mut self {
            implements.push(interface.into());
        }
        self
    }

    /// `ty name`, used for fields and typed parameters.
    pub fn field(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Field {
            modifiers: Vec::new(),
            ty: ty.into(),
            name: name.into(),
            init: None,
        }
    }

    /// Attach an initializer to a field. Other nodes are returned unchanged.
    pub fn init(mut self, value: Expr) -> Self {
        if let Self::Field { init, .. } = &mut self {
            *init = Some(Box::new(value));
        }
        self
    }

    pub fn switch(subject: Expr, arms: Vec<Expr>) -> Self {
        Self::Switch {
            subject: Box::new(subject),
            arms,
        }
    }

    /// `case pattern:` arm.
    pub fn case(pattern: Expr, body: Vec<Expr>) -> Self {
        Self::CaseArm {
            pattern: Some(Box::new(pattern)),
            body,
            brk: false,
        }
    }

    /// `default:` arm.
    pub fn default_case(body: Vec<Expr>) -> Self {
        Self::CaseArm {
            pattern: None,
            body,
            brk: false,
        }
    }

    /// End a case arm with `break`. Other nodes are returned unchanged.
    pub fn with_break(mut self) -> Self {
        if let Self::CaseArm { brk, .. } = &mut self {
            *brk = true;
        }
        self
    }

    pub fn ret(value: Expr) -> Self {
        Self::Return(Box::new(value))
    }

    pub fn throw(value: Expr) -> Self {
        Self::Throw(Box::new(value))
    }

    /// Put `@override` above this member.
    pub fn overriding(self) -> Self {
        Self::Annotated {
            annotation: "override".to_string(),
            inner: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_applies_to_signatures() {
        let sig = Expr::signature(None, "Item.fromMap", vec![]).modifier("factory");
        assert!(matches!(
            sig,
            Expr::Signature { ref modifiers, .. } if modifiers == &["factory".to_string()]
        ));
    }

    #[test]
    fn test_modifier_ignores_other_nodes() {
        let ident = Expr::ident("a").modifier("static");
        assert_eq!(ident, Expr::ident("a"));
    }

    #[test]
    fn test_cast_is_parenthesized() {
        let cast = Expr::ident("v").cast("List");
        assert!(matches!(cast, Expr::Paren(_)));
    }

    #[test]
    fn test_helpers_build_equal_trees() {
        let a = Expr::ident("raw").index(Expr::string("a"));
        let b = Expr::Index {
            target: Box::new(Expr::Ident("raw".to_string())),
            index: Box::new(Expr::Str("a".to_string())),
        };
        assert_eq!(a, b);
    }
}
