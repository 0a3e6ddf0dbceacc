//! Token rendering for [`Expr`].

use dartjsonclass_codegen::builder::{Renderable, Token, join};

use super::Expr;

fn text(s: impl Into<String>) -> Token {
    Token::text(s)
}

fn comma_list<'a>(items: impl IntoIterator<Item = &'a Expr>) -> Vec<Token> {
    join(
        items.into_iter().map(Renderable::to_tokens),
        &[Token::NoSpaceBefore, text(",")],
        &[],
    )
}

/// `open items close` with no padding inside the brackets.
fn bracketed(open: &str, inner: Vec<Token>, close: &str) -> Vec<Token> {
    let mut out = vec![text(open), Token::NoSpaceBefore];
    out.extend(inner);
    out.push(Token::NoSpaceBefore);
    out.push(text(close));
    out
}

fn block(mut header: Vec<Token>, body: &[Expr]) -> Vec<Token> {
    if body.is_empty() {
        header.push(text("{}"));
    } else {
        header.push(text("{"));
        header.push(Token::Indent);
        header.extend(statements(body));
        header.push(Token::Dedent);
        header.push(text("}"));
    }
    header.push(Token::NoStatementEnd);
    header
}

fn statements(body: &[Expr]) -> Vec<Token> {
    join(
        body.iter().map(Renderable::to_tokens),
        &[Token::StatementEnd, Token::EndLine],
        &[Token::StatementEnd],
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' | '$' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

impl Renderable for Expr {
    fn to_tokens(&self) -> Vec<Token> {
        match self {
            Expr::Ident(name) => vec![text(name.as_str())],
            Expr::Str(value) => vec![text(escape(value))],
            Expr::Call {
                callee,
                type_args,
                args,
            } => {
                let mut out = callee.to_tokens();
                if !type_args.is_empty() {
                    out.push(Token::NoSpaceBefore);
                    out.push(text(format!("<{}>", type_args.join(", "))));
                }
                out.push(Token::NoSpaceBefore);
                out.extend(bracketed("(", comma_list(args), ")"));
                out
            }
            Expr::Index { target, index } => {
                let mut out = target.to_tokens();
                out.push(Token::NoSpaceBefore);
                out.extend(bracketed("[", index.to_tokens(), "]"));
                out
            }
            Expr::Member {
                target,
                name,
                null_safe,
            } => {
                let mut out = target.to_tokens();
                out.extend([
                    Token::NoSpaceBefore,
                    text(if *null_safe { "?." } else { "." }),
                    Token::NoSpaceBefore,
                    text(name.as_str()),
                ]);
                out
            }
            Expr::Bang(inner) => {
                let mut out = inner.to_tokens();
                out.extend([Token::NoSpaceBefore, text("!")]);
                out
            }
            Expr::Binary { op, lhs, rhs } => {
                let mut out = lhs.to_tokens();
                out.push(text(op.as_str()));
                out.extend(rhs.to_tokens());
                out
            }
            Expr::Ternary {
                cond,
                then,
                otherwise,
            } => {
                let mut out = cond.to_tokens();
                out.push(text("?"));
                out.extend(then.to_tokens());
                out.push(text(":"));
                out.extend(otherwise.to_tokens());
                out
            }
            Expr::Paren(inner) => bracketed("(", inner.to_tokens(), ")"),
            Expr::ListLit { elem_type, items } => {
                let mut out = Vec::new();
                if let Some(ty) = elem_type {
                    out.extend([text(format!("<{}>", ty)), Token::NoSpaceBefore]);
                }
                out.extend(bracketed("[", comma_list(items), "]"));
                out
            }
            Expr::MapLit { types, entries } => {
                let mut out = Vec::new();
                if let Some((key, value)) = types {
                    out.extend([text(format!("<{}, {}>", key, value)), Token::NoSpaceBefore]);
                }
                out.extend(bracketed("{", comma_list(entries), "}"));
                out
            }
            Expr::Entry { key, value } => {
                let mut out = key.to_tokens();
                out.extend([Token::NoSpaceBefore, text(":")]);
                out.extend(value.to_tokens());
                out
            }
            Expr::Spread(inner) => {
                let mut out = vec![text("..."), Token::NoSpaceBefore];
                out.extend(inner.to_tokens());
                out
            }
            Expr::Lambda { params, body } => {
                let params = join(
                    params.iter().map(|p| vec![text(p.as_str())]),
                    &[Token::NoSpaceBefore, text(",")],
                    &[],
                );
                let mut out = bracketed("(", params, ")");
                out.push(text("=>"));
                out.extend(body.to_tokens());
                out
            }
            Expr::Signature {
                modifiers,
                ret,
                name,
                params,
            } => {
                let mut out: Vec<Token> = modifiers.iter().map(|m| text(m.as_str())).collect();
                if let Some(ret) = ret {
                    out.push(text(ret.as_str()));
                }
                if params.is_none() {
                    out.push(text("get"));
                }
                out.push(text(name.as_str()));
                if let Some(params) = params {
                    out.push(Token::NoSpaceBefore);
                    out.extend(bracketed("(", comma_list(params), ")"));
                }
                out
            }
            Expr::Arrow { sig, body } => {
                let mut out = sig.to_tokens();
                out.push(text("=>"));
                out.extend(body.to_tokens());
                out
            }
            Expr::Block { header, body } => block(header.to_tokens(), body),
            Expr::ClassHeader {
                name,
                extends,
                implements,
            } => {
                let mut out = vec![text("class"), text(name.as_str())];
                if let Some(base) = extends {
                    out.extend([text("extends"), text(base.as_str())]);
                }
                if !implements.is_empty() {
                    out.push(text("implements"));
                    out.extend(join(
                        implements.iter().map(|i| vec![text(i.as_str())]),
                        &[Token::NoSpaceBefore, text(",")],
                        &[],
                    ));
                }
                out
            }
            Expr::Field {
                modifiers,
                ty,
                name,
                init,
            } => {
                let mut out: Vec<Token> = modifiers.iter().map(|m| text(m.as_str())).collect();
                out.extend([text(ty.as_str()), text(name.as_str())]);
                if let Some(init) = init {
                    out.push(text("="));
                    out.extend(init.to_tokens());
                }
                out
            }
            Expr::Switch { subject, arms } => {
                let mut header = vec![text("switch")];
                header.extend(bracketed("(", subject.to_tokens(), ")"));
                block(header, arms)
            }
            Expr::CaseArm { pattern, body, brk } => {
                let mut out = match pattern {
                    Some(pattern) => {
                        let mut out = vec![text("case")];
                        out.extend(pattern.to_tokens());
                        out
                    }
                    None => vec![text("default")],
                };
                out.extend([Token::NoSpaceBefore, text(":"), Token::Indent]);
                out.extend(statements(body));
                if *brk {
                    if !body.is_empty() {
                        out.push(Token::EndLine);
                    }
                    out.extend([text("break"), Token::StatementEnd]);
                }
                out.extend([Token::Dedent, Token::NoStatementEnd]);
                out
            }
            Expr::Return(value) => {
                let mut out = vec![text("return")];
                out.extend(value.to_tokens());
                out
            }
            Expr::Throw(value) => {
                let mut out = vec![text("throw")];
                out.extend(value.to_tokens());
                out
            }
            Expr::Annotated { annotation, inner } => {
                let mut out = vec![text(format!("@{}", annotation)), Token::EndLine];
                out.extend(inner.to_tokens());
                out
            }
        }
    }
}
