//! Token stream formatter.
//!
//! Turns the flat token sequence produced by an AST renderer into indented
//! lines. Formatting is a pure function of its input: the only state is the
//! indent depth, local to one call.

use super::{Indent, Token};

/// Format `tokens` into lines using `indent` for each depth level.
pub fn format(tokens: &[Token], indent: Indent) -> Vec<String> {
    let tokens = coalesce_dedents(strip_suppressed(tokens));
    let unit = indent.unit();

    let mut depth: usize = 0;
    let mut lines = Vec::new();
    for line in split_lines(&tokens) {
        match line.opener {
            Some(Token::Indent) => depth += 1,
            Some(Token::Dedent) => depth = depth.saturating_sub(1),
            _ => {}
        }

        let text = render_line(line.body);
        if !text.is_empty() {
            lines.push(format!("{}{}", unit.repeat(depth), text));
        } else if matches!(line.opener, Some(Token::EndLine)) {
            lines.push(String::new());
        }
        // an indent or dedent with nothing after it only moves the depth
    }
    lines
}

/// Drop every `NoStatementEnd` together with the `StatementEnd` it guards.
fn strip_suppressed(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut suppress = false;
    for token in tokens {
        match token {
            Token::NoStatementEnd => suppress = true,
            Token::StatementEnd if suppress => suppress = false,
            Token::NoSpaceBefore => out.push(Token::NoSpaceBefore),
            other => {
                suppress = false;
                out.push(other.clone());
            }
        }
    }
    out
}

/// Collapse `EndLine, Dedent` into `Dedent` so no blank line precedes a
/// closing brace.
fn coalesce_dedents(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token == Token::Dedent && out.last() == Some(&Token::EndLine) {
            out.pop();
        }
        out.push(token);
    }
    out
}

struct Line<'a> {
    opener: Option<&'a Token>,
    body: &'a [Token],
}

fn split_lines(tokens: &[Token]) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut opener = None;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        if token.starts_line() {
            lines.push(Line {
                opener,
                body: &tokens[start..i],
            });
            opener = Some(token);
            start = i + 1;
        }
    }
    lines.push(Line {
        opener,
        body: &tokens[start..],
    });
    lines
}

fn render_line(body: &[Token]) -> String {
    let mut out = String::new();
    let mut glue = true;
    for token in body {
        match token {
            Token::Text(text) if text.is_empty() => {}
            Token::Text(text) => {
                if !glue {
                    out.push(' ');
                }
                out.push_str(text);
                glue = false;
            }
            Token::NoSpaceBefore => glue = true,
            Token::StatementEnd => {
                out.push(';');
                glue = false;
            }
            // line markers never appear inside a line body
            Token::NoStatementEnd | Token::EndLine | Token::Indent | Token::Dedent => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Token {
        Token::text(s)
    }

    #[test]
    fn test_spacing() {
        let tokens = vec![
            t("func"),
            Token::NoSpaceBefore,
            t("("),
            Token::NoSpaceBefore,
            t("1"),
            Token::NoSpaceBefore,
            t(","),
            t("2"),
            Token::NoSpaceBefore,
            t(")"),
        ];
        assert_eq!(format(&tokens, Indent::DART), vec!["func(1, 2)"]);
    }

    #[test]
    fn test_statement_end_glues() {
        let tokens = vec![t("return"), t("a"), Token::StatementEnd];
        assert_eq!(format(&tokens, Indent::DART), vec!["return a;"]);
    }

    #[test]
    fn test_indentation() {
        let tokens = vec![
            t("class"),
            t("A"),
            t("{"),
            Token::Indent,
            t("int"),
            t("a"),
            Token::StatementEnd,
            Token::EndLine,
            t("int"),
            t("b"),
            Token::StatementEnd,
            Token::Dedent,
            t("}"),
        ];
        assert_eq!(
            format(&tokens, Indent::DART),
            vec!["class A {", "  int a;", "  int b;", "}"]
        );
        assert_eq!(
            format(&tokens, Indent::Spaces(4)),
            vec!["class A {", "    int a;", "    int b;", "}"]
        );
    }

    #[test]
    fn test_endline_dedent_collapses() {
        let tokens = vec![
            t("{"),
            Token::Indent,
            t("a"),
            Token::StatementEnd,
            Token::EndLine,
            Token::Dedent,
            t("}"),
        ];
        assert_eq!(format(&tokens, Indent::DART), vec!["{", "  a;", "}"]);
    }

    #[test]
    fn test_blank_line_from_double_endline() {
        let tokens = vec![t("a"), Token::EndLine, Token::EndLine, t("b")];
        assert_eq!(format(&tokens, Indent::DART), vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_dedent_only_moves_depth() {
        let tokens = vec![
            t("a"),
            Token::Indent,
            t("b"),
            Token::Indent,
            t("c"),
            Token::Dedent,
            Token::Dedent,
            t("d"),
        ];
        assert_eq!(format(&tokens, Indent::DART), vec!["a", "  b", "    c", "d"]);
    }

    #[test]
    fn test_no_statement_end_suppresses_terminator() {
        let tokens = vec![
            t("}"),
            Token::NoStatementEnd,
            Token::NoSpaceBefore,
            Token::StatementEnd,
            Token::EndLine,
            t("x"),
            Token::StatementEnd,
        ];
        assert_eq!(format(&tokens, Indent::DART), vec!["}", "x;"]);
    }

    #[test]
    fn test_no_statement_end_without_terminator() {
        let tokens = vec![t("}"), Token::NoStatementEnd, Token::EndLine, t("x"), Token::StatementEnd];
        assert_eq!(format(&tokens, Indent::DART), vec!["}", "x;"]);
    }

    #[test]
    fn test_dedent_saturates() {
        let tokens = vec![Token::Dedent, t("a")];
        assert_eq!(format(&tokens, Indent::DART), vec!["a"]);
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let tokens = vec![t("a"), t(""), t("b")];
        assert_eq!(format(&tokens, Indent::DART), vec!["a b"]);
    }

    #[test]
    fn test_format_is_idempotent() {
        let tokens = vec![
            t("f"),
            Token::NoSpaceBefore,
            t("("),
            Token::NoSpaceBefore,
            t(")"),
            t("{"),
            Token::Indent,
            t("x"),
            Token::StatementEnd,
            Token::EndLine,
            Token::Dedent,
            t("}"),
            Token::NoStatementEnd,
        ];
        let first = format(&tokens, Indent::DART);
        let second = format(&tokens, Indent::DART);
        assert_eq!(first, second);
        assert_eq!(first, vec!["f() {", "  x;", "}"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(format(&[], Indent::DART).is_empty());
    }
}
