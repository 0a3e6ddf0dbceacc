//! Token vocabulary shared by AST renderers and the formatter.

use std::fmt;

/// A unit of rendered output: printable text or a layout marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Printable text, separated from neighbouring text by one space.
    Text(String),
    /// Suppress the space before the next text token.
    NoSpaceBefore,
    /// Statement terminator, rendered as `;` glued to the previous text.
    StatementEnd,
    /// Suppress the next [`Token::StatementEnd`] (e.g. after a closing brace).
    NoStatementEnd,
    /// Start a new line at the current depth.
    EndLine,
    /// Start a new line one level deeper.
    Indent,
    /// Start a new line one level shallower.
    Dedent,
}

impl Token {
    /// Create a text token.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// True for markers that begin a new output line.
    pub fn starts_line(&self) -> bool {
        matches!(self, Self::EndLine | Self::Indent | Self::Dedent)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(s) => write!(f, "{}", s),
            Token::NoSpaceBefore => write!(f, "<nosp>"),
            Token::StatementEnd => write!(f, ";"),
            Token::NoStatementEnd => write!(f, "<nostmt>"),
            Token::EndLine => write!(f, "<endl>"),
            Token::Indent => write!(f, "<indent>"),
            Token::Dedent => write!(f, "<dedent>"),
        }
    }
}

/// Join token groups with `delim`, appending `last` after the final group.
///
/// Like `str::join`, but over token sequences:
///
/// ```
/// use dartjsonclass_codegen::builder::{Token, join};
///
/// let items = vec![vec![Token::text("a")], vec![Token::text("b")]];
/// let joined = join(items, &[Token::NoSpaceBefore, Token::text(",")], &[]);
/// assert_eq!(joined.len(), 4);
/// ```
pub fn join<I>(groups: I, delim: &[Token], last: &[Token]) -> Vec<Token>
where
    I: IntoIterator<Item = Vec<Token>>,
{
    let mut out = Vec::new();
    let mut groups = groups.into_iter().peekable();
    while let Some(group) = groups.next() {
        out.extend(group);
        if groups.peek().is_some() {
            out.extend_from_slice(delim);
        } else {
            out.extend_from_slice(last);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(names: &[&str]) -> Vec<Vec<Token>> {
        names.iter().map(|n| vec![Token::from(*n)]).collect()
    }

    #[test]
    fn test_join_empty() {
        assert!(join(Vec::new(), &[Token::from(",")], &[]).is_empty());
    }

    #[test]
    fn test_join_single() {
        assert_eq!(join(texts(&["x"]), &[Token::from(",")], &[]), vec![Token::from("x")]);
    }

    #[test]
    fn test_join_with_final() {
        let joined = join(texts(&["a", "b"]), &[Token::from(".")], &[Token::StatementEnd]);
        assert_eq!(
            joined,
            vec![
                Token::from("a"),
                Token::from("."),
                Token::from("b"),
                Token::StatementEnd
            ]
        );
    }

    #[test]
    fn test_starts_line() {
        assert!(Token::Indent.starts_line());
        assert!(Token::EndLine.starts_line());
        assert!(!Token::NoSpaceBefore.starts_line());
        assert!(!Token::text("x").starts_line());
    }
}
