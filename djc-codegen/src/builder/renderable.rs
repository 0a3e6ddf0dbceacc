//! Renderable trait for decoupled code generation.
//!
//! AST nodes implement [`Renderable`] to produce a token stream; the
//! formatter takes it from there without knowing anything about the node
//! types.

use super::{Indent, Token, format};

/// Trait for AST nodes that can be rendered to tokens.
pub trait Renderable {
    /// Flatten this node into a token sequence.
    fn to_tokens(&self) -> Vec<Token>;

    /// Render this node to formatted lines.
    fn to_lines(&self, indent: Indent) -> Vec<String> {
        format(&self.to_tokens(), indent)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_tokens(&self) -> Vec<Token> {
        (**self).to_tokens()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_tokens(&self) -> Vec<Token> {
        self.iter().flat_map(Renderable::to_tokens).collect()
    }
}
