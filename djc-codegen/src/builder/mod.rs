//! Code generation building blocks.
//!
//! - [`Token`] - Rendering vocabulary: text plus layout markers
//! - [`format`] - Token stream to indented lines
//! - [`Renderable`] - Trait for AST nodes that render to tokens
//! - [`CodeBuilder`] - Line-oriented file assembly
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod format;
mod indent;
mod renderable;
mod token;

pub use code_builder::CodeBuilder;
pub use format::format;
pub use indent::Indent;
pub use renderable::Renderable;
pub use token::{Token, join};
