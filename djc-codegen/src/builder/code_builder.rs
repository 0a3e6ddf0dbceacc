//! Line-oriented builder for assembling generated files.

use super::Indent;

/// Accumulates already formatted lines into a file body.
///
/// # Example
///
/// ```
/// use dartjsonclass_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::dart();
/// builder
///     .push_line("// generated")
///     .push_blank()
///     .push_lines(["class A {", "  int a;", "}"]);
///
/// assert_eq!(builder.build(), "// generated\n\nclass A {\n  int a;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn dart() -> Self {
        Self::new(Indent::DART)
    }

    /// Add a line at the current indentation. Empty lines stay empty.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.buffer.push_str(&self.indent.at(self.indent_level));
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add several lines, each at the current indentation.
    pub fn push_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::dart()
    }
}
