//! Structured Dart file assembly.

use dartjsonclass_codegen::builder::CodeBuilder;

/// First line of every generated file.
pub const HEADER: &str = "// generated by dartjsonclass";

/// A generated file, path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// A Dart source file: the preamble, then formatted classes.
///
/// Every file imports `dart:convert` (for `jsonDecode`) and the
/// `jsonbase.dart` support file; further imports follow in the order added.
///
/// ```
/// use dartjsonclass_codegen_dart::CodeFile;
///
/// let content = CodeFile::new()
///     .import("./other.dart")
///     .class(vec!["class A {}".to_string()])
///     .render();
///
/// assert!(content.starts_with("// generated by dartjsonclass\n"));
/// assert!(content.contains("import './other.dart';\n"));
/// assert!(content.ends_with("class A {}\n\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeFile {
    imports: Vec<String>,
    classes: Vec<Vec<String>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import by URI, e.g. `./other.dart`.
    pub fn import(mut self, uri: impl Into<String>) -> Self {
        self.imports.push(uri.into());
        self
    }

    pub fn imports(mut self, uris: impl IntoIterator<Item = String>) -> Self {
        self.imports.extend(uris);
        self
    }

    /// Add the formatted lines of one class.
    pub fn class(mut self, lines: Vec<String>) -> Self {
        self.classes.push(lines);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::dart();
        builder.push_line(HEADER);
        for uri in ["dart:convert", "./jsonbase.dart"]
            .into_iter()
            .chain(self.imports.iter().map(String::as_str))
        {
            builder.push_line(&format!("import '{}';", uri));
        }
        builder.push_blank();

        for class in &self.classes {
            builder.push_lines(class).push_blank();
        }
        builder.build()
    }
}
