//! Dart generator: catalog in, files out.

use std::collections::BTreeSet;

use dartjsonclass_codegen::builder::{Indent, Renderable};
use dartjsonclass_schema::{Catalog, CatalogEntry, RecordSpec};
use indexmap::IndexSet;

use crate::{
    class::{ClassOptions, assemble},
    code_file::{CodeFile, GeneratedFile},
    error::Result,
    files::JsonBaseDart,
};

/// Output of a generator run along with the records it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<T> {
    pub output: T,
    /// Names of the generated records in output order. Records skipped
    /// under [`Generator::keep_going`] are not listed.
    pub records: Vec<String>,
}

/// Generates Dart classes for every record in a [`Catalog`].
///
/// A record that fails to generate aborts the run, unless
/// [`keep_going`](Self::keep_going) is set, in which case it is logged and
/// left out. Nothing partial is ever emitted for a failing record.
pub struct Generator<'a> {
    catalog: &'a Catalog,
    options: ClassOptions,
    indent: Indent,
    keep_going: bool,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            options: ClassOptions::default(),
            indent: Indent::DART,
            keep_going: false,
        }
    }

    pub fn with_options(mut self, options: ClassOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Skip failing records instead of aborting.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Formatted lines of the class for `record`.
    pub fn class_lines(&self, record: &RecordSpec) -> Result<Vec<String>> {
        let _span = tracing::debug_span!("class", record = record.name()).entered();
        let class = assemble(record, &self.options)?;
        let lines = class.to_lines(self.indent);
        tracing::debug!(
            "generated {} ({} fields, {} lines)",
            record.name(),
            record.fields().len(),
            lines.len()
        );
        Ok(lines)
    }

    fn add_classes<'r>(
        &self,
        mut file: CodeFile,
        records: impl IntoIterator<Item = &'r RecordSpec>,
        generated: &mut Vec<String>,
    ) -> Result<CodeFile> {
        for record in records {
            match self.class_lines(record) {
                Ok(lines) => {
                    file = file.class(lines);
                    generated.push(record.name().to_string());
                }
                Err(err) if self.keep_going => {
                    tracing::warn!("skipping {}: {}", record.name(), err);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(file)
    }

    /// Every record in input order, as the content of one file.
    pub fn single_file(&self) -> Result<Generated<String>> {
        let mut records = Vec::new();
        let file = self.add_classes(CodeFile::new(), self.catalog.records(), &mut records)?;
        Ok(Generated {
            output: file.render(),
            records,
        })
    }

    /// One `<module>.dart` per input module, then `jsonbase.dart`.
    ///
    /// Modules come in input order and their classes are sorted by name.
    /// Each module imports the modules defining the records it references.
    pub fn modules(&self) -> Result<Generated<Vec<GeneratedFile>>> {
        let mut files = Vec::new();
        let mut generated = Vec::new();
        for module in self.module_names() {
            let mut records: Vec<&RecordSpec> = self
                .entries_of(module)
                .map(|entry| &entry.record)
                .collect();
            records.sort_by(|a, b| a.name().cmp(b.name()));

            let file = CodeFile::new().imports(self.imports_for(module));
            let file = self.add_classes(file, records, &mut generated)?;
            tracing::info!("module {}.dart", module);
            files.push(GeneratedFile {
                path: format!("{}.dart", module),
                content: file.render(),
            });
        }
        files.push(JsonBaseDart.file());
        Ok(Generated {
            output: files,
            records: generated,
        })
    }

    /// Module names in order of first appearance.
    pub fn module_names(&self) -> IndexSet<&'a str> {
        self.catalog
            .entries()
            .map(|entry| entry.module.as_str())
            .collect()
    }

    fn entries_of<'m>(&'m self, module: &'m str) -> impl Iterator<Item = &'a CatalogEntry> + 'm {
        self.catalog
            .entries()
            .filter(move |entry| entry.module == module)
    }

    /// Relative imports `module` needs, sorted and deduplicated.
    ///
    /// References to records outside the catalog produce no import.
    pub fn imports_for(&self, module: &str) -> Vec<String> {
        let mut imports = BTreeSet::new();
        for entry in self.entries_of(module) {
            for name in entry.record.referenced_records() {
                if let Some(target) = self.catalog.get(name)
                    && target.module != module
                {
                    imports.insert(format!("./{}.dart", target.module));
                }
            }
        }
        imports.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use dartjsonclass_schema::{RecordFilter, SchemaFile, SchemaFormat};

    use super::*;
    use crate::CodegenError;

    fn catalog(files: &[(&str, &str)]) -> Catalog {
        let mut catalog = Catalog::new();
        for (path, json) in files {
            let file = SchemaFile::parse(json, SchemaFormat::Json, path).unwrap();
            catalog.add_file(file, &RecordFilter::new()).unwrap();
        }
        catalog
    }

    #[test]
    fn test_single_file_in_input_order() {
        let catalog = catalog(&[(
            "models.json",
            r#"{"Wrapper": {"fields": ["List<Item>? items"]}, "Item": {"fields": ["int a"]}}"#,
        )]);
        let content = Generator::new(&catalog).single_file().unwrap().output;

        let wrapper = content.find("class Wrapper").unwrap();
        let item = content.find("class Item").unwrap();
        assert!(wrapper < item);
        assert!(content.starts_with("// generated by dartjsonclass\n"));
    }

    #[test]
    fn test_failure_aborts_by_default() {
        let catalog = catalog(&[(
            "models.json",
            r#"{"Bad": {"fields": ["Set<int> s"]}, "Item": {"fields": ["int a"]}}"#,
        )]);
        let err = Generator::new(&catalog).single_file().unwrap_err();
        assert!(matches!(err, CodegenError::UnknownContainer { .. }));
    }

    #[test]
    fn test_keep_going_skips_failing_record() {
        let catalog = catalog(&[(
            "models.json",
            r#"{"Bad": {"fields": ["Set<int> s"]}, "Item": {"fields": ["int a"]}}"#,
        )]);
        let generated = Generator::new(&catalog)
            .keep_going(true)
            .single_file()
            .unwrap();
        assert!(!generated.output.contains("Bad"));
        assert!(generated.output.contains("class Item implements JsonBase {"));
        assert_eq!(generated.records, vec!["Item"]);
    }

    #[test]
    fn test_modules_and_imports() {
        let catalog = catalog(&[
            (
                "dir/wrappers.json",
                r#"{"Wrapper": {"fields": ["List<Item>? items", "Zed z", "Box box"]}, "Box": {"fields": ["Item item"]}}"#,
            ),
            ("items.json", r#"{"Item": {"fields": ["int a"]}}"#),
        ]);
        let generator = Generator::new(&catalog);

        assert!(generator.module_names().iter().eq(&["wrappers", "items"]));
        assert_eq!(generator.imports_for("wrappers"), vec!["./items.dart"]);
        assert!(generator.imports_for("items").is_empty());

        let generated = generator.modules().unwrap();
        assert_eq!(generated.records, vec!["Box", "Wrapper", "Item"]);
        let files = generated.output;
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["wrappers.dart", "items.dart", "jsonbase.dart"]);

        let wrappers = &files[0].content;
        assert!(wrappers.contains("import './items.dart';\n"));
        let box_pos = wrappers.find("class Box").unwrap();
        let wrapper_pos = wrappers.find("class Wrapper").unwrap();
        assert!(box_pos < wrapper_pos);
    }

    #[test]
    fn test_indent_is_configurable() {
        let catalog = catalog(&[("m.json", r#"{"Item": {"fields": ["int a"]}}"#)]);
        let lines = Generator::new(&catalog)
            .with_indent(Indent::Spaces(4))
            .class_lines(catalog.records().next().unwrap())
            .unwrap();
        assert_eq!(lines[1], "    int a;");
    }
}
