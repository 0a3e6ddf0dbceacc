//! Generate operation - catalog to Dart files.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use dartjsonclass_codegen::builder::Indent;
use dartjsonclass_codegen_dart::{ClassOptions, Generator};
use dartjsonclass_schema::Catalog;
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Where generated code goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    /// Every class in one file.
    File(PathBuf),
    /// One file per input module, plus `jsonbase.dart`, in a directory.
    Modules(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub class: ClassOptions,
    pub indent: Indent,
    pub keep_going: bool,
    pub target: Target,
}

/// Execute the generate operation.
pub fn generate(catalog: &Catalog, options: &GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(catalog)
        .with_options(options.class)
        .with_indent(options.indent)
        .keep_going(options.keep_going);

    let mut written = Vec::new();
    let records = match &options.target {
        Target::Stdout => {
            let generated = generator
                .single_file()
                .wrap_err("Failed to generate code")?;
            std::io::stdout()
                .write_all(generated.output.as_bytes())
                .wrap_err("Failed to write to stdout")?;
            generated.records
        }
        Target::File(path) => {
            let generated = generator
                .single_file()
                .wrap_err("Failed to generate code")?;
            write_file(path, &generated.output)?;
            written.push(path.clone());
            generated.records
        }
        Target::Modules(dir) => {
            if dir.exists() && !dir.is_dir() {
                eyre::bail!("output {} isn't a directory", dir.display());
            }
            let generated = generator.modules().wrap_err("Failed to generate code")?;
            for file in generated.output {
                let path = dir.join(&file.path);
                write_file(&path, &file.content)?;
                written.push(path);
            }
            generated.records
        }
    };

    let skipped = catalog.len() - records.len();
    if skipped > 0 {
        tracing::warn!("{} of {} records skipped", skipped, catalog.len());
    }

    Ok(GenerateReport {
        records: records.len(),
        skipped,
        written,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    tracing::info!("writing {}", path.display());
    fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))
}
