use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Schema files to validate (.json or .toml)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let catalog = ops::load(&self.paths, &Default::default()).unwrap_or_exit();
        let report = ops::check(&catalog, &self.paths);

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = serde_json::to_string_pretty(&report.diagnostics)
                    .wrap_err("Failed to serialize diagnostics")?;
                println!("{}", json);
            }
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
