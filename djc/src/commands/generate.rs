use std::path::PathBuf;

use clap::Args;
use dartjsonclass_codegen::builder::Indent;
use dartjsonclass_codegen_dart::ClassOptions;
use dartjsonclass_schema::RecordFilter;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, Target},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Schema files to process (.json or .toml)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Destination file, or directory with --mods ("-" for stdout)
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,

    /// Treat --output as a directory and write one Dart file per input file
    #[arg(long)]
    pub mods: bool,

    /// Omit the fields list and getAttr/setAttr
    #[arg(long, visible_alias = "no-meta")]
    pub no_accessors: bool,

    /// Omit operator ==, hashCode and copy
    #[arg(long, visible_alias = "no-data")]
    pub no_value_semantics: bool,

    /// Omit JSON and map methods (not supported)
    #[arg(long)]
    pub no_ser: bool,

    /// Records to generate (all when not given)
    #[arg(long, num_args = 1..)]
    pub include: Vec<String>,

    /// Records to leave out
    #[arg(long, num_args = 1..)]
    pub exclude: Vec<String>,

    /// Skip records that fail to generate instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Spaces per indent level, 0 for tabs
    #[arg(long, default_value_t = 2)]
    pub indent: u8,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let options = self.options()?;
        let catalog = ops::load(&self.paths, &self.filter()).unwrap_or_exit();

        let report = ops::generate(&catalog, &options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn filter(&self) -> RecordFilter {
        RecordFilter {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        }
    }

    fn options(&self) -> Result<GenerateOptions> {
        if self.no_ser {
            eyre::bail!("serialization methods cannot be omitted; drop --no-ser");
        }

        let mut class = ClassOptions::default();
        if self.no_accessors {
            class = class.without_accessors();
        }
        if self.no_value_semantics {
            class = class.without_value_semantics();
        }

        let stdout = self.output.as_os_str() == "-";
        let target = match (self.mods, stdout) {
            (true, true) => eyre::bail!("--mods needs an output directory, not stdout"),
            (true, false) => Target::Modules(self.output.clone()),
            (false, true) => Target::Stdout,
            (false, false) => Target::File(self.output.clone()),
        };

        Ok(GenerateOptions {
            class,
            indent: match self.indent {
                0 => Indent::Tab,
                n => Indent::Spaces(n),
            },
            keep_going: self.keep_going,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        cmd: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        let mut argv = vec!["djc"];
        argv.extend_from_slice(args);
        Wrapper::try_parse_from(argv).unwrap().cmd
    }

    #[test]
    fn test_defaults_to_stdout() {
        let options = parse(&["a.json"]).options().unwrap();
        assert_eq!(options.target, Target::Stdout);
        assert_eq!(options.indent, Indent::DART);
        assert_eq!(options.class, ClassOptions::default());
    }

    #[test]
    fn test_no_ser_is_rejected() {
        assert!(parse(&["a.json", "--no-ser"]).options().is_err());
    }

    #[test]
    fn test_mods_require_directory() {
        assert!(parse(&["a.json", "--mods"]).options().is_err());
        let options = parse(&["a.json", "--mods", "-o", "out"]).options().unwrap();
        assert_eq!(options.target, Target::Modules(PathBuf::from("out")));
    }

    #[test]
    fn test_tab_indent() {
        let options = parse(&["a.json", "--indent", "0"]).options().unwrap();
        assert_eq!(options.indent, Indent::Tab);
    }

    #[test]
    fn test_filter() {
        let cmd = parse(&["a.json", "--include", "A", "B", "--exclude", "B"]);
        let filter = cmd.filter();
        assert!(filter.allows("A"));
        assert!(!filter.allows("B"));
    }
}
