use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to print the completion script for (bash, zsh, fish, ...)
    shell: Shell,
}

impl CompletionsCommand {
    /// Print the completion script for `djc` to stdout
    pub fn run(&self) -> Result<()> {
        write_completions(self.shell, &mut io::stdout());
        Ok(())
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin, out);
}
