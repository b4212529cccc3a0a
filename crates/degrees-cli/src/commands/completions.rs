//! Shell completions command

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::Cli;

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Print a completion script for the `degrees` binary to stdout
pub fn run(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
