//! Implementation of the `stencil completions` command.

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};

/// Write a completion script for the requested shell to stdout.
///
/// `clap_complete::Shell` is both the `ValueEnum` users pick from and
/// the generator handed to `generate`.
pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "stencil", &mut std::io::stdout());
    Ok(())
}
