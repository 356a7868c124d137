//! Flags shared by every subcommand.
//!
//! Flattened into the top-level parser with `global = true` on each arg, so
//! `stencil list -v` and `stencil -v list` both work.  Help text comes from
//! the doc comments.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity (-v, -vv, -vvv)
    ///
    /// By default only warnings and errors are logged.  Each repetition
    /// lowers the threshold: `-v` for progress messages, `-vv` for debug
    /// diagnostics, `-vvv` for trace output.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Suppress non-error output
    ///
    /// Status lines and warnings are dropped; errors still print.  Cannot
    /// be combined with `--verbose`.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Also triggered by the `NO_COLOR` environment variable
    /// (<https://no-color.org>) or by piping stdout.
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Configuration file path
    ///
    /// Defaults to the platform configuration directory; `STENCIL_CONFIG`
    /// overrides that, and this flag overrides both.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "STENCIL_CONFIG",
        value_name = "FILE"
    )]
    pub config: Option<PathBuf>,

    /// Template store directory
    ///
    /// Where captured templates live.  Precedence: this flag, then
    /// `STENCIL_STORE`, then the `store.dir` config key, then the platform
    /// data directory.
    #[arg(
        short = 's',
        long = "store",
        global = true,
        env = "STENCIL_STORE",
        value_name = "DIR"
    )]
    pub store: Option<PathBuf>,
}
