//! Argument grammar for the `stencil` binary, clap derive style.
//!
//! Everything about flags, aliases, help text, and value enums is declared
//! here and nowhere else; the command handlers receive parsed structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── parser ────────────────────────────────────────────────────────────────────

/// Top-level parser.
#[derive(Debug, Parser)]
#[command(
    name = "stencil",
    bin_name = "stencil",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "\u{1f4d0} Capture and clone filesystem templates",
    long_about = "Stencil saves a file or directory as a named template and \
                  clones it back out wherever a fresh copy is needed.",
    after_help = "EXAMPLES:\n\
        \x20 stencil create -n rust-svc -p ./my-service\n\
        \x20 stencil clone  -t rust-svc -n new-service\n\
        \x20 stencil list svc\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
    arg_required_else_help = true,
    subcommand_required = true,
)]
pub struct Cli {
    /// Shared flags, flattened into every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The selected operation.
    #[command(subcommand)]
    pub command: Commands,
}

// ── operations ────────────────────────────────────────────────────────────────

/// Every operation stencil can run.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a template from a file or directory.
    #[command(
        visible_alias = "c",
        about = "Create a new template",
        after_help = "EXAMPLES:\n\
            \x20 stencil create -n rust-svc -p ./my-service\n\
            \x20 stencil create -n notes -p ~/notes.txt\n\
            \x20 stencil create -n rust-svc -p ./my-service --force"
    )]
    Create(CreateArgs),

    /// Clone a stored template to a destination.
    #[command(
        about = "Clone a template",
        after_help = "EXAMPLES:\n\
            \x20 stencil clone -t rust-svc -n new-service\n\
            \x20 stencil clone -t rust-svc -n new-service -p ~/projects\n\
            \x20 stencil clone -t rust-svc          # clones as `Untitled`"
    )]
    Clone(CloneArgs),

    /// Delete a stored template.
    #[command(
        visible_alias = "rm",
        about = "Delete a template",
        after_help = "EXAMPLES:\n\
            \x20 stencil delete -t rust-svc"
    )]
    Delete(DeleteArgs),

    /// List stored templates.
    #[command(
        visible_alias = "ls",
        about = "List templates",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list svc\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    /// Initialise a stencil configuration file.
    #[command(
        about = "Write a starter configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init           # default location\n\
            \x20 stencil init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Print a completion script for a shell.
    #[command(
        about = "Emit a shell completion script",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `stencil create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Name to save the template as.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "The name to save the template as"
    )]
    pub name: String,

    /// Source to capture.  A file is stored under its own basename inside
    /// the template; a directory is stored as-is.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "PATH",
        default_value = ".",
        help = "The file or directory to create the template from"
    )]
    pub path: PathBuf,

    /// Overwrite a template if one exists.
    #[arg(
        short = 'f',
        long = "force",
        help = "Overwrite a template if one exists"
    )]
    pub force: bool,
}

// ── clone ─────────────────────────────────────────────────────────────────────

/// Arguments for `stencil clone`.
#[derive(Debug, Args)]
pub struct CloneArgs {
    /// Template to clone.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "The name of the template to clone"
    )]
    pub template: String,

    /// Name of the new copy.  Falls back to the configured clone name.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "The name of the new directory"
    )]
    pub name: Option<String>,

    /// Directory to clone into.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "The path to clone the template to"
    )]
    pub path: PathBuf,
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `stencil delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Template to delete.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "The name of the template to delete"
    )]
    pub template: String,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only templates whose name contains this substring.
    #[arg(value_name = "FILTER", help = "Substring to filter template names by")]
    pub filter: Option<String>,

    /// Listing format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "plain",
        help = "Listing format"
    )]
    pub format: ListFormat,
}

/// How `list` renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One bare name per line.
    Plain,
    /// JSON array of names.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Replace the config file if one is already there.
    #[arg(
        short = 'f',
        long = "force",
        help = "Replace an existing configuration file"
    )]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell dialect to emit.
    #[arg(value_enum, help = "Shell to emit a completion script for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────
