//! # Stencil CLI
//!
//! Command-line template manager: capture files or directories as named
//! templates and clone them back out on demand.
//!
//! `main` wires the layers together in order: environment, argument
//! parsing, tracing, configuration, output manager, then the command
//! dispatch in [`run`].  Failures after dispatch funnel through
//! [`handle_error`], which owns the message rendering and the exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                    |
//! |------|----------------------------|
//! |  0   | Success                    |
//! |  1   | Operation / system failure |
//! |  2   | User / input error         |
//! |  4   | Configuration error        |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env is a development convenience; absence is the normal case.
    let _ = dotenvy::dotenv();

    // Under try_parse, --help and --version surface as Err too.  clap's
    // print() already routes them to stdout and real parse failures to
    // stderr; use_stderr() tells the two apart for the exit code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // Losing the subscriber costs diagnostics only, so keep going.
    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("Warning: failed to initialise logging: {e}");
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "starting up"
    );

    // `init` writes the config file, so a config path that does not load
    // yet must not stop it.  Every other command needs the file it was
    // pointed at.
    let config = if matches!(cli.command, Commands::Init(_)) {
        AppConfig::load_or_default(cli.global.config.as_ref())
    } else {
        match AppConfig::load(cli.global.config.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                // Config problems never reach handle_error: nothing is
                // running yet and the catalog of suggestions does not apply.
                tracing::error!("cannot load configuration: {e:#}");
                return ExitCode::from(4);
            }
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    // cli is consumed by run, so lift the verbosity flag out first.
    let verbose = cli.global.verbose > 0;
    match run(cli, config, output) {
        Ok(()) => {
            info!("stencil completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Route the parsed command to its handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Create(args) => commands::create::execute(args, cli.global, config, output),
        Commands::Clone(args) => commands::clone::execute(args, cli.global, config, output),
        Commands::Delete(args) => commands::delete::execute(args, cli.global, config, output),
        Commands::List(args) => commands::list::execute(args, cli.global, config, output),
        Commands::Init(args) => commands::init::execute(args, cli.global, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Log the failure, render it for the user, and pick the exit code.
///
/// Everything goes to stderr so redirected stdout stays clean.  Colour
/// tracks whether stderr is a terminal, the same test logging.rs uses.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let rendered = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{rendered}");

    ExitCode::from(err.exit_code())
}
