//! Wires up the tracing subscriber.
//!
//! Only the binary calls [`init_logging`]; the library crates emit spans
//! and events but never install subscribers.  Verbosity flags map to
//! filter levels as WARN by default, then INFO / DEBUG / TRACE for each
//! repeated `-v`, with `--quiet` clamping to ERROR.  A set `RUST_LOG`
//! wins over all of that.

use std::io::IsTerminal as _;

use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber.
///
/// Call once, before any tracing macros fire.  Registration failure is
/// reported back and the caller decides whether lost diagnostics matter.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(derive_level(args)));

    let ansi = !args.no_color && std::io::stderr().is_terminal();

    // Compact, timestamp-free output: these are one-shot CLI diagnostics,
    // not server logs.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))
}

/// One directive per workspace crate, all at the same level.  `stencil` is
/// the binary target itself.
fn default_filter(level: Level) -> EnvFilter {
    EnvFilter::new(format!(
        "stencil={level},stencil_core={level},stencil_adapters={level}"
    ))
}

/// Translate the verbosity counter and the quiet flag to a level.
fn derive_level(args: &GlobalArgs) -> Level {
    if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
