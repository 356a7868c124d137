//! Implementation of the `stencil list` command.

use tracing::{debug, instrument};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stencil list` command.
#[instrument(skip_all)]
pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = commands::resolve_store(&global, &config);
    let filter = args.filter.as_deref().unwrap_or("");
    debug!(store = %store.display(), filter = filter, "list invoked");

    let names = commands::engine().list(&store, filter);

    match args.format {
        ListFormat::Plain => {
            if names.is_empty() {
                output.info("No templates found.")?;
                return Ok(());
            }
            output.header("Templates:")?;
            // Bare names go straight to stdout so `stencil list | ...`
            // stays scriptable even in quiet mode.
            for name in &names {
                println!("{name}");
            }
        }
        ListFormat::Json => {
            // A Vec<String> cannot fail to serialise; the fallback keeps the
            // output parseable regardless.
            let json = serde_json::to_string(&names).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
