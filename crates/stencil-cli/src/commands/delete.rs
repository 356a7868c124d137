//! Implementation of the `stencil delete` command.

use tracing::{debug, instrument};

use crate::{
    cli::{DeleteArgs, GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stencil delete` command.
#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(
    args: DeleteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = commands::resolve_store(&global, &config);
    debug!(store = %store.display(), "delete invoked");

    output.print(&format!("Deleting template `{}`.", args.template))?;

    let outcome = commands::engine().delete(&args.template, &store);
    commands::render_outcome(outcome, &output)
}
