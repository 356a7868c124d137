//! Implementation of the `stencil create` command.

use tracing::{debug, instrument};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stencil create` command.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = commands::resolve_store(&global, &config);
    debug!(store = %store.display(), source = %args.path.display(), "create invoked");

    output.print(&format!(
        "Creating template `{}` from `{}`.",
        args.name,
        args.path.display()
    ))?;

    let outcome = commands::engine().create(&args.path, &args.name, args.force, &store);
    commands::render_outcome(outcome, &output)
}
