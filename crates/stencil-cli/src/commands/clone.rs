//! Implementation of the `stencil clone` command.

use tracing::{debug, instrument};

use crate::{
    cli::{CloneArgs, GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stencil clone` command.
///
/// When `--name` is omitted the configured clone name applies
/// (`"Untitled"` out of the box).
#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(
    args: CloneArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = commands::resolve_store(&global, &config);
    let new_name = args.name.unwrap_or_else(|| config.defaults.clone_name.clone());
    debug!(store = %store.display(), new_name = %new_name, "clone invoked");

    output.print(&format!(
        "Cloning template `{}` to `{}`.",
        args.template,
        args.path.join(&new_name).display()
    ))?;

    let outcome = commands::engine().clone(&args.path, &args.template, &new_name, &store);
    commands::render_outcome(outcome, &output)
}
