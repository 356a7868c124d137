//! `stencil init`: create a default configuration file and the store.

use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, InitArgs},
    commands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration file and ensure the store directory
/// exists.
///
/// Refuses to overwrite an existing config file unless `--force` is given;
/// honours `--config` as the write target.
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config_path = global
        .config
        .clone()
        .unwrap_or_else(AppConfig::config_path);

    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    // Write a config that spells out the effective store location rather
    // than leaving the field blank.
    let mut defaults = AppConfig::default();
    defaults.store.dir = Some(config.store_dir(global.store.as_deref()));

    let toml = toml::to_string_pretty(&defaults).map_err(|e| CliError::Config {
        message: format!("failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating config directory `{}`", parent.display()))?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("writing config to `{}`", config_path.display()))?;

    info!(path = %config_path.display(), "configuration written");
    output.success(&format!(
        "Configuration written to {}",
        config_path.display()
    ))?;

    // Materialise the store so the first `create` never has to.
    let store = commands::resolve_store(&global, &config);
    std::fs::create_dir_all(&store)
        .with_cli_context(|| format!("creating template store `{}`", store.display()))?;

    output.info(&format!("Template store at {}", store.display()))?;

    Ok(())
}
