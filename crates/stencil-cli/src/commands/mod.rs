//! Command handlers.
//!
//! Each submodule exposes a single `execute` function with the same shape:
//! take parsed arguments, resolve the store directory, run the engine, and
//! render the outcome.  No template semantics live here; the handlers are
//! thin translation layers over the core engine.

use std::path::PathBuf;

use stencil_adapters::LocalFilesystem;
use stencil_core::application::TemplateEngine;
use stencil_core::domain::Outcome;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub mod clone;
pub mod completions;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;

/// Build the engine every command runs against.
pub(crate) fn engine() -> TemplateEngine {
    TemplateEngine::new(Box::new(LocalFilesystem::new()))
}

/// Store directory for this invocation: flag, then config file, then the
/// platform default.
pub(crate) fn resolve_store(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    config.store_dir(global.store.as_deref())
}

/// Print a successful outcome, or turn a failed one into a [`CliError`].
///
/// The outcome's message is rendered exactly once, verbatim: success goes
/// through the output manager's `✓` path, failure becomes an
/// [`CliError::OperationFailed`] that main prints and maps to exit 1.
pub(crate) fn render_outcome(outcome: Outcome, output: &OutputManager) -> CliResult<()> {
    if outcome.succeeded() {
        output.success(outcome.message())?;
        Ok(())
    } else {
        Err(CliError::OperationFailed {
            message: outcome.message().to_owned(),
        })
    }
}
