//! CLI-layer errors: rendering, suggestions, and exit-code mapping.
//!
//! Engine failures never arrive here as errors from the core crate (the
//! engine reports them as failure `Outcome`s), so [`CliError`] only models
//! what the CLI layer itself can get wrong, plus [`CliError::OperationFailed`]
//! as the bridge that turns a failed outcome into a non-zero exit.

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

/// Shorthand used by every command handler.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A template operation reported failure.  The message is the failure
    /// outcome's text, verbatim.
    #[error("{message}")]
    OperationFailed { message: String },

    /// `init` found a configuration file it was not allowed to overwrite.
    #[error("Configuration already exists at {path}")]
    ConfigExists { path: PathBuf },

    /// The configuration file failed to load, parse, or serialise.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation outside the template engine failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    ///
    /// [`Self::OperationFailed`] returns none: the outcome message is
    /// already the full user-facing story (including its own `-f` hint
    /// where applicable).
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::OperationFailed { .. } => vec![],

            Self::ConfigExists { path } => vec![
                format!("A configuration file already exists at {}", path.display()),
                "Pass --force to overwrite it".into(),
                "Or point --config at a different file".into(),
            ],

            Self::Config { message, .. } => vec![
                format!("The configuration could not be used: {message}"),
                "Check the configuration file for syntax errors".into(),
                "Run 'stencil init --force' to write a fresh default".into(),
            ],

            Self::Io { message, .. } => vec![
                format!("The failing operation: {message}"),
                "Check that you have permission to write the target".into(),
                "Check that the disk is not full".into(),
            ],
        }
    }

    /// Category used for log severity and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OperationFailed { .. } => ErrorCategory::Operation,
            Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit code: 1 for failed operations and internal errors,
    /// 2 for user errors, 4 for configuration errors.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Operation | ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Every error underneath this one, outermost cause first.
    ///
    /// `successors` hands the closure a `&&dyn Error`; without the explicit
    /// deref, `source()` borrows from the closure argument and fails borrowck.
    fn source_chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |err| (*err).source())
    }

    /// The re-run hint earns its line only when verbose output would add
    /// something, namely a source chain that is currently hidden.
    fn hint_verbose(&self, verbose: bool) -> bool {
        !verbose && self.source().is_some()
    }

    /// Render for a colour-capable terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        );
        let _ = writeln!(out, "  {}", self.to_string().red());

        if verbose {
            for cause in self.source_chain() {
                let _ = writeln!(
                    out,
                    "  {} {}",
                    "\u{2192}".dimmed(), // →
                    cause.to_string().dimmed()
                );
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", "Suggestions:".yellow().bold());
            for s in suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if self.hint_verbose(verbose) {
            let _ = writeln!(
                out,
                "\n{} {}",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed()
            );
        }

        out
    }

    /// Render without ANSI codes, same structure as [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Error: {self}");

        if verbose {
            for cause in self.source_chain() {
                let _ = writeln!(out, "  Caused by: {cause}");
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\nSuggestions:");
            for s in suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if self.hint_verbose(verbose) {
            let _ = writeln!(out, "\nUse -v / --verbose for more details.");
        }

        out
    }

    /// Log the error at a severity matching its category.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::Operation | ErrorCategory::UserError => {
                tracing::warn!(error = %self, ?category, "command failed");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, ?category, "command failed");
            }
        }
        for cause in self.source_chain() {
            tracing::debug!(%cause, "underlying cause");
        }
    }
}

/// Coarse classification driving log severity and the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A template operation reported failure.
    Operation,
    /// The user asked for something refusable (bad flags, overwrite denied).
    UserError,
    /// The configuration layer misbehaved.
    Configuration,
    /// Anything else, I/O included.
    Internal,
}

// ── conversion helper ─────────────────────────────────────────────────────────

/// Convert an I/O result into [`CliResult`] while attaching a
/// human-readable context message.
pub trait IntoCli<T> {
    fn with_cli_context(self, describe: impl FnOnce() -> String) -> CliResult<T>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context(self, describe: impl FnOnce() -> String) -> CliResult<T> {
        self.map_err(|source| CliError::Io {
            message: describe(),
            source,
        })
    }
}
