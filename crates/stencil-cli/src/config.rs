//! Configuration file handling and store-directory resolution.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it, since the resolved
//! store directory is handed to every engine call explicitly.
//!
//! # Resolution order for the store directory (highest priority first)
//!
//! 1. `--store` flag (including `STENCIL_STORE` via clap's env support)
//! 2. `store.dir` from the config file
//! 3. Platform data directory + `templates`

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Everything the config file can say.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Template store location.
    #[serde(default)]
    pub store: StoreConfig,
    /// Default values for operations.
    #[serde(default)]
    pub defaults: Defaults,
    /// Output rendering knobs.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Template store directory.  Absent means the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Name given to a clone when `--name` is omitted.
    #[serde(default = "default_clone_name")]
    pub clone_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            clone_name: default_clone_name(),
        }
    }
}

fn default_clone_name() -> String {
    "Untitled".into()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Disable colored output regardless of terminal support.
    #[serde(default)]
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the given file, or from the default location.
    ///
    /// A missing file at the *default* location is fine (defaults apply);
    /// an explicitly passed `--config` path must exist and parse.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let raw = config::Config::builder()
            .add_source(config::File::from(path.as_path()).required(required))
            .build()
            .with_context(|| format!("failed to read configuration from `{}`", path.display()))?;

        raw.try_deserialize()
            .with_context(|| format!("invalid configuration in `{}`", path.display()))
    }

    /// Lenient load for `init`, which must run before the config file
    /// exists.  A missing file yields defaults silently; an unreadable or
    /// malformed one yields defaults with a warning.
    pub fn load_or_default(config_file: Option<&PathBuf>) -> Self {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let loaded = config::Config::builder()
            .add_source(config::File::from(path.as_path()).required(false))
            .build()
            .and_then(|raw| raw.try_deserialize());

        loaded.unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "ignoring unreadable configuration: {e}");
            Self::default()
        })
    }

    /// Where the config file lives when `--config` is not given.
    ///
    /// `directories::ProjectDirs` picks the platform convention; the
    /// fallback is `.stencil.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stencil.toml"))
    }

    /// Default template store directory.
    pub fn default_store_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.data_dir().join("templates"))
            .unwrap_or_else(|| PathBuf::from(".stencil").join("templates"))
    }

    /// Resolve the store directory for this invocation.
    ///
    /// `flag` is the `--store` value when present; it always wins.
    pub fn store_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.store.dir.clone())
            .unwrap_or_else(Self::default_store_dir)
    }
}
