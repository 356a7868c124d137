//! Application layer errors.
//!
//! The engine never branches on WHY an adapter call failed, only that it
//! did. [`FsError`] is therefore deliberately opaque to callers: an
//! offending path plus a reason string that exists for the logs, not for
//! dispatch.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A failed filesystem operation, as reported by an adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("filesystem error at {path}: {reason}")]
pub struct FsError {
    /// Path the operation was working on when it failed.
    pub path: PathBuf,
    /// Human-readable cause. Logged, never matched on.
    pub reason: String,
}

impl FsError {
    /// Build from any path and displayable cause.
    pub fn new(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
