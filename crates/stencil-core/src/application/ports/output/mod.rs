//! The driven side of the hexagon: everything the engine asks disk-like
//! storage to do, behind one trait that `stencil-adapters` implements.

use std::path::Path;

use crate::application::error::FsError;

/// What a path currently resolves to on the underlying filesystem.
///
/// Symlinks are followed, so a link to a file reports [`PathKind::File`].
/// Anything that is neither a regular file nor a directory (including a
/// nonexistent path) reports [`PathKind::Missing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Missing,
}

/// The engine's entire view of storage.
///
/// `LocalFilesystem` implements it over the real disk, `MemoryFilesystem`
/// over maps for tests.
///
/// Callers branch on success vs failure only; [`FsError`] carries the
/// path and cause for logging, never for dispatch.  All I/O is synchronous
/// and blocking; `Send + Sync` is trait-object hygiene, not a concurrency
/// claim.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Copy a single file. The destination's parent directory must
    /// already exist.
    fn copy_file(&self, src: &Path, dest: &Path) -> Result<(), FsError>;

    /// Recursively copy a directory tree, reproducing symlinks as links
    /// rather than copying their targets.
    ///
    /// Creates `dest` and any missing parents. Not atomic: a failure
    /// mid-copy leaves a partial destination behind.
    fn copy_tree(&self, src: &Path, dest: &Path) -> Result<(), FsError>;

    /// Remove a directory and all contents. Fails if `path` is missing.
    fn remove_tree(&self, path: &Path) -> Result<(), FsError>;

    /// Create `path` along with any missing ancestors.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;

    /// Check if path exists. Makes no claim about file vs directory.
    fn exists(&self, path: &Path) -> bool;

    /// Classify what `path` resolves to right now.
    fn kind_of(&self, path: &Path) -> PathKind;

    /// Immediate entry names of a directory, in enumeration order.
    fn read_dir_names(&self, dir: &Path) -> Result<Vec<String>, FsError>;
}
