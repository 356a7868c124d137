//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use stencil_core::application::ports::{Filesystem, FsError, PathKind};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn copy_file(&self, src: &Path, dest: &Path) -> Result<(), FsError> {
        std::fs::copy(src, dest)
            .map(|_| ())
            .map_err(|e| map_io_error(dest, e, "copy file"))
    }

    fn copy_tree(&self, src: &Path, dest: &Path) -> Result<(), FsError> {
        // Missing parents are created, but the destination itself must be
        // new: an existing directory there is a failure, never a merge.
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        std::fs::create_dir(dest).map_err(|e| map_io_error(dest, e, "create directory"))?;

        let mut entries = 0usize;
        for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
            let entry = entry.map_err(|e| map_walk_error(src, e))?;
            let relative = entry.path().strip_prefix(src).map_err(|e| {
                FsError::new(
                    entry.path(),
                    format!("Failed to resolve relative path: {}", e),
                )
            })?;
            let target = dest.join(relative);

            let file_type = entry.file_type();
            if file_type.is_symlink() {
                // Links travel as links; their targets are never copied.
                let link = std::fs::read_link(entry.path())
                    .map_err(|e| map_io_error(entry.path(), e, "read symlink"))?;
                place_symlink(&link, entry.path(), &target)?;
            } else if file_type.is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
            } else {
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(&target, e, "copy file"))?;
            }
            entries += 1;
        }

        debug!(entries, src = %src.display(), dest = %dest.display(), "copied tree");
        Ok(())
    }

    fn remove_tree(&self, path: &Path) -> Result<(), FsError> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn kind_of(&self, path: &Path) -> PathKind {
        // Metadata follows symlinks, so a link classifies as its target.
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => PathKind::File,
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            _ => PathKind::Missing,
        }
    }

    fn read_dir_names(&self, dir: &Path) -> Result<Vec<String>, FsError> {
        let entries =
            std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "read directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "read directory entry"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

/// Recreate a link pointing at `link_target` at `dest`.
#[cfg(unix)]
fn place_symlink(link_target: &Path, _origin: &Path, dest: &Path) -> Result<(), FsError> {
    std::os::unix::fs::symlink(link_target, dest)
        .map_err(|e| map_io_error(dest, e, "create symlink"))
}

/// Recreate a link pointing at `link_target` at `dest`.
#[cfg(windows)]
fn place_symlink(link_target: &Path, origin: &Path, dest: &Path) -> Result<(), FsError> {
    // Windows separates file and directory links; resolve through the
    // original link to pick one. A dangling link becomes a file link.
    let is_dir = std::fs::metadata(origin).map(|m| m.is_dir()).unwrap_or(false);
    if is_dir {
        std::os::windows::fs::symlink_dir(link_target, dest)
            .map_err(|e| map_io_error(dest, e, "create symlink"))
    } else {
        std::os::windows::fs::symlink_file(link_target, dest)
            .map_err(|e| map_io_error(dest, e, "create symlink"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> FsError {
    FsError::new(path, format!("Failed to {}: {}", operation, e))
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> FsError {
    let path = e
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    FsError::new(path, format!("Failed to walk tree: {}", e))
}
