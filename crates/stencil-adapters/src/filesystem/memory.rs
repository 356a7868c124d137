//! A `Filesystem` that lives entirely in a pair of maps.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stencil_core::application::ports::{Filesystem, FsError, PathKind};

/// Map-backed filesystem double.
///
/// Backs the engine in tests that assert on store state without touching
/// disk. Clones share the same storage, so tests can keep a handle while
/// the engine owns another. Symlinks are not modeled here; link fidelity
/// is covered by the `LocalFilesystem` tests.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Empty filesystem; seed it with the `seed_*` helpers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryState::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn seed_file(&self, path: &Path, content: &str) {
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_dir_chain(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_owned());
    }

    /// Seed a directory and its ancestors (testing helper).
    pub fn seed_dir(&self, path: &Path) {
        let mut inner = self.inner.write().unwrap();
        insert_dir_chain(&mut inner.directories, path);
    }

    /// Content of the file at `path`, if any (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Sorted snapshot of every known path (testing helper, for
    /// store-unchanged assertions).
    pub fn snapshot(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut all: Vec<PathBuf> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .cloned()
            .collect();
        all.sort();
        all
    }

}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn copy_file(&self, src: &Path, dest: &Path) -> Result<(), FsError> {
        let mut inner = self.inner.write().map_err(|_| lock_error(src))?;

        let Some(content) = inner.files.get(src).cloned() else {
            return Err(FsError::new(src, "source file does not exist"));
        };

        // Same contract as the real adapter: the parent must exist.
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(FsError::new(dest, "parent directory does not exist"));
            }
        }

        inner.files.insert(dest.to_path_buf(), content);
        Ok(())
    }

    fn copy_tree(&self, src: &Path, dest: &Path) -> Result<(), FsError> {
        let mut inner = self.inner.write().map_err(|_| lock_error(src))?;

        if !inner.directories.contains(src) {
            return Err(FsError::new(src, "source directory does not exist"));
        }

        // Same contract as the real adapter: an existing destination is a
        // failure, never a merge.
        if inner.directories.contains(dest) || inner.files.contains_key(dest) {
            return Err(FsError::new(dest, "destination already exists"));
        }

        insert_dir_chain(&mut inner.directories, dest);

        let copied_dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|dir| dir.strip_prefix(src).ok().map(|rel| dest.join(rel)))
            .collect();
        inner.directories.extend(copied_dirs);

        let copied_files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(path, content)| {
                path.strip_prefix(src)
                    .ok()
                    .map(|rel| (dest.join(rel), content.clone()))
            })
            .collect();
        inner.files.extend(copied_files);

        Ok(())
    }

    fn remove_tree(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if !inner.directories.contains(path) && !inner.files.contains_key(path) {
            return Err(FsError::new(path, "path does not exist"));
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        insert_dir_chain(&mut inner.directories, path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn kind_of(&self, path: &Path) -> PathKind {
        let inner = self.inner.read().unwrap();
        if inner.files.contains_key(path) {
            PathKind::File
        } else if inner.directories.contains(path) {
            PathKind::Directory
        } else {
            PathKind::Missing
        }
    }

    fn read_dir_names(&self, dir: &Path) -> Result<Vec<String>, FsError> {
        let inner = self.inner.read().map_err(|_| lock_error(dir))?;

        if !inner.directories.contains(dir) {
            return Err(FsError::new(dir, "directory does not exist"));
        }

        let names = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }
}

/// Register `path` and every ancestor as directories.
fn insert_dir_chain(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn lock_error(path: &Path) -> FsError {
    FsError::new(path, "filesystem lock poisoned")
}
