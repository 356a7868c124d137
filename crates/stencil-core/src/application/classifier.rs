//! Path classification: which copy strategy applies to a source path.
//!
//! A [`ClonePlan`] is the classifier's whole output: a sum type over the
//! two copy strategies, dispatched by pattern match. Plans are transient
//! by design. They are recomputed from the live filesystem on every
//! invocation and never cached, because a path can change between calls
//! (an accepted race, not something the engine guards against).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::application::error::FsError;
use crate::application::ports::{Filesystem, PathKind};

/// A source path that currently resolves to neither a file nor a
/// directory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("path not found: {path}")]
pub struct PathNotFound {
    /// The offending path, verbatim as handed to `classify`.
    pub path: PathBuf,
}

/// How a source will be reproduced: whole file or whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Directory,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

/// The copy strategy selected for a source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClonePlan {
    kind: SourceKind,
}

impl ClonePlan {
    /// Inspect `path` and select the matching copy strategy.
    ///
    /// Pure inspection, no side effects.
    pub fn classify(filesystem: &dyn Filesystem, path: &Path) -> Result<Self, PathNotFound> {
        match filesystem.kind_of(path) {
            PathKind::File => Ok(Self {
                kind: SourceKind::File,
            }),
            PathKind::Directory => Ok(Self {
                kind: SourceKind::Directory,
            }),
            PathKind::Missing => Err(PathNotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    /// The kind this plan was derived from.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Run the selected copy primitive from `src` to `dest`.
    pub fn copy(
        &self,
        filesystem: &dyn Filesystem,
        src: &Path,
        dest: &Path,
    ) -> Result<(), FsError> {
        match self.kind {
            SourceKind::File => filesystem.copy_file(src, dest),
            SourceKind::Directory => filesystem.copy_tree(src, dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;

    #[test]
    fn a_file_path_selects_the_file_strategy() {
        let mut fs = MockFilesystem::new();
        fs.expect_kind_of().returning(|_| PathKind::File);

        let plan = ClonePlan::classify(&fs, Path::new("/tmp/notes.txt")).unwrap();

        assert_eq!(plan.kind(), SourceKind::File);
    }

    #[test]
    fn a_directory_path_selects_the_tree_strategy() {
        let mut fs = MockFilesystem::new();
        fs.expect_kind_of().returning(|_| PathKind::Directory);

        let plan = ClonePlan::classify(&fs, Path::new("/tmp/proj")).unwrap();

        assert_eq!(plan.kind(), SourceKind::Directory);
    }

    #[test]
    fn an_unresolvable_path_is_reported_with_the_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_kind_of().returning(|_| PathKind::Missing);

        let err = ClonePlan::classify(&fs, Path::new("/tmp/gone")).unwrap_err();

        assert_eq!(err.path, PathBuf::from("/tmp/gone"));
    }

    #[test]
    fn a_file_plan_copies_via_the_file_primitive() {
        let mut fs = MockFilesystem::new();
        fs.expect_kind_of().returning(|_| PathKind::File);
        fs.expect_copy_file()
            .withf(|src, dest| src == Path::new("/a") && dest == Path::new("/b"))
            .times(1)
            .returning(|_, _| Ok(()));

        let plan = ClonePlan::classify(&fs, Path::new("/a")).unwrap();

        assert!(plan.copy(&fs, Path::new("/a"), Path::new("/b")).is_ok());
    }

    #[test]
    fn a_directory_plan_copies_via_the_tree_primitive() {
        let mut fs = MockFilesystem::new();
        fs.expect_kind_of().returning(|_| PathKind::Directory);
        fs.expect_copy_tree()
            .withf(|src, dest| src == Path::new("/a") && dest == Path::new("/b"))
            .times(1)
            .returning(|_, _| Ok(()));

        let plan = ClonePlan::classify(&fs, Path::new("/a")).unwrap();

        assert!(plan.copy(&fs, Path::new("/a"), Path::new("/b")).is_ok());
    }
}
