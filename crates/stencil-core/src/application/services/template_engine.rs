//! Template Engine - main application orchestrator.
//!
//! Implements the four store operations against an explicit store root:
//! 1. `create` - capture a file or directory as a named template
//! 2. `clone`  - copy a stored template to a new location and name
//! 3. `list`   - enumerate stored template names, filtered by substring
//! 4. `delete` - remove a stored template
//!
//! Every operation is a short linear sequence of guarded steps with no
//! retry; the first filesystem failure is terminal for that invocation
//! and reported through the returned [`Outcome`]. The store itself holds
//! no metadata: a template exists exactly when `store/<name>` does.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        classifier::{ClonePlan, SourceKind},
        error::FsError,
        ports::Filesystem,
    },
    domain::{ErrorMessage, InfoMessage, Outcome},
};

/// Main template-store service.
///
/// Owns the filesystem adapter; the store root travels with each call so
/// no location is ambient state.
pub struct TemplateEngine {
    filesystem: Box<dyn Filesystem>,
}

impl TemplateEngine {
    /// Create a new engine over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use stencil_core::application::TemplateEngine;
    /// # fn filesystem() -> Box<dyn stencil_core::application::ports::Filesystem> { unimplemented!() }
    ///
    /// let engine = TemplateEngine::new(filesystem());
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Capture `source` as template `name` inside `store`.
    ///
    /// With `force`, an existing template of the same name is removed
    /// first; without it, the existing template wins and nothing on disk
    /// is touched. A copy that fails midway leaves the partial
    /// destination in place; there is no rollback.
    #[instrument(
        skip_all,
        fields(name = %name, source = %source.display(), force = force)
    )]
    pub fn create(&self, source: &Path, name: &str, force: bool, store: &Path) -> Outcome {
        // 1. A name with separators or parent hops cannot address a store
        //    entry; reject it before touching the filesystem
        if !valid_template_name(name) {
            debug!("rejected template name with path components");
            return Outcome::failure(ErrorMessage::CreateTemplate {
                name: name.to_owned(),
            });
        }

        // 2. Select the copy strategy from the live source path
        let plan = match ClonePlan::classify(self.filesystem.as_ref(), source) {
            Ok(plan) => plan,
            Err(missing) => {
                debug!(path = %missing.path.display(), "create source does not resolve");
                return Outcome::failure(ErrorMessage::DirectoryMissing { path: missing.path });
            }
        };

        // 3. An existing template blocks the capture unless overwrite is
        //    forced; a failed removal stops the operation before any copy
        let template_dir = store.join(name);
        if self.filesystem.exists(&template_dir) {
            if !force {
                return Outcome::failure(ErrorMessage::TemplateExists {
                    name: name.to_owned(),
                });
            }
            if let Err(e) = self.filesystem.remove_tree(&template_dir) {
                warn!(error = %e, "could not remove existing template before overwrite");
                return Outcome::failure(ErrorMessage::DeleteTemplate {
                    name: name.to_owned(),
                });
            }
            debug!("existing template removed for overwrite");
        }

        // 4. File templates live wrapped in their own store subdirectory,
        //    preserving the original base filename; directory templates
        //    ARE the subdirectory
        let destination = match plan.kind() {
            SourceKind::File => match self.file_slot(source, &template_dir) {
                Ok(dest) => dest,
                Err(e) => {
                    warn!(error = %e, "could not prepare template directory");
                    return Outcome::failure(ErrorMessage::CreateTemplate {
                        name: name.to_owned(),
                    });
                }
            },
            SourceKind::Directory => template_dir,
        };

        // 5. Copy; on failure the partial destination is left as-is
        if let Err(e) = plan.copy(self.filesystem.as_ref(), source, &destination) {
            warn!(error = %e, kind = %plan.kind(), "template capture failed");
            return Outcome::failure(ErrorMessage::CreateTemplate {
                name: name.to_owned(),
            });
        }

        info!(kind = %plan.kind(), "template created");
        Outcome::success(InfoMessage::TemplateCreated {
            name: name.to_owned(),
        })
    }

    /// Clone template `template` out of `store` into `dest_dir/new_name`.
    #[instrument(
        skip_all,
        fields(template = %template, new_name = %new_name, dest = %dest_dir.display())
    )]
    pub fn clone(&self, dest_dir: &Path, template: &str, new_name: &str, store: &Path) -> Outcome {
        // A name that cannot address a store entry names no template.
        if !valid_template_name(template) {
            debug!("rejected template name with path components");
            return Outcome::failure(ErrorMessage::TemplateMissing {
                name: template.to_owned(),
            });
        }

        let template_dir = store.join(template);
        if !self.filesystem.exists(&template_dir) {
            return Outcome::failure(ErrorMessage::TemplateMissing {
                name: template.to_owned(),
            });
        }

        // Store-side layout is the authority on file vs directory; the
        // kind the template was created from is never recorded or trusted.
        let plan = match ClonePlan::classify(self.filesystem.as_ref(), &template_dir) {
            Ok(plan) => plan,
            Err(_) => {
                // Vanished between the existence probe and here.
                debug!("template disappeared before classification");
                return Outcome::failure(ErrorMessage::TemplateMissing {
                    name: template.to_owned(),
                });
            }
        };

        let destination = dest_dir.join(new_name);
        if let Err(e) = plan.copy(self.filesystem.as_ref(), &template_dir, &destination) {
            warn!(error = %e, "template clone failed");
            return Outcome::failure(ErrorMessage::CloneTemplate {
                name: template.to_owned(),
            });
        }

        info!(destination = %destination.display(), "template cloned");
        Outcome::success(InfoMessage::TemplateCloned {
            name: template.to_owned(),
            path: destination,
        })
    }

    /// Template names in `store` containing `filter`, in directory
    /// enumeration order (not sorted).
    ///
    /// A store that was never written to has no templates and yields an
    /// empty list. Enumeration failures also yield an empty list and
    /// surface as a warning, since this interface has no error channel.
    #[instrument(skip_all, fields(store = %store.display(), filter = %filter))]
    pub fn list(&self, store: &Path, filter: &str) -> Vec<String> {
        if !self.filesystem.exists(store) {
            debug!("store does not exist yet");
            return Vec::new();
        }

        match self.filesystem.read_dir_names(store) {
            Ok(names) => names
                .into_iter()
                .filter(|name| name.contains(filter))
                .collect(),
            Err(e) => {
                warn!(error = %e, "could not enumerate template store");
                Vec::new()
            }
        }
    }

    /// Remove template `name` from `store`.
    #[instrument(skip_all, fields(name = %name))]
    pub fn delete(&self, name: &str, store: &Path) -> Outcome {
        // A separator or parent hop in the name could address a path
        // outside the store; reject before the existence probe.
        if !valid_template_name(name) {
            debug!("rejected template name with path components");
            return Outcome::failure(ErrorMessage::TemplateMissing {
                name: name.to_owned(),
            });
        }

        let template_dir = store.join(name);
        if !self.filesystem.exists(&template_dir) {
            return Outcome::failure(ErrorMessage::TemplateMissing {
                name: name.to_owned(),
            });
        }

        if let Err(e) = self.filesystem.remove_tree(&template_dir) {
            warn!(error = %e, "template removal failed");
            return Outcome::failure(ErrorMessage::DeleteTemplate {
                name: name.to_owned(),
            });
        }

        info!("template deleted");
        Outcome::success(InfoMessage::TemplateDeleted {
            name: name.to_owned(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Prepare `store/name/` and resolve the wrapped slot for a file
    /// source's base filename.
    fn file_slot(&self, source: &Path, template_dir: &Path) -> Result<PathBuf, FsError> {
        let base = source
            .file_name()
            .ok_or_else(|| FsError::new(source, "source has no base filename"))?;
        self.filesystem.create_dir_all(template_dir)?;
        Ok(template_dir.join(base))
    }
}

/// A template name must address exactly one entry of the flat store:
/// a single normal path component, so no separators, no `.` or `..`,
/// and not empty.
fn valid_template_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}
