//! Message catalog: every user-facing outcome text lives here.
//!
//! Two closed taxonomies cover the whole surface: [`ErrorMessage`] for
//! failures, [`InfoMessage`] for confirmations. Each variant carries the
//! context its text needs, so an unrecognized kind or a kind missing its
//! required field is unrepresentable. The catalog is pure: no state, just
//! `(kind, context) -> text` via `Display`.
//!
//! Texts are fixed. Operations report them verbatim through
//! [`Outcome`](crate::domain::Outcome); nothing downstream rewords them.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
//  ERROR MESSAGES
// ============================================================================

/// Failure texts, one variant per recognized error kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorMessage {
    /// `create` refused to overwrite an existing template.
    #[error("Template `{name}` already exists. Run command with -f to override.")]
    TemplateExists { name: String },

    /// A referenced template is not present in the store.
    #[error("Template `{name}` does not exist.")]
    TemplateMissing { name: String },

    /// The source path handed to `create` resolves to nothing.
    #[error("Path `{path}` does not exist.")]
    DirectoryMissing { path: PathBuf },

    /// Removing a template (or its stale copy during an overwrite) failed.
    #[error("An error occurred while deleting template `{name}`.")]
    DeleteTemplate { name: String },

    /// Copying a template out of the store failed.
    #[error("An error occurred while cloning template `{name}`.")]
    CloneTemplate { name: String },

    /// Copying a source into the store failed.
    #[error("An error occurred while creating template `{name}`.")]
    CreateTemplate { name: String },
}

impl ErrorMessage {
    /// Every recognized error kind tag.
    pub const KINDS: [&'static str; 6] = [
        "template_exists",
        "template_missing",
        "directory_missing",
        "delete_template",
        "clone_template",
        "create_template",
    ];

    /// Stable tag for structured logs. The set is closed; see [`Self::KINDS`].
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TemplateExists { .. } => "template_exists",
            Self::TemplateMissing { .. } => "template_missing",
            Self::DirectoryMissing { .. } => "directory_missing",
            Self::DeleteTemplate { .. } => "delete_template",
            Self::CloneTemplate { .. } => "clone_template",
            Self::CreateTemplate { .. } => "create_template",
        }
    }
}

// ============================================================================
//  INFO MESSAGES
// ============================================================================

/// Confirmation texts, one variant per recognized info kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoMessage {
    /// A source was captured into the store.
    TemplateCreated { name: String },

    /// A template was copied out of the store.
    TemplateCloned { name: String, path: PathBuf },

    /// A template was removed from the store.
    TemplateDeleted { name: String },
}

impl InfoMessage {
    /// Every recognized info kind tag.
    pub const KINDS: [&'static str; 3] =
        ["template_created", "template_cloned", "template_deleted"];

    /// Stable tag for structured logs. The set is closed; see [`Self::KINDS`].
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TemplateCreated { .. } => "template_created",
            Self::TemplateCloned { .. } => "template_cloned",
            Self::TemplateDeleted { .. } => "template_deleted",
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateCreated { name } => {
                write!(f, "Template `{name}` has been created.")
            }
            Self::TemplateCloned { name, path } => {
                write!(f, "Template `{name}` has been cloned to `{}`.", path.display())
            }
            Self::TemplateDeleted { name } => {
                write!(f, "Template `{name}` has been deleted.")
            }
        }
    }
}
