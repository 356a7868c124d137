//! Application layer: the template engine, its copy-strategy classifier,
//! and the filesystem port.
//!
//! Code here sequences store operations but renders no user-facing text;
//! every message a user can see lives in `crate::domain::message`.

pub mod classifier;
pub mod error;
pub mod ports;
pub mod services;

pub use classifier::{ClonePlan, PathNotFound, SourceKind};
pub use error::FsError;
pub use ports::{Filesystem, PathKind};
pub use services::TemplateEngine;
