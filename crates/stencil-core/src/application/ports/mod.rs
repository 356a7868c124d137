//! Traits the engine needs the outside world to implement.
//!
//! A single driven port exists: [`Filesystem`], the engine's entire view
//! of storage, implemented by `stencil-adapters`.  There is no driving
//! port; the CLI calls [`TemplateEngine`](crate::application::TemplateEngine)
//! directly.

pub mod output;

pub use crate::application::error::FsError;
pub use output::{Filesystem, PathKind};
