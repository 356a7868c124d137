//! Core of the stencil template manager: domain messages plus the
//! application layer, arranged hexagonally (ports and adapters).
//!
//! The CLI drives the [`application::TemplateEngine`]; the engine talks to
//! storage only through the [`application::ports::Filesystem`] trait, which
//! the `stencil-adapters` crate implements for the real disk and for an
//! in-memory double.
//!
//! ```text
//! stencil-cli ──▶ TemplateEngine ──▶ dyn Filesystem
//!                       │                  ▲
//!                       ▼                  │
//!                    Outcome       stencil-adapters
//! ```
//!
//! Every engine operation returns an [`domain::Outcome`], the catalog of
//! user-facing success and failure messages.  Nothing in this crate does
//! I/O on its own.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use stencil_core::application::TemplateEngine;
//! # fn filesystem() -> Box<dyn stencil_core::application::ports::Filesystem> { unimplemented!() }
//!
//! // 1. Build the engine over an injected filesystem adapter
//! let engine = TemplateEngine::new(filesystem());
//!
//! // 2. Every operation takes the store root explicitly
//! let outcome = engine.create(Path::new("./proj"), "demo", false, Path::new("/store"));
//! println!("{}", outcome.message());
//! ```

pub mod application;
pub mod domain;

/// Convenience re-exports for downstream crates.
pub mod prelude {
    pub use crate::application::{
        ClonePlan, PathNotFound, SourceKind, TemplateEngine,
        ports::{Filesystem, FsError, PathKind},
    };
    pub use crate::domain::{ErrorMessage, InfoMessage, Outcome};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
