//! Filesystem adapters for stencil.
//!
//! Implements the `Filesystem` port from `stencil-core` twice: over the
//! real disk ([`LocalFilesystem`]) and in memory ([`MemoryFilesystem`])
//! for engine tests that must not touch disk.  All I/O in the workspace
//! lives here or behind here.

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
