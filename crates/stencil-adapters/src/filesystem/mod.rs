//! The two `Filesystem` port implementations: one over the real disk,
//! one in memory for tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
