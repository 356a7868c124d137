// ============================================================================
//  PURE DOMAIN VALUES
// ============================================================================

//! The words stencil is allowed to say, and nothing else.
//!
//! Pure values only.  I/O happens behind the port trait in the application
//! layer; this module never touches it.
//!
//! ## Ground rules
//!
//! - **Synchronous**: nothing in here awaits
//! - **No I/O**: the filesystem is the adapters' job
//! - **Std plus thiserror**: no other crates below this line
//! - **Immutable values**: everything is Clone + PartialEq
//! - **Closed taxonomies**: every user-facing text comes from the catalog

pub mod message;
pub mod outcome;

pub use message::{ErrorMessage, InfoMessage};
pub use outcome::Outcome;
