//! Use-case orchestration over the filesystem port.

pub mod template_engine;

pub use template_engine::TemplateEngine;
