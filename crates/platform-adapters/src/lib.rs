//! Infrastructure adapters for platform.
//!
//! This crate implements the ports defined in `platform_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod template_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use template_source::{InMemoryTemplateSource, LayeredTemplateSource};
