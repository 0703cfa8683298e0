//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `platform-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{FileMode, Manifest, RenderContext};
use crate::error::PlatformResult;

/// Port for template and manifest resolution.
///
/// Implemented by:
/// - `platform_adapters::template_source::LayeredTemplateSource` (override dir, then built-ins)
/// - `platform_adapters::template_source::InMemoryTemplateSource` (testing)
///
/// Sources are read-only; concurrent callers see the same content.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Load a template body by id, e.g. `go.yaml.tmpl`.
    ///
    /// Fails with `ApplicationError::TemplateNotFound` when no layer has it.
    fn load(&self, id: &str) -> PlatformResult<String>;

    /// Load and parse the manifest.
    ///
    /// Fails with `ApplicationError::ManifestUnavailable` when it is missing
    /// or malformed, and with `DomainError::DuplicateMapping` when two
    /// entries share a name.
    fn manifest(&self) -> PlatformResult<Manifest>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `platform_adapters::renderer::MiniJinjaRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `body` against `context`.
    ///
    /// # Arguments
    ///
    /// * `name` - Template id, used only in error messages
    /// * `body` - Template text
    /// * `context` - Values for `project_name`, `workflow_type`, ...
    fn render(&self, name: &str, body: &str, context: &RenderContext) -> PlatformResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `platform_adapters::filesystem::LocalFilesystem` (production)
/// - `platform_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PlatformResult<()>;

    /// Write content to a file and apply `mode`.
    fn write_file(&self, path: &Path, content: &str, mode: FileMode) -> PlatformResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
