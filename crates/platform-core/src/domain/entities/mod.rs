pub mod common;
pub mod config;
pub mod manifest;
pub mod render_context;
pub mod rendered_file;

pub use crate::domain::DomainError;
pub use config::{ScaffoldConfig, ScaffoldRequest};
pub use manifest::{Manifest, TemplateMapping};
pub use rendered_file::RenderedFile;
