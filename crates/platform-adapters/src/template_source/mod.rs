//! Template source adapters.

mod layered;
mod memory;

pub use layered::LayeredTemplateSource;
pub use memory::InMemoryTemplateSource;

use platform_core::{
    application::ApplicationError,
    domain::{Manifest, ManifestDocument},
    error::PlatformResult,
};

/// Parse `manifest.yaml` contents.
///
/// YAML errors become `ManifestUnavailable`; duplicate names and malformed
/// entries surface as the domain errors raised by [`Manifest::new`].
pub fn parse_manifest(content: &str) -> PlatformResult<Manifest> {
    let document: ManifestDocument =
        serde_yaml::from_str(content).map_err(|e| ApplicationError::ManifestUnavailable {
            reason: format!("invalid manifest.yaml: {}", e),
        })?;

    Ok(Manifest::try_from(document)?)
}
