//! Core domain layer.
//!
//! This module contains pure generation logic with no I/O.
//! Template storage and rendering are reached via ports (traits)
//! defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: configs, manifests and rendered files are never
//!   mutated after construction
//!
// Public API - what the world sees
pub mod conditions;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use conditions::{CONDITION_REGISTRY, Condition, ConditionDef};
pub use entities::{
    common::{FileMode, RelativePath},
    config::{ScaffoldConfig, ScaffoldRequest},
    manifest::{MANIFEST_FILE, Manifest, ManifestDocument, TemplateMapping},
    render_context::RenderContext,
    rendered_file::RenderedFile,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Feature, WorkflowFlavor};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-entity behaviour
    // ========================================================================

    #[test]
    fn restricted_config_never_selects_other_families() {
        let manifest = Manifest::new(vec![
            TemplateMapping::new("ci", "ci.tmpl", "ci.yaml", "with_actions"),
            TemplateMapping::new("image", "Dockerfile.tmpl", "Dockerfile", "use_docker"),
            TemplateMapping::new("flux", "flux.tmpl", "flux.yaml", "with_flux"),
        ])
        .unwrap();

        let everything = ScaffoldConfig::new("acme")
            .with_actions(true)
            .with_docker(true)
            .with_flux(true);

        for feature in Feature::ALL {
            let restricted = everything.restrict_to(feature);
            let selected = manifest.select(feature, &restricted);
            assert_eq!(selected.len(), 1, "feature {feature}");
            assert_eq!(selected[0].feature(), Some(feature));
        }
    }

    #[test]
    fn validator_delegates_to_config() {
        assert!(DomainValidator::validate_config(&ScaffoldConfig::new("acme")).is_ok());
        assert!(DomainValidator::validate_config(&ScaffoldConfig::new("a b")).is_err());
    }
}
