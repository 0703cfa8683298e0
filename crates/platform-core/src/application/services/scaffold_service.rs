//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the configuration once
//! 2. Load the manifest once
//! 3. Run each enabled feature in order (Actions, Docker, Flux)
//! 4. Return the rendered files; the caller performs any I/O
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{TemplateRenderer, TemplateSource},
        services::FeatureGenerator,
    },
    domain::{DomainValidator as validator, Feature, Manifest, RenderedFile, ScaffoldConfig},
    error::PlatformResult,
};

/// One manifest entry, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingInfo {
    pub name: String,
    pub source: String,
    pub target: String,
    pub condition: String,
    /// Feature family, or `"none"` when the condition tag is unknown.
    pub feature: String,
}

/// Main generation service.
///
/// Holds only read-only adapters, so one instance can serve concurrent
/// callers.
pub struct ScaffoldService {
    source: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use platform_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     source,   // impl TemplateSource
    ///     renderer, // impl TemplateRenderer
    /// );
    /// ```
    pub fn new(source: Box<dyn TemplateSource>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { source, renderer }
    }

    /// Generate every enabled feature.
    ///
    /// Validation errors are returned unchanged. Errors raised inside a
    /// feature carry that feature as context. No files are returned
    /// alongside an error.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            workflow_type = %config.workflow_type()
        )
    )]
    pub fn generate(&self, config: &ScaffoldConfig) -> PlatformResult<Vec<RenderedFile>> {
        validator::validate_config(config)?;

        let features: Vec<Feature> = config.enabled_features().collect();
        if features.is_empty() {
            info!("No features enabled, nothing to generate");
            return Ok(Vec::new());
        }

        let manifest = self.source.manifest()?;
        info!(entries = manifest.len(), "Manifest loaded");

        let generator = self.generator();
        let mut files = Vec::new();
        for feature in features {
            let generated = generator
                .generate(feature, config, &manifest)
                .map_err(|e| e.in_feature(feature))?;
            info!(feature = %feature, files = generated.len(), "Feature generated");
            files.extend(generated);
        }

        validator::validate_output(&files)?;

        info!(files = files.len(), "Generation completed");
        Ok(files)
    }

    /// Generate a single feature regardless of its toggle.
    ///
    /// Validates and loads the manifest itself, so it can be called without
    /// going through [`generate`](Self::generate).
    #[instrument(skip_all, fields(feature = %feature, project = %config.project_name()))]
    pub fn generate_feature(
        &self,
        feature: Feature,
        config: &ScaffoldConfig,
    ) -> PlatformResult<Vec<RenderedFile>> {
        validator::validate_config(config)?;

        let files = self
            .source
            .manifest()
            .and_then(|manifest| self.generator().generate(feature, config, &manifest))
            .map_err(|e| e.in_feature(feature))?;

        validator::validate_output(&files)?;
        Ok(files)
    }

    /// The effective manifest.
    pub fn manifest(&self) -> PlatformResult<Manifest> {
        self.source.manifest()
    }

    /// List the effective manifest entries for display.
    pub fn list_mappings(&self) -> PlatformResult<Vec<MappingInfo>> {
        let manifest = self.source.manifest()?;

        Ok(manifest
            .iter()
            .map(|m| MappingInfo {
                name: m.name.clone(),
                source: m.source.clone(),
                target: m.target.clone(),
                condition: m.condition.clone(),
                feature: m
                    .feature()
                    .map_or_else(|| "none".to_string(), |f| f.to_string()),
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn generator(&self) -> FeatureGenerator<'_> {
        FeatureGenerator::new(self.source.as_ref(), self.renderer.as_ref())
    }
}
