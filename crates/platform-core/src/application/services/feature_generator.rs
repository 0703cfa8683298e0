//! Per-feature generation: select manifest entries, load, render.

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{TemplateRenderer, TemplateSource},
    },
    domain::{
        Feature, FileMode, Manifest, RenderContext, RenderedFile, ScaffoldConfig,
        TemplateMapping,
    },
    error::PlatformResult,
};

/// Manifest entries the Docker feature must always emit together.
///
/// The pair is identified by entry name. An override manifest that renames
/// both entries opts out of the check; renaming only one of them still
/// trips it, since the other is then missing.
pub const DOCKER_ARTIFACTS: [&str; 2] = ["dockerfile", "docker-build"];

/// Generates the artifacts of a single feature.
///
/// Borrowed from [`ScaffoldService`](super::ScaffoldService) for the length
/// of one call; it holds no state of its own.
pub struct FeatureGenerator<'a> {
    source: &'a dyn TemplateSource,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> FeatureGenerator<'a> {
    pub fn new(source: &'a dyn TemplateSource, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { source, renderer }
    }

    /// Render every entry of `feature`'s family that applies to `config`.
    ///
    /// Entries are selected against `config.restrict_to(feature)`, so only
    /// this feature's conditions can ever match. The render context is built
    /// from the unrestricted config, which is re-validated here so a direct
    /// call fails closed just like one from the orchestrator.
    #[instrument(skip_all, fields(feature = %feature))]
    pub fn generate(
        &self,
        feature: Feature,
        config: &ScaffoldConfig,
        manifest: &Manifest,
    ) -> PlatformResult<Vec<RenderedFile>> {
        config.validate()?;

        let restricted = config.restrict_to(feature);
        let selected = manifest.select(feature, &restricted);
        debug!(selected = selected.len(), "Manifest entries selected");

        ensure_complete(feature, &selected)?;

        let context = RenderContext::from_config(config)?;

        selected
            .into_iter()
            .map(|mapping| self.render_mapping(mapping, &context))
            .collect()
    }

    fn render_mapping(
        &self,
        mapping: &TemplateMapping,
        context: &RenderContext,
    ) -> PlatformResult<RenderedFile> {
        let path = mapping.target_path()?;
        let body = self.source.load(&mapping.source)?;
        let content = self.renderer.render(&mapping.source, &body, context)?;

        debug!(
            entry = %mapping.name,
            template = %mapping.source,
            path = %path,
            bytes = content.len(),
            "Rendered"
        );

        Ok(RenderedFile::new(path, content, FileMode::REGULAR))
    }
}

/// Docker emits its Dockerfile and build workflow as a pair or not at all.
fn ensure_complete(feature: Feature, selected: &[&TemplateMapping]) -> PlatformResult<()> {
    if feature != Feature::Docker {
        return Ok(());
    }

    let present = |name: &str| selected.iter().any(|m| m.name == name);

    if !DOCKER_ARTIFACTS.iter().any(|name| present(name)) {
        return Ok(());
    }

    match DOCKER_ARTIFACTS.iter().find(|name| !present(name)) {
        Some(missing) => Err(ApplicationError::IncompleteArtifactSet {
            feature,
            missing: (*missing).to_string(),
        }
        .into()),
        None => Ok(()),
    }
}
