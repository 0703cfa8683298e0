use serde::Serialize;

use crate::domain::{
    entities::config::ScaffoldConfig, error::DomainError, value_objects::Feature,
};

/// Variables exposed to templates.
///
/// Templates reference these by name, e.g. `{{ project_name }}`.
/// `workflow_type` is the normalized flavor, so `node` renders as
/// `typescript`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub project_name: String,
    pub workflow_type: String,
    pub with_actions: bool,
    pub with_docker: bool,
    pub with_flux: bool,
}

impl RenderContext {
    pub fn from_config(config: &ScaffoldConfig) -> Result<Self, DomainError> {
        Ok(Self {
            project_name: config.project_name().to_string(),
            workflow_type: config.workflow_flavor()?.as_str().to_string(),
            with_actions: config.is_enabled(Feature::Actions),
            with_docker: config.is_enabled(Feature::Docker),
            with_flux: config.is_enabled(Feature::Flux),
        })
    }
}
