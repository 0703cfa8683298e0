//! Scaffold configuration.
//!
//! [`ScaffoldConfig`] is the one canonical description of what to generate.
//! External surfaces describe requests with [`ScaffoldRequest`], which still
//! carries the legacy `use_docker` toggle; converting a request into a config
//! folds both docker spellings into a single `docker` toggle.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Feature, WorkflowFlavor},
};

fn project_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("project name pattern is valid"))
}

/// Immutable generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    project_name: String,
    workflow_type: String,
    actions: bool,
    docker: bool,
    flux: bool,
}

impl ScaffoldConfig {
    /// A config for `project_name` with the default (`go`) workflow and every
    /// feature disabled.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            workflow_type: WorkflowFlavor::default().as_str().to_string(),
            actions: false,
            docker: false,
            flux: false,
        }
    }

    pub fn with_workflow_type(mut self, workflow_type: impl Into<String>) -> Self {
        self.workflow_type = workflow_type.into();
        self
    }

    pub fn with_actions(mut self, enabled: bool) -> Self {
        self.actions = enabled;
        self
    }

    pub fn with_docker(mut self, enabled: bool) -> Self {
        self.docker = enabled;
        self
    }

    pub fn with_flux(mut self, enabled: bool) -> Self {
        self.flux = enabled;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The workflow type exactly as supplied (may be `""` or `node`).
    pub fn workflow_type(&self) -> &str {
        &self.workflow_type
    }

    /// The parsed workflow flavor, resolving aliases.
    pub fn workflow_flavor(&self) -> Result<WorkflowFlavor, DomainError> {
        WorkflowFlavor::from_str(&self.workflow_type)
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Actions => self.actions,
            Feature::Docker => self.docker,
            Feature::Flux => self.flux,
        }
    }

    /// Features whose toggle is set, in generation order.
    pub fn enabled_features(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.is_enabled(*f))
    }

    /// A copy of this config with only `feature` switched on.
    ///
    /// Feature generators run against the restricted config so that a
    /// condition from another family can never select an entry for them.
    pub fn restrict_to(&self, feature: Feature) -> Self {
        Self {
            project_name: self.project_name.clone(),
            workflow_type: self.workflow_type.clone(),
            actions: feature == Feature::Actions,
            docker: feature == Feature::Docker,
            flux: feature == Feature::Flux,
        }
    }

    /// Check the project name and workflow type.
    ///
    /// Idempotent and side-effect free; every generation entry point calls it.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.project_name.is_empty() {
            return Err(DomainError::MissingProjectName);
        }

        if !project_name_pattern().is_match(&self.project_name) {
            return Err(DomainError::InvalidName {
                name: self.project_name.clone(),
            });
        }

        self.workflow_flavor().map(|_| ())
    }
}

/// Boundary representation of a generation request.
///
/// This is what the CLI flags and the text-block tool surface deserialize
/// into. Field names follow the external contract (`with_docker`,
/// `use_docker`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub workflow_type: String,
    pub with_actions: bool,
    pub with_docker: bool,
    pub with_flux: bool,
    /// Legacy spelling of `with_docker`.
    pub use_docker: bool,
}

impl From<ScaffoldRequest> for ScaffoldConfig {
    fn from(req: ScaffoldRequest) -> Self {
        ScaffoldConfig::new(req.project_name)
            .with_workflow_type(req.workflow_type)
            .with_actions(req.with_actions)
            .with_docker(req.with_docker || req.use_docker)
            .with_flux(req.with_flux)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["acme", "my-service", "Api2", "a", "x-1-y"] {
            assert!(ScaffoldConfig::new(name).validate().is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_missing() {
        assert_eq!(
            ScaffoldConfig::new("").validate(),
            Err(DomainError::MissingProjectName)
        );
    }

    #[test]
    fn name_with_forbidden_characters_is_invalid() {
        for name in ["my app", "my_app", "a/b", "café", "dot.name"] {
            assert!(
                matches!(
                    ScaffoldConfig::new(name).validate(),
                    Err(DomainError::InvalidName { .. })
                ),
                "expected InvalidName for: {name}"
            );
        }
    }

    #[test]
    fn workflow_types_are_checked() {
        for flavor in ["go", "typescript", "python", "", "node"] {
            let cfg = ScaffoldConfig::new("acme").with_workflow_type(flavor);
            assert!(cfg.validate().is_ok(), "failed for: {flavor:?}");
        }

        let cfg = ScaffoldConfig::new("acme").with_workflow_type("java");
        assert!(matches!(
            cfg.validate(),
            Err(DomainError::InvalidWorkflowType { .. })
        ));
    }

    #[test]
    fn validation_is_idempotent() {
        let cfg = ScaffoldConfig::new("acme").with_actions(true);
        assert_eq!(cfg.validate(), cfg.validate());
    }

    #[test]
    fn restrict_to_switches_other_features_off() {
        let cfg = ScaffoldConfig::new("acme")
            .with_actions(true)
            .with_flux(true);

        let docker_only = cfg.restrict_to(Feature::Docker);
        assert!(docker_only.is_enabled(Feature::Docker));
        assert!(!docker_only.is_enabled(Feature::Actions));
        assert!(!docker_only.is_enabled(Feature::Flux));
        assert_eq!(docker_only.project_name(), "acme");
    }

    #[test]
    fn enabled_features_follow_generation_order() {
        let cfg = ScaffoldConfig::new("acme")
            .with_flux(true)
            .with_actions(true);
        let features: Vec<_> = cfg.enabled_features().collect();
        assert_eq!(features, vec![Feature::Actions, Feature::Flux]);
    }

    #[test]
    fn legacy_use_docker_normalizes_into_docker() {
        let req = ScaffoldRequest {
            project_name: "acme".into(),
            use_docker: true,
            ..Default::default()
        };
        let cfg = ScaffoldConfig::from(req);
        assert!(cfg.is_enabled(Feature::Docker));
    }

    #[test]
    fn request_deserializes_with_missing_fields() {
        let req: ScaffoldRequest =
            serde_json::from_str(r#"{"project_name":"acme","with_flux":true}"#).unwrap();
        assert_eq!(req.project_name, "acme");
        assert!(req.with_flux);
        assert!(!req.with_docker);
        assert_eq!(req.workflow_type, "");
    }
}
