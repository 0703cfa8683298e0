//! The template manifest: which template renders to which path, and when.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    conditions::{self, Condition},
    entities::common::RelativePath,
    entities::config::ScaffoldConfig,
    error::DomainError,
    value_objects::Feature,
};

/// File name of the manifest inside a template set.
pub const MANIFEST_FILE: &str = "manifest.yaml";

/// One manifest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMapping {
    /// Unique identifier within the manifest.
    pub name: String,
    /// Template id handed to the resolver (e.g. `go.yaml.tmpl`).
    pub source: String,
    /// Output path relative to the project root.
    pub target: String,
    /// Condition tag, see [`conditions`].
    pub condition: String,
}

impl TemplateMapping {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            target: target.into(),
            condition: condition.into(),
        }
    }

    /// The parsed condition, or `None` for a tag nobody recognizes.
    pub fn condition(&self) -> Option<Condition> {
        self.condition.parse().ok()
    }

    /// Feature family this entry belongs to; `None` for unknown tags.
    pub fn feature(&self) -> Option<Feature> {
        self.condition().map(Condition::feature)
    }

    /// Whether this entry should render for `config`.
    pub fn applies_to(&self, config: &ScaffoldConfig) -> bool {
        conditions::evaluate(&self.condition, config)
    }

    pub fn target_path(&self) -> Result<RelativePath, DomainError> {
        RelativePath::try_new(&self.target)
    }

    fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("name", &self.name),
            ("source", &self.source),
            ("target", &self.target),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::EmptyMappingField {
                    name: self.name.clone(),
                    field,
                });
            }
        }
        self.target_path().map(|_| ())
    }
}

/// Serialized form of `manifest.yaml`.
///
/// ```yaml
/// templates:
///   - name: go-workflow
///     source: go.yaml.tmpl
///     target: .github/workflows/go.yaml
///     condition: workflow_go
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestDocument {
    #[serde(default)]
    pub templates: Vec<TemplateMapping>,
}

/// Ordered, duplicate-free sequence of template mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    mappings: Vec<TemplateMapping>,
}

impl Manifest {
    /// Build a manifest, rejecting repeated names, empty fields and targets
    /// that would escape the output directory.
    pub fn new(mappings: Vec<TemplateMapping>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for mapping in &mappings {
            mapping.validate()?;
            if !seen.insert(mapping.name.as_str()) {
                return Err(DomainError::DuplicateMapping {
                    name: mapping.name.clone(),
                });
            }
        }
        Ok(Self { mappings })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateMapping> {
        self.mappings.iter()
    }

    pub fn find(&self, name: &str) -> Option<&TemplateMapping> {
        self.mappings.iter().find(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Entries of `feature`'s family that apply to `config`, in manifest order.
    pub fn select(&self, feature: Feature, config: &ScaffoldConfig) -> Vec<&TemplateMapping> {
        self.mappings
            .iter()
            .filter(|m| m.feature() == Some(feature) && m.applies_to(config))
            .collect()
    }

    pub fn to_document(&self) -> ManifestDocument {
        ManifestDocument {
            templates: self.mappings.clone(),
        }
    }
}

impl TryFrom<ManifestDocument> for Manifest {
    type Error = DomainError;

    fn try_from(doc: ManifestDocument) -> Result<Self, Self::Error> {
        Manifest::new(doc.templates)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a TemplateMapping;
    type IntoIter = std::slice::Iter<'a, TemplateMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TemplateMapping> {
        vec![
            TemplateMapping::new("go-workflow", "go.yaml.tmpl", ".github/workflows/go.yaml", "workflow_go"),
            TemplateMapping::new("dockerfile", "Dockerfile.tmpl", "Dockerfile", "with_docker"),
            TemplateMapping::new("fluxcd", "fluxcd.yaml.tmpl", "fluxcd.yaml", "with_flux"),
        ]
    }

    #[test]
    fn manifest_keeps_declaration_order() {
        let manifest = Manifest::new(sample()).unwrap();
        let names: Vec<_> = manifest.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["go-workflow", "dockerfile", "fluxcd"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut mappings = sample();
        mappings.push(TemplateMapping::new("dockerfile", "Other.tmpl", "Other", "with_docker"));

        assert_eq!(
            Manifest::new(mappings),
            Err(DomainError::DuplicateMapping {
                name: "dockerfile".into()
            })
        );
    }

    #[test]
    fn absolute_target_is_rejected() {
        let mappings = vec![TemplateMapping::new("x", "x.tmpl", "/etc/x", "with_flux")];
        assert!(matches!(
            Manifest::new(mappings),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn empty_source_is_rejected() {
        let mappings = vec![TemplateMapping::new("x", " ", "x.yaml", "with_flux")];
        assert!(matches!(
            Manifest::new(mappings),
            Err(DomainError::EmptyMappingField { field: "source", .. })
        ));
    }

    #[test]
    fn unknown_condition_belongs_to_no_feature() {
        let mapping = TemplateMapping::new("x", "x.tmpl", "x.yaml", "with_helm");
        assert_eq!(mapping.feature(), None);
        assert!(!mapping.applies_to(&ScaffoldConfig::new("acme").with_flux(true)));
    }

    #[test]
    fn select_filters_by_family_and_condition() {
        let manifest = Manifest::new(sample()).unwrap();
        let cfg = ScaffoldConfig::new("acme").with_actions(true).with_docker(true);

        let actions: Vec<_> = manifest
            .select(Feature::Actions, &cfg)
            .into_iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(actions, vec!["go-workflow"]);

        assert!(manifest.select(Feature::Flux, &cfg).is_empty());
    }
}
