//! Application layer errors.
//!
//! These errors represent failures in template resolution and rendering,
//! not configuration rules. Configuration errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Feature;
use crate::error::ErrorCategory;

/// Errors that occur while resolving, rendering or persisting templates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The manifest is missing or could not be parsed.
    #[error("Manifest unavailable: {reason}")]
    ManifestUnavailable { reason: String },

    /// Neither the override directory nor the built-in set has the template.
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// The template body is not valid template syntax.
    #[error("Template syntax error in '{template}': {reason}")]
    TemplateSyntax { template: String, reason: String },

    /// The template references a variable the render context lacks.
    #[error("Template '{template}' references an unknown field: {reason}")]
    MissingField { template: String, reason: String },

    /// Any other substitution failure.
    #[error("Rendering '{template}' failed: {reason}")]
    RenderFailure { template: String, reason: String },

    /// A feature whose artifacts must be emitted together selected only part
    /// of them.
    #[error("{feature} artifacts must be generated together; missing '{missing}'")]
    IncompleteArtifactSet { feature: Feature, missing: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Output file already exists and overwriting was declined.
    #[error("File already exists: {path}")]
    FileExists { path: PathBuf },

    /// Shared in-memory state was poisoned.
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestUnavailable { reason } => vec![
                format!("Manifest problem: {}", reason),
                "Check manifest.yaml in your --templates-dir".into(),
                "Remove the override manifest to fall back to the built-in one".into(),
            ],
            Self::TemplateNotFound { template } => vec![
                format!("No template named '{}' in the override directory or built-ins", template),
                "Try: platform list to see the effective manifest".into(),
                "Or: platform eject <DIR> to start from the built-in templates".into(),
            ],
            Self::TemplateSyntax { template, .. } => vec![
                format!("Fix the template syntax in '{}'", template),
                "Templates use Jinja syntax: {{ project_name }}".into(),
            ],
            Self::MissingField { .. } => vec![
                "Available fields: project_name, workflow_type, with_actions, with_docker, with_flux"
                    .into(),
            ],
            Self::IncompleteArtifactSet { missing, .. } => vec![
                format!("Add a manifest entry named '{}'", missing),
                "Dockerfile and its build workflow are always generated together".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::FileExists { path } => vec![
                format!("'{}' is already present", path.display()),
                "Use --force to overwrite".into(),
                "Or: --stdout to print the files instead".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestUnavailable { .. } | Self::IncompleteArtifactSet { .. } => {
                ErrorCategory::Manifest
            }
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateSyntax { .. }
            | Self::MissingField { .. }
            | Self::RenderFailure { .. } => ErrorCategory::Template,
            Self::FileExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
