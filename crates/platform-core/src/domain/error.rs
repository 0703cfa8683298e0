// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be wrapped with feature context)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("project name cannot be empty")]
    MissingProjectName,

    #[error("invalid project name '{name}': only letters, digits and hyphens are allowed")]
    InvalidName { name: String },

    #[error("unsupported workflow type '{flavor}'")]
    InvalidWorkflowType { flavor: String },

    #[error("unknown feature '{feature}'")]
    UnknownFeature { feature: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("duplicate template mapping name in manifest: {name}")]
    DuplicateMapping { name: String },

    #[error("template mapping '{name}' has an empty '{field}'")]
    EmptyMappingField { name: String, field: &'static str },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("duplicate output path: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProjectName => vec![
                "Pass a project name with --project-name".into(),
                "Or run from a directory whose name is a valid project name".into(),
            ],
            Self::InvalidName { name } => vec![
                format!("'{}' contains characters outside [A-Za-z0-9-]", name),
                "Examples: my-service, api2, Platform-Tools".into(),
            ],
            Self::InvalidWorkflowType { flavor } => vec![
                format!("'{}' is not a supported workflow type", flavor),
                "Supported workflow types:".into(),
                "  • go         - Go build and test workflow (default)".into(),
                "  • typescript - Node/TypeScript workflow (alias: node)".into(),
                "  • python     - Python workflow".into(),
            ],
            Self::UnknownFeature { .. } => {
                vec!["Known features: actions, docker, flux".into()]
            }
            Self::DuplicateMapping { name } => vec![
                format!("Template mapping '{}' is declared more than once", name),
                "Mapping names must be unique in manifest.yaml".into(),
            ],
            Self::EmptyMappingField { field, .. } => vec![
                format!("Every manifest entry needs a non-empty '{}'", field),
            ],
            Self::AbsolutePathNotAllowed { .. } => vec![
                "Manifest targets must be relative to the output directory".into(),
            ],
            Self::DuplicatePath { .. } => vec![
                "Two manifest entries render to the same target path".into(),
                "Give each entry a distinct target".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProjectName
            | Self::InvalidName { .. }
            | Self::InvalidWorkflowType { .. }
            | Self::UnknownFeature { .. } => ErrorCategory::Validation,
            Self::DuplicateMapping { .. }
            | Self::EmptyMappingField { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::DuplicatePath { .. } => ErrorCategory::Manifest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Manifest,
}
