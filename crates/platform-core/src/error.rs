//! Unified error handling for the platform core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with feature context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, Feature};

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlatformError {
    /// Invalid configuration or manifest contents.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Resolution and rendering failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// An error raised while generating one feature's artifacts.
    #[error("{feature} generation failed: {source}")]
    Feature {
        feature: Feature,
        #[source]
        source: Box<PlatformError>,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PlatformError {
    /// Attach the feature that was being generated.
    pub fn in_feature(self, feature: Feature) -> Self {
        match self {
            // Already attributed; keep the innermost feature.
            Self::Feature { .. } => self,
            other => Self::Feature {
                feature,
                source: Box::new(other),
            },
        }
    }

    /// The error with all feature context stripped.
    pub fn root(&self) -> &PlatformError {
        match self {
            Self::Feature { source, .. } => source.root(),
            other => other,
        }
    }

    /// The feature this error was raised in, if any.
    pub fn feature(&self) -> Option<Feature> {
        match self {
            Self::Feature { feature, .. } => Some(*feature),
            _ => None,
        }
    }

    /// True for name/flavor validation failures.
    pub fn is_config_invalid(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Feature { source, .. } => source.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in platform".into(),
                "Please report this issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Manifest => ErrorCategory::Manifest,
            },
            Self::Application(e) => e.category(),
            Self::Feature { source, .. } => source.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad project name or workflow type.
    Validation,
    /// Manifest missing, malformed or inconsistent.
    Manifest,
    /// Template not found in any source.
    NotFound,
    /// Template syntax or substitution failure.
    Template,
    /// Output would overwrite an existing file.
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type PlatformResult<T> = Result<T, PlatformError>;
