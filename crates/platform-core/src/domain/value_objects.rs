//! Domain value objects: WorkflowFlavor, Feature.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Condition semantics live in `conditions.rs`; this file only defines the
//! types, their string representations, and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── WorkflowFlavor ───────────────────────────────────────────────────────────

/// The CI workflow flavor to generate for the Actions feature.
///
/// Parsing is the single place where flavor aliases are resolved:
/// `""` means Go and `node` means TypeScript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowFlavor {
    #[default]
    Go,
    TypeScript,
    Python,
}

impl WorkflowFlavor {
    /// Every flavor, in display order.
    pub const ALL: [WorkflowFlavor; 3] = [Self::Go, Self::TypeScript, Self::Python];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::TypeScript => "typescript",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for WorkflowFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowFlavor {
    type Err = DomainError;

    /// Matching is exact: `Go` or `PYTHON` are rejected like any other
    /// unknown flavor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "go" => Ok(Self::Go),
            "typescript" | "node" => Ok(Self::TypeScript),
            "python" => Ok(Self::Python),
            other => Err(DomainError::InvalidWorkflowType {
                flavor: other.to_string(),
            }),
        }
    }
}

// ── Feature ──────────────────────────────────────────────────────────────────

/// A category of generated artifact.
///
/// The set is closed: each variant maps to one condition family in
/// `conditions.rs` and one top-level toggle on [`ScaffoldConfig`].
///
/// [`ScaffoldConfig`]: crate::domain::ScaffoldConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Actions,
    Docker,
    Flux,
}

impl Feature {
    /// Generation order. The orchestrator walks features in exactly this
    /// order so identical input always yields identically ordered output.
    pub const ALL: [Feature; 3] = [Self::Actions, Self::Docker, Self::Flux];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Docker => "docker",
            Self::Flux => "flux",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "actions" | "github-actions" => Ok(Self::Actions),
            "docker" => Ok(Self::Docker),
            "flux" | "fluxcd" => Ok(Self::Flux),
            other => Err(DomainError::UnknownFeature {
                feature: other.to_string(),
            }),
        }
    }
}
