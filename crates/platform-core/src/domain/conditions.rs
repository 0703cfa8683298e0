//! Generation condition registry.
//!
//! # Design Rationale
//!
//! Manifest entries name their condition with a string tag so that an
//! override manifest can re-target or add entries without recompiling the
//! generator. Each tag is described exactly once by a [`ConditionDef`] in
//! [`CONDITION_REGISTRY`]: its feature family and its predicate.
//!
//! Evaluation is total. A tag that is not in the registry evaluates to
//! `false` and belongs to no feature, so an unknown condition never renders.
//!
//! # Adding a New Condition
//!
//! 1. Add a variant to [`Condition`]
//! 2. Add one [`ConditionDef`] entry to [`CONDITION_REGISTRY`]

use std::fmt;
use std::str::FromStr;

use crate::domain::{
    entities::config::ScaffoldConfig,
    value_objects::{Feature, WorkflowFlavor},
};

/// Every recognized condition tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    WorkflowGo,
    WorkflowTypeScript,
    WorkflowPython,
    UseDocker,
    WithDocker,
    WithFlux,
    WithActions,
}

/// Registry entry for one condition.
#[derive(Debug, Clone, Copy)]
pub struct ConditionDef {
    pub condition: Condition,

    /// The tag as written in `manifest.yaml`.
    pub tag: &'static str,

    /// The only feature allowed to select entries carrying this tag.
    pub feature: Feature,

    pub predicate: fn(&ScaffoldConfig) -> bool,
}

fn workflow_is(config: &ScaffoldConfig, flavor: WorkflowFlavor) -> bool {
    config.is_enabled(Feature::Actions) && config.workflow_flavor() == Ok(flavor)
}

/// Single source of truth for condition semantics.
pub static CONDITION_REGISTRY: &[ConditionDef] = &[
    ConditionDef {
        condition: Condition::WorkflowGo,
        tag: "workflow_go",
        feature: Feature::Actions,
        predicate: |c| workflow_is(c, WorkflowFlavor::Go),
    },
    ConditionDef {
        condition: Condition::WorkflowTypeScript,
        tag: "workflow_typescript",
        feature: Feature::Actions,
        predicate: |c| workflow_is(c, WorkflowFlavor::TypeScript),
    },
    ConditionDef {
        condition: Condition::WorkflowPython,
        tag: "workflow_python",
        feature: Feature::Actions,
        predicate: |c| workflow_is(c, WorkflowFlavor::Python),
    },
    // Legacy spelling. Since the two docker toggles are folded into one at
    // the boundary, it is equivalent to `with_docker`.
    ConditionDef {
        condition: Condition::UseDocker,
        tag: "use_docker",
        feature: Feature::Docker,
        predicate: |c| c.is_enabled(Feature::Docker),
    },
    ConditionDef {
        condition: Condition::WithDocker,
        tag: "with_docker",
        feature: Feature::Docker,
        predicate: |c| c.is_enabled(Feature::Docker),
    },
    ConditionDef {
        condition: Condition::WithFlux,
        tag: "with_flux",
        feature: Feature::Flux,
        predicate: |c| c.is_enabled(Feature::Flux),
    },
    ConditionDef {
        condition: Condition::WithActions,
        tag: "with_actions",
        feature: Feature::Actions,
        predicate: |c| c.is_enabled(Feature::Actions),
    },
];

impl Condition {
    fn def(self) -> &'static ConditionDef {
        CONDITION_REGISTRY
            .iter()
            .find(|d| d.condition == self)
            .expect("every Condition variant has a registry entry")
    }

    pub fn as_str(self) -> &'static str {
        self.def().tag
    }

    pub fn feature(self) -> Feature {
        self.def().feature
    }

    pub fn evaluate(self, config: &ScaffoldConfig) -> bool {
        (self.def().predicate)(config)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker error for tags absent from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CONDITION_REGISTRY
            .iter()
            .find(|d| d.tag == s)
            .map(|d| d.condition)
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

/// Evaluate a condition tag against `config`. Unknown tags are `false`.
pub fn evaluate(tag: &str, config: &ScaffoldConfig) -> bool {
    tag.parse::<Condition>()
        .map(|c| c.evaluate(config))
        .unwrap_or(false)
}
