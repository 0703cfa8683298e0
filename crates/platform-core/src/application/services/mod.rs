//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the enabled features" or
//! "write the rendered files below a directory".

pub mod feature_generator;
pub mod output_writer;
pub mod scaffold_service;

pub use feature_generator::FeatureGenerator;
pub use output_writer::{OutputWriter, WriteOutcome};
pub use scaffold_service::{MappingInfo, ScaffoldService};
