//! Application layer for the platform generator.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, FeatureGenerator, OutputWriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Condition semantics and validation rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FeatureGenerator,
    MappingInfo, // DTO for manifest listings
    OutputWriter,
    ScaffoldService,
    WriteOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateSource};

pub use error::ApplicationError;
