use crate::domain::{
    entities::{RenderedFile, ScaffoldConfig, rendered_file::ensure_unique_paths},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ScaffoldConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_output(files: &[RenderedFile]) -> Result<(), DomainError> {
        ensure_unique_paths(files)
    }
}
