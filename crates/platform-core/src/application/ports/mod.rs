//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `platform-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateSource`: Template and manifest resolution
//!   - `TemplateRenderer`: Template rendering
//!   - `Filesystem`: File operations
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateSource};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer, MockTemplateSource};
