//! Platform Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `platform`
//! scaffolding generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          platform-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, FeatureGenerator,     │
//! │  OutputWriter)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Source, Renderer, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    platform-adapters (Infrastructure)   │
//! │ (LayeredTemplateSource, MiniJinja, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ScaffoldConfig, Manifest, conditions)  │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use platform_core::prelude::*;
//!
//! let config = ScaffoldConfig::new("acme")
//!     .with_actions(true)
//!     .with_docker(true);
//!
//! // Adapters come from platform-adapters.
//! let service = ScaffoldService::new(source, renderer);
//! for file in service.generate(&config)? {
//!     println!("{}", file.to_text_block());
//! }
//! ```

// Domain layer (pure generation rules)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FeatureGenerator, MappingInfo, OutputWriter, ScaffoldService, WriteOutcome,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        Feature, FileMode, MANIFEST_FILE, Manifest, ManifestDocument, RelativePath,
        RenderContext, RenderedFile, ScaffoldConfig, ScaffoldRequest, TemplateMapping,
        WorkflowFlavor,
    };
    pub use crate::error::{ErrorCategory, PlatformError, PlatformResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
