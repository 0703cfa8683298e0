//! In-memory template source.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use platform_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{MANIFEST_FILE, Manifest},
    error::PlatformResult,
};

use crate::builtin_templates;

use super::parse_manifest;

/// Thread-safe template source backed by a map of id to body.
///
/// Handy for tests and for embedding the generator with templates that
/// never touch disk. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateSource {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTemplateSource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source seeded with the built-in manifest and templates.
    pub fn with_builtin() -> PlatformResult<Self> {
        let source = Self::new();
        for id in builtin_templates::ids() {
            if let Some(body) = builtin_templates::get(id) {
                source.insert(id, body)?;
            }
        }
        Ok(source)
    }

    /// Insert or replace a file. Use [`MANIFEST_FILE`] for the manifest.
    pub fn insert(&self, id: impl Into<String>, body: impl Into<String>) -> PlatformResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(id.into(), body.into());
        Ok(())
    }

    /// Remove a file, returning whether it was present.
    pub fn remove(&self, id: &str) -> PlatformResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.remove(id).is_some())
    }

    /// Get the number of files.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if source is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateSource for InMemoryTemplateSource {
    fn load(&self, id: &str) -> PlatformResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                template: id.to_string(),
            }
            .into()
        })
    }

    fn manifest(&self) -> PlatformResult<Manifest> {
        let content = self.load(MANIFEST_FILE).map_err(|_| {
            ApplicationError::ManifestUnavailable {
                reason: format!("{} not found", MANIFEST_FILE),
            }
        })?;
        parse_manifest(&content)
    }
}
