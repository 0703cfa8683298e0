//! Override directory first, embedded templates second.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use tracing::{debug, instrument, trace};

use platform_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{MANIFEST_FILE, Manifest},
    error::PlatformResult,
};

use crate::builtin_templates;

use super::parse_manifest;

/// Where a resolved file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Override(PathBuf),
    Builtin,
}

/// Two-layer template source.
///
/// A file present in the override directory wins outright; there is no
/// merging with the built-in file of the same name. The manifest is just
/// another file, so an override `manifest.yaml` replaces the built-in one.
#[derive(Debug, Clone, Default)]
pub struct LayeredTemplateSource {
    override_dir: Option<PathBuf>,
}

impl LayeredTemplateSource {
    /// Built-in templates only.
    pub fn builtin() -> Self {
        Self { override_dir: None }
    }

    /// Built-in templates, shadowed by files in `dir`.
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    /// Resolve `id` and report which layer supplied it.
    #[instrument(skip(self))]
    pub fn resolve(&self, id: &str) -> PlatformResult<(String, Origin)> {
        if let Some(path) = self.override_path(id) {
            match fs::read_to_string(&path) {
                Ok(content) => {
                    debug!(path = %path.display(), "Resolved from override directory");
                    return Ok((content, Origin::Override(path)));
                }
                // Unreadable or absent: fall through to the built-ins.
                Err(e) => trace!(path = %path.display(), error = %e, "Override miss"),
            }
        }

        builtin_templates::get(id)
            .map(|body| (body.to_string(), Origin::Builtin))
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    template: id.to_string(),
                }
                .into()
            })
    }

    /// Path of `id` inside the override directory, if it may be read there.
    ///
    /// Only plain file names qualify; ids with separators or `..` never
    /// leave the built-in set.
    fn override_path(&self, id: &str) -> Option<PathBuf> {
        let dir = self.override_dir.as_ref()?;
        let mut components = Path::new(id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if !id.contains(['/', '\\']) => {
                Some(dir.join(name))
            }
            _ => None,
        }
    }
}

impl TemplateSource for LayeredTemplateSource {
    fn load(&self, id: &str) -> PlatformResult<String> {
        self.resolve(id).map(|(content, _)| content)
    }

    fn manifest(&self) -> PlatformResult<Manifest> {
        let (content, origin) = self.resolve(MANIFEST_FILE).map_err(|_| {
            ApplicationError::ManifestUnavailable {
                reason: format!("{} not found", MANIFEST_FILE),
            }
        })?;
        debug!(origin = ?origin, "Manifest resolved");

        parse_manifest(&content)
    }
}
