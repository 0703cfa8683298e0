//! Built-in template set.
//!
//! The manifest and every template body ship inside the binary via
//! `include_str!`, so generation works without any files on disk. An
//! override directory (see [`LayeredTemplateSource`]) can shadow each file
//! individually.
//!
//! [`LayeredTemplateSource`]: crate::template_source::LayeredTemplateSource

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use platform_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{FileMode, MANIFEST_FILE},
    error::PlatformResult,
};

/// Every embedded file as `(id, body)`, manifest first.
static BUILTIN_FILES: &[(&str, &str)] = &[
    (MANIFEST_FILE, include_str!("../templates/manifest.yaml")),
    ("go.yaml.tmpl", include_str!("../templates/go.yaml.tmpl")),
    (
        "typescript.yaml.tmpl",
        include_str!("../templates/typescript.yaml.tmpl"),
    ),
    (
        "python.yaml.tmpl",
        include_str!("../templates/python.yaml.tmpl"),
    ),
    ("Dockerfile.tmpl", include_str!("../templates/Dockerfile.tmpl")),
    (
        "docker-build.yaml.tmpl",
        include_str!("../templates/docker-build.yaml.tmpl"),
    ),
    ("fluxcd.yaml.tmpl", include_str!("../templates/fluxcd.yaml.tmpl")),
];

/// Look up an embedded file by id.
pub fn get(id: &str) -> Option<&'static str> {
    BUILTIN_FILES
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, body)| *body)
}

/// Ids of all embedded files, manifest included.
pub fn ids() -> impl Iterator<Item = &'static str> {
    BUILTIN_FILES.iter().map(|(name, _)| *name)
}

/// Copy the built-in set into `dir` so it can be edited and used as an
/// override directory.
///
/// Existing files are left alone unless `force` is set, in which case they
/// are overwritten. Returns the paths written.
#[instrument(skip(filesystem), fields(dir = %dir.display()))]
pub fn eject(
    filesystem: &dyn Filesystem,
    dir: &Path,
    force: bool,
) -> PlatformResult<Vec<PathBuf>> {
    if !force {
        if let Some(existing) = ids().map(|id| dir.join(id)).find(|p| filesystem.exists(p)) {
            return Err(ApplicationError::FileExists { path: existing }.into());
        }
    }

    filesystem.create_dir_all(dir)?;

    let mut written = Vec::with_capacity(BUILTIN_FILES.len());
    for (id, body) in BUILTIN_FILES {
        let path = dir.join(id);
        filesystem.write_file(&path, body, FileMode::REGULAR)?;
        written.push(path);
    }

    info!(files = written.len(), "Built-in templates ejected");
    Ok(written)
}
