//! Persisting rendered files below an output root.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::RenderedFile,
    error::PlatformResult,
};

/// What happened to one rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// The file existed and overwriting was declined.
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(p) | Self::Skipped(p) => p,
        }
    }
}

/// Writes generated files through the [`Filesystem`] port.
pub struct OutputWriter {
    filesystem: Box<dyn Filesystem>,
}

impl OutputWriter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write every file below `root`.
    ///
    /// `overwrite` is asked once per file that already exists: `Ok(true)`
    /// overwrites, `Ok(false)` skips, an error aborts. All decisions are
    /// collected before the first write, so an abort leaves the tree as it
    /// was.
    #[instrument(skip_all, fields(root = %root.display(), files = files.len()))]
    pub fn write_all<F>(
        &self,
        root: &Path,
        files: &[RenderedFile],
        mut overwrite: F,
    ) -> PlatformResult<Vec<WriteOutcome>>
    where
        F: FnMut(&Path) -> PlatformResult<bool>,
    {
        let mut plan = Vec::with_capacity(files.len());
        for file in files {
            let path = root.join(file.path());
            let write = !self.filesystem.exists(&path) || overwrite(&path)?;
            plan.push((file, path, write));
        }

        let mut outcomes = Vec::with_capacity(plan.len());
        for (file, path, write) in plan {
            if !write {
                warn!(path = %path.display(), "Skipping existing file");
                outcomes.push(WriteOutcome::Skipped(path));
                continue;
            }

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem
                .write_file(&path, file.content(), file.mode())?;
            outcomes.push(WriteOutcome::Written(path));
        }

        info!(
            written = outcomes
                .iter()
                .filter(|o| matches!(o, WriteOutcome::Written(_)))
                .count(),
            "Output written"
        );
        Ok(outcomes)
    }
}
