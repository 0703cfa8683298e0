use std::collections::HashSet;

use crate::domain::{
    entities::common::{FileMode, RelativePath},
    error::DomainError,
};

/// One fully rendered output file, ready for the caller to persist.
///
/// This is the output of the generation process.
/// It contains no business logic, only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    path: RelativePath,
    content: String,
    mode: FileMode,
}

impl RenderedFile {
    pub fn new(path: RelativePath, content: String, mode: FileMode) -> Self {
        Self {
            path,
            content,
            mode,
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Labeled block used when files are handed back as text instead of
    /// being written: `--- FILE: <path> ---\n<content>`.
    pub fn to_text_block(&self) -> String {
        format!("--- FILE: {} ---\n{}", self.path, self.content)
    }
}

/// Reject a file set in which two entries share an output path.
pub fn ensure_unique_paths(files: &[RenderedFile]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for file in files {
        if !seen.insert(file.path()) {
            return Err(DomainError::DuplicatePath {
                path: file.path().to_string(),
            });
        }
    }
    Ok(())
}
