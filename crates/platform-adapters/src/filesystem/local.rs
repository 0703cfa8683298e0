//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use platform_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::FileMode,
    error::{PlatformError, PlatformResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> PlatformResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str, mode: FileMode) -> PlatformResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;
        set_mode(path, mode)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: FileMode) -> PlatformResult<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode.bits()))
        .map_err(|e| map_io_error(path, e, "set permissions"))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: FileMode) -> PlatformResult<()> {
    // No permission bits to apply.
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PlatformError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_content_below_created_dirs() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join(".github/workflows/go.yaml");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "name: acme\n", FileMode::REGULAR).unwrap();

        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name: acme\n");
    }

    #[cfg(unix)]
    #[test]
    fn applies_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("run.sh");

        fs.write_file(&path, "#!/bin/sh\n", FileMode::EXECUTABLE).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&dir.path().join("no/such/file"), "", FileMode::REGULAR)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
