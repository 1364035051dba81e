//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use astrogen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{AstrogenError, AstrogenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> AstrogenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> AstrogenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> AstrogenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> AstrogenError {
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
    fn writes_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("src/components");
        let file = nested.join("card.astro");

        assert!(!fs.exists(&nested));
        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, "---\n---\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_file(&file).unwrap(), "---\n---\n");
    }

    #[test]
    fn write_into_missing_directory_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem
            .write_file(&dir.path().join("missing/file.md"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            AstrogenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
