//! Filesystem delivery into an existing directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::sink::ExportSink;

/// Writes exported documents into an existing directory.
///
/// The target is validated up front: a missing or non-directory path
/// fails with [`ExportError::UnsupportedEnvironment`] instead of silently
/// doing nothing.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink targeting `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedEnvironment`] if `dir` does not
    /// exist or is not a directory.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, ExportError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ExportError::UnsupportedEnvironment {
                message: format!("'{}' is not a writable directory", dir.display()),
            });
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// The target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn write(&mut self, filename: &str, bytes: &[u8]) -> Result<(), ExportError> {
        // Derived filenames never contain separators; reject any that do
        // so a hostile base name cannot escape the directory.
        if filename.contains('/') || filename.contains('\\') {
            return Err(ExportError::InvalidRequest {
                message: format!("filename '{filename}' must not contain path separators"),
            });
        }
        fs::write(self.dir.join(filename), bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file_in_directory() {
        let dir = TempDir::new().expect("temp dir");
        let mut sink = DirectorySink::new(dir.path()).unwrap();

        sink.write("report.csv", b"a,b\n1,2").unwrap();

        let written = fs::read(dir.path().join("report.csv")).unwrap();
        assert_eq!(written, b"a,b\n1,2");
    }

    #[test]
    fn test_missing_directory_is_unsupported_environment() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("downloads");

        let result = DirectorySink::new(&missing);
        assert!(matches!(
            result,
            Err(ExportError::UnsupportedEnvironment { .. })
        ));
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        let result = DirectorySink::new(&file);
        assert!(matches!(
            result,
            Err(ExportError::UnsupportedEnvironment { .. })
        ));
    }

    #[test]
    fn test_rejects_path_separators_in_filename() {
        let dir = TempDir::new().expect("temp dir");
        let mut sink = DirectorySink::new(dir.path()).unwrap();

        let result = sink.write("../escape.csv", b"x");
        assert!(matches!(result, Err(ExportError::InvalidRequest { .. })));
    }
}
