//! Error types shared across the crate.

use std::io;

use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while writing the exported document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The export request is structurally unusable.
    #[error("Invalid export request: {message}")]
    InvalidRequest { message: String },

    /// The sink cannot operate in this environment.
    #[error("Unsupported environment: {message}")]
    UnsupportedEnvironment { message: String },

    /// Delivery failure reported by a sink.
    #[error("Sink error: {message}")]
    Sink { message: String },

    /// Compression encoder failure.
    #[error("Compression error: {0}")]
    Compression(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_display() {
        let err = ExportError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(err.to_string().contains("I/O error"));

        let err = ExportError::UnsupportedEnvironment {
            message: "'/downloads' is not a writable directory".to_string(),
        };
        assert!(err.to_string().contains("Unsupported environment"));
        assert!(err.to_string().contains("/downloads"));

        let err = ExportError::Sink {
            message: "disk full".to_string(),
        };
        assert!(err.to_string().contains("Sink error"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_export_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let export_err: ExportError = io_err.into();

        assert!(matches!(export_err, ExportError::Io(_)));
    }
}
