//! Delivery sinks for exported documents.
//!
//! The original host for these exports was a browser download; the sink
//! trait abstracts that side effect so the rendering core stays testable
//! in any environment. Two implementations ship with the crate:
//!
//! - [`DirectorySink`] writes into an existing directory on the local
//!   filesystem (the native analog of a download folder)
//! - [`MemorySink`] captures documents in memory for tests and headless
//!   callers

pub mod directory;
pub mod memory;

pub use directory::DirectorySink;
pub use memory::MemorySink;

use crate::error::ExportError;

/// Destination capability for exported documents.
///
/// A sink takes ownership of the document bytes per call and must not
/// retain partial state across a failed write.
pub trait ExportSink {
    /// Writes one document under the given filename.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the document cannot be delivered.
    /// Implementations with their own error types should map them to
    /// [`ExportError::Sink`].
    fn write(&mut self, filename: &str, bytes: &[u8]) -> Result<(), ExportError>;
}
