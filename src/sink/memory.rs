//! In-memory capture of exported documents.

use crate::error::ExportError;
use crate::sink::ExportSink;

/// Captures exported documents in memory.
///
/// Intended for tests and headless callers that post-process the bytes
/// themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured documents, in write order.
    pub fn documents(&self) -> &[(String, Vec<u8>)] {
        &self.documents
    }

    /// The most recently written document, if any.
    pub fn last(&self) -> Option<&(String, Vec<u8>)> {
        self.documents.last()
    }
}

impl ExportSink for MemorySink {
    fn write(&mut self, filename: &str, bytes: &[u8]) -> Result<(), ExportError> {
        self.documents.push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}
