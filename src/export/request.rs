//! Export request construction.

use std::fmt;

use crate::types::Record;

/// Row transform applied to every record before rendering.
///
/// The transform receives each original record and returns the record to
/// render; the originals are left untouched.
pub type RowTransform = dyn Fn(&Record) -> Record + Send + Sync;

/// A single export request: filename base, ordered headers, record rows,
/// and an optional per-row transform.
///
/// Header order defines column order in every emitted row. A record
/// missing a header key yields an empty cell; extra record keys are
/// ignored.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tabex_rs::export::ExportRequest;
/// use tabex_rs::types::record;
///
/// let request = ExportRequest::new("invoices")
///     .headers(["number", "client", "total"])
///     .row(record(json!({
///         "number": "INV-0042",
///         "client": "Acme GmbH",
///         "total": "1200.00",
///     })));
/// ```
pub struct ExportRequest {
    /// Base name of the exported file, without extension or timestamp.
    pub filename: String,

    /// Column keys in display order.
    pub headers: Vec<String>,

    /// Record rows, in output order.
    pub rows: Vec<Record>,

    /// Optional transform applied to every record before rendering.
    pub transform: Option<Box<RowTransform>>,
}

impl ExportRequest {
    /// Creates a request with the given filename base (no extension).
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            headers: Vec::new(),
            rows: Vec::new(),
            transform: None,
        }
    }

    /// Sets the column headers in display order.
    #[must_use]
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the record rows.
    #[must_use]
    pub fn rows(mut self, rows: Vec<Record>) -> Self {
        self.rows = rows;
        self
    }

    /// Appends a single record row.
    #[must_use]
    pub fn row(mut self, row: Record) -> Self {
        self.rows.push(row);
        self
    }

    /// Sets a transform applied to every record before rendering.
    #[must_use]
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record) -> Record + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("filename", &self.filename)
            .field("headers", &self.headers)
            .field("rows", &self.rows.len())
            .field("transform", &self.transform.is_some())
            .finish()
    }
}
