//! Export functionality: request construction, CSV rendering, and
//! delivery.
//!
//! # Architecture
//!
//! An export is a single-shot pure transformation followed by one
//! side-effecting delivery:
//!
//! 1. Build an [`ExportRequest`] (filename base, headers, rows, optional
//!    row transform)
//! 2. Rendering produces an [`ExportedDocument`] — CSV text plus a
//!    timestamped filename
//! 3. Delivery hands the bytes to a destination: an
//!    [`ExportSink`](crate::sink::ExportSink), a directory, any
//!    `io::Write`, or back to the caller in memory
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tabex_rs::export::{export_to_sink, CsvExportOptions, ExportRequest};
//! use tabex_rs::sink::MemorySink;
//! use tabex_rs::types::record;
//!
//! # fn main() -> Result<(), tabex_rs::ExportError> {
//! let request = ExportRequest::new("invoices")
//!     .headers(["name", "amount"])
//!     .row(record(json!({"name": "Jane, Doe", "amount": 100})));
//!
//! let mut sink = MemorySink::new();
//! let summary = export_to_sink(&request, &CsvExportOptions::default(), &mut sink)?;
//! assert_eq!(summary.rows, 1);
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod request;

// Re-export CSV types for convenience
pub use csv::{
    derive_filename, export_to_file, export_to_sink, export_to_sink_at, export_to_string,
    export_to_writer, format_csv_row, render_document, Compression, CsvExportOptions,
    ExportSummary, ExportedDocument, RowSeparator, CONTENT_TYPE,
};

pub use request::{ExportRequest, RowTransform};
