//! # tabex-rs
//!
//! CSV export toolkit for tabular business records with pluggable
//! delivery sinks.
//!
//! The crate renders typed records into timestamped CSV documents and
//! delivers them through an injectable sink, keeping the formatting core
//! pure and testable without any host environment.
//!
//! ## Features
//!
//! - **Request builder**: filename base, ordered headers, record rows,
//!   optional per-row transform
//! - **Faithful quoting**: fields are wrapped only when they contain the
//!   separator, the delimiter, or a newline; embedded delimiters are
//!   doubled
//! - **Timestamped filenames**: `{base}-{YYYY-MM-DD}-{HHMMSS}.csv`
//! - **Pluggable delivery**: directory sink, in-memory capture, or any
//!   `io::Write`
//! - **Compression**: optional gzip or bzip2 of the delivered file
//! - **Formatting helpers**: currency, date, and datetime stringifiers
//!   shared with billing callers
//!
//! ## Export Example
//!
//! ```
//! use serde_json::json;
//! use tabex_rs::export::{export_to_sink, CsvExportOptions, ExportRequest};
//! use tabex_rs::sink::MemorySink;
//! use tabex_rs::types::record;
//!
//! # fn main() -> Result<(), tabex_rs::ExportError> {
//! let request = ExportRequest::new("invoices")
//!     .headers(["number", "client", "total"])
//!     .row(record(json!({
//!         "number": "INV-0042",
//!         "client": "Acme GmbH",
//!         "total": "1200.00",
//!     })));
//!
//! let mut sink = MemorySink::new();
//! let summary = export_to_sink(&request, &CsvExportOptions::default(), &mut sink)?;
//! println!("wrote {} rows to {}", summary.rows, summary.filename);
//! # Ok(())
//! # }
//! ```
//!
//! ## Directory Delivery Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use serde_json::json;
//! use tabex_rs::export::{export_to_file, Compression, CsvExportOptions, ExportRequest};
//! use tabex_rs::types::record;
//!
//! # fn main() -> Result<(), tabex_rs::ExportError> {
//! let request = ExportRequest::new("payments")
//!     .headers(["client", "amount"])
//!     .row(record(json!({"client": "Acme GmbH", "amount": 99.5})));
//!
//! let options = CsvExportOptions::default().compression(Compression::Gzip);
//! export_to_file(&request, Path::new("/home/user/Downloads"), &options)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Row Transform Example
//!
//! ```
//! use serde_json::json;
//! use tabex_rs::export::{export_to_string, CsvExportOptions, ExportRequest};
//! use tabex_rs::types::{format_currency, record};
//!
//! # fn main() -> Result<(), tabex_rs::ExportError> {
//! let request = ExportRequest::new("payments")
//!     .headers(["client", "amount"])
//!     .row(record(json!({"client": "Acme GmbH", "amount": 99.5})))
//!     .transform(|row| {
//!         let mut out = row.clone();
//!         let amount = row.get("amount").and_then(|v| v.as_f64());
//!         out.insert("amount".to_string(), json!(format_currency(amount)));
//!         out
//!     });
//!
//! let document = export_to_string(&request, &CsvExportOptions::default())?;
//! assert!(document.content.ends_with("Acme GmbH,99.50"));
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod error;
pub mod export;
pub mod sink;
pub mod types;

// =============================================================================
// Error Types
// =============================================================================

/// Re-export the error type for convenient error handling.
pub use error::ExportError;

// =============================================================================
// Export Types
// =============================================================================

/// Export request, options, rendering, and delivery operations.
///
/// The export module provides the request builder, the pure rendering
/// core, and the layered `export_to_*` delivery functions.
pub use export::{
    export_to_file, export_to_sink, export_to_sink_at, export_to_string, export_to_writer,
    Compression, CsvExportOptions, ExportRequest, ExportSummary, ExportedDocument, RowSeparator,
    RowTransform, CONTENT_TYPE,
};

// =============================================================================
// Sink Types
// =============================================================================

/// Re-export delivery sinks and the sink capability trait.
pub use sink::{DirectorySink, ExportSink, MemorySink};

// =============================================================================
// Record & Formatting Types
// =============================================================================

/// Re-export the record representation and the pure formatting helpers.
pub use types::{format_currency, format_date, format_date_time, record, Record};
