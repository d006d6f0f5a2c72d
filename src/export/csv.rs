//! CSV rendering and delivery.
//!
//! This module is the core of the crate: it renders an [`ExportRequest`]
//! into a timestamped CSV document and delivers it to a destination.
//!
//! # Architecture
//!
//! Rendering and delivery are split so the formatting logic stays pure:
//!
//! 1. [`render_document`] turns a request into an [`ExportedDocument`]
//!    (content plus derived filename) from an explicit timestamp
//! 2. The `export_to_*` functions stamp the current local time, apply
//!    optional compression, and hand the bytes to a destination
//! 3. Destinations are polymorphic: a sink, a directory, any `io::Write`,
//!    or an in-memory document
//!
//! The rendered document carries a two-line `Exported on:` preamble by
//! default. The preamble is a deviation from strict RFC 4180; disable it
//! with [`CsvExportOptions::metadata_preamble`] for consumers that expect
//! tabular-only files.

use std::io::Write;
use std::path::Path;

use bzip2::write::BzEncoder;
use chrono::{Local, NaiveDateTime};
use flate2::write::GzEncoder;

use crate::error::ExportError;
use crate::export::request::ExportRequest;
use crate::sink::{DirectorySink, ExportSink};
use crate::types::cell_text;

/// MIME type of every exported document.
pub const CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

/// Row separator options for CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowSeparator {
    /// Line feed (Unix-style)
    #[default]
    LF,
    /// Carriage return (old Mac-style)
    CR,
    /// Carriage return + line feed (Windows-style)
    CRLF,
}

impl RowSeparator {
    /// Get the literal separator string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowSeparator::LF => "\n",
            RowSeparator::CR => "\r",
            RowSeparator::CRLF => "\r\n",
        }
    }
}

/// Compression applied to the delivered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// No compression
    #[default]
    None,
    /// Gzip compression (.gz extension)
    Gzip,
    /// Bzip2 compression (.bz2 extension)
    Bzip2,
}

impl Compression {
    /// Get the file extension for the compression type.
    pub fn extension(&self) -> &'static str {
        match self {
            Compression::None => "",
            Compression::Gzip => ".gz",
            Compression::Bzip2 => ".bz2",
        }
    }
}

/// Options for CSV export configuration.
#[derive(Debug, Clone)]
pub struct CsvExportOptions {
    /// Column separator character (default: ',').
    pub column_separator: char,

    /// Column delimiter character for quoting (default: '"').
    pub column_delimiter: char,

    /// Row separator (default: LF).
    pub row_separator: RowSeparator,

    /// Whether to prepend the two-line `Exported on:` preamble
    /// (default: true). Disable for strictly RFC 4180 tabular output.
    pub metadata_preamble: bool,

    /// Compression applied to the delivered file (default: None).
    pub compression: Compression,
}

impl Default for CsvExportOptions {
    fn default() -> Self {
        Self {
            column_separator: ',',
            column_delimiter: '"',
            row_separator: RowSeparator::LF,
            metadata_preamble: true,
            compression: Compression::None,
        }
    }
}

impl CsvExportOptions {
    /// Creates new export options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column separator character.
    #[must_use]
    pub fn column_separator(mut self, sep: char) -> Self {
        self.column_separator = sep;
        self
    }

    /// Sets the column delimiter (quote) character.
    #[must_use]
    pub fn column_delimiter(mut self, delim: char) -> Self {
        self.column_delimiter = delim;
        self
    }

    /// Sets the row separator.
    #[must_use]
    pub fn row_separator(mut self, sep: RowSeparator) -> Self {
        self.row_separator = sep;
        self
    }

    /// Sets whether the metadata preamble is emitted.
    #[must_use]
    pub fn metadata_preamble(mut self, enabled: bool) -> Self {
        self.metadata_preamble = enabled;
        self
    }

    /// Sets the compression type.
    #[must_use]
    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }
}

/// A rendered export: CSV text plus the derived timestamped filename.
///
/// The document is ephemeral. Ownership transfers to a sink (or the
/// caller) immediately after rendering; nothing is persisted by this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// Derived filename, `{base}-{YYYY-MM-DD}-{HHMMSS}.csv`, plus the
    /// compression extension when compression is enabled.
    pub filename: String,

    /// Rendered CSV text, including the metadata preamble when enabled.
    pub content: String,
}

impl ExportedDocument {
    /// MIME type of the document content.
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    /// Consumes the document and returns its UTF-8 bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }
}

/// Outcome of a delivered export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Filename the destination received.
    pub filename: String,

    /// Number of data rows written (headers and preamble excluded).
    pub rows: u64,

    /// Number of bytes handed to the destination, after compression.
    pub bytes: u64,
}

/// Formats one row of cell values as a CSV line.
///
/// A field is wrapped in delimiters when it contains the separator, the
/// delimiter, or any newline character; embedded delimiters are escaped
/// by doubling them. Fields that need no quoting are never wrapped.
pub fn format_csv_row<I, T>(fields: I, separator: char, delimiter: char) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut line = String::new();
    let mut first = true;

    for field in fields {
        if !first {
            line.push(separator);
        }
        first = false;

        let value = field.as_ref();
        let needs_quoting = value.contains(separator)
            || value.contains(delimiter)
            || value.contains('\n')
            || value.contains('\r');

        if needs_quoting {
            line.push(delimiter);
            for ch in value.chars() {
                if ch == delimiter {
                    line.push(delimiter);
                }
                line.push(ch);
            }
            line.push(delimiter);
        } else {
            line.push_str(value);
        }
    }

    line
}

/// Derives the timestamped filename for an export.
///
/// The calendar date is formatted `YYYY-MM-DD` and the time of day
/// `HHMMSS` (colons stripped), joined to the base with hyphens.
pub fn derive_filename(base: &str, stamp: NaiveDateTime, compression: Compression) -> String {
    format!(
        "{}-{}-{}.csv{}",
        base,
        stamp.format("%Y-%m-%d"),
        stamp.format("%H%M%S"),
        compression.extension()
    )
}

/// Renders a request into an [`ExportedDocument`] from an explicit
/// timestamp.
///
/// This is the pure core of the exporter: no clock, no I/O, no shared
/// state between invocations. The `export_to_*` functions stamp the
/// current local time and delegate here.
///
/// # Errors
///
/// Returns [`ExportError::InvalidRequest`] if the filename base is empty.
pub fn render_document(
    request: &ExportRequest,
    options: &CsvExportOptions,
    stamp: NaiveDateTime,
) -> Result<ExportedDocument, ExportError> {
    if request.filename.is_empty() {
        return Err(ExportError::InvalidRequest {
            message: "filename base must not be empty".to_string(),
        });
    }

    let separator = options.column_separator;
    let delimiter = options.column_delimiter;

    let mut lines = Vec::with_capacity(request.rows.len() + 3);

    // Metadata lines are human-readable, not CSV-structured.
    if options.metadata_preamble {
        lines.push(format!(
            "Exported on: {}",
            stamp.format("%m/%d/%Y, %H:%M:%S")
        ));
        lines.push(String::new());
    }

    // Headers are trusted literal identifiers and are never quoted.
    let mut header_line = String::new();
    for (i, header) in request.headers.iter().enumerate() {
        if i > 0 {
            header_line.push(separator);
        }
        header_line.push_str(header);
    }
    lines.push(header_line);

    for row in &request.rows {
        let processed = match &request.transform {
            Some(transform) => transform(row),
            None => row.clone(),
        };
        let cells = request
            .headers
            .iter()
            .map(|header| cell_text(processed.get(header)));
        lines.push(format_csv_row(cells, separator, delimiter));
    }

    Ok(ExportedDocument {
        filename: derive_filename(&request.filename, stamp, options.compression),
        content: lines.join(options.row_separator.as_str()),
    })
}

/// Exports a request through a sink, stamped with the current local time.
///
/// # Errors
///
/// Returns `ExportError` if rendering, compression, or the sink write
/// fails. The failure is logged before it is returned.
pub fn export_to_sink(
    request: &ExportRequest,
    options: &CsvExportOptions,
    sink: &mut dyn ExportSink,
) -> Result<ExportSummary, ExportError> {
    export_to_sink_at(request, options, sink, Local::now().naive_local())
}

/// Exports a request through a sink from an explicit timestamp.
///
/// Deterministic variant of [`export_to_sink`] for callers that control
/// the clock.
///
/// # Errors
///
/// Same as [`export_to_sink`].
pub fn export_to_sink_at(
    request: &ExportRequest,
    options: &CsvExportOptions,
    sink: &mut dyn ExportSink,
    stamp: NaiveDateTime,
) -> Result<ExportSummary, ExportError> {
    let result = deliver(request, options, sink, stamp);
    if let Err(ref err) = result {
        log::error!("CSV export of '{}' failed: {err}", request.filename);
    }
    result
}

fn deliver(
    request: &ExportRequest,
    options: &CsvExportOptions,
    sink: &mut dyn ExportSink,
    stamp: NaiveDateTime,
) -> Result<ExportSummary, ExportError> {
    let document = render_document(request, options, stamp)?;
    let rows = request.rows.len() as u64;

    let ExportedDocument { filename, content } = document;
    let bytes = compress(content.into_bytes(), options.compression)?;

    sink.write(&filename, &bytes)?;
    log::debug!("exported {rows} rows ({} bytes) to {filename}", bytes.len());

    Ok(ExportSummary {
        filename,
        rows,
        bytes: bytes.len() as u64,
    })
}

/// Exports a request into a directory on the local filesystem.
///
/// Convenience over [`DirectorySink`]; the directory must already exist.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedEnvironment`] if `dir` is not a
/// usable directory, or any delivery error from [`export_to_sink`].
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use serde_json::json;
/// use tabex_rs::export::{export_to_file, CsvExportOptions, ExportRequest};
/// use tabex_rs::types::record;
///
/// # fn main() -> Result<(), tabex_rs::ExportError> {
/// let request = ExportRequest::new("invoices")
///     .headers(["name", "amount"])
///     .row(record(json!({"name": "Jane Doe", "amount": 100})));
///
/// let summary = export_to_file(
///     &request,
///     Path::new("/tmp/exports"),
///     &CsvExportOptions::default(),
/// )?;
/// println!("wrote {}", summary.filename);
/// # Ok(())
/// # }
/// ```
pub fn export_to_file(
    request: &ExportRequest,
    dir: &Path,
    options: &CsvExportOptions,
) -> Result<ExportSummary, ExportError> {
    let mut sink = DirectorySink::new(dir)?;
    export_to_sink(request, options, &mut sink)
}

/// Renders a request and writes the (possibly compressed) bytes to any
/// writer.
///
/// The derived filename is still returned in the summary so callers can
/// label the stream.
///
/// # Errors
///
/// Returns `ExportError` if rendering, compression, or the write fails.
pub fn export_to_writer<W: Write>(
    request: &ExportRequest,
    options: &CsvExportOptions,
    writer: &mut W,
) -> Result<ExportSummary, ExportError> {
    let document = render_document(request, options, Local::now().naive_local())?;
    let rows = request.rows.len() as u64;

    let ExportedDocument { filename, content } = document;
    let bytes = compress(content.into_bytes(), options.compression)?;

    writer.write_all(&bytes)?;
    writer.flush()?;

    Ok(ExportSummary {
        filename,
        rows,
        bytes: bytes.len() as u64,
    })
}

/// Renders a request in memory, stamped with the current local time.
///
/// No destination is involved; the caller receives the uncompressed
/// document directly.
///
/// # Errors
///
/// Returns [`ExportError::InvalidRequest`] if the request is unusable.
pub fn export_to_string(
    request: &ExportRequest,
    options: &CsvExportOptions,
) -> Result<ExportedDocument, ExportError> {
    render_document(request, options, Local::now().naive_local())
}

fn compress(bytes: Vec<u8>, compression: Compression) -> Result<Vec<u8>, ExportError> {
    match compression {
        Compression::None => Ok(bytes),
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder
                .write_all(&bytes)
                .map_err(|e| ExportError::Compression(e.to_string()))?;
            encoder
                .finish()
                .map_err(|e| ExportError::Compression(e.to_string()))
        }
        Compression::Bzip2 => {
            let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::default());
            encoder
                .write_all(&bytes)
                .map_err(|e| ExportError::Compression(e.to_string()))?;
            encoder
                .finish()
                .map_err(|e| ExportError::Compression(e.to_string()))
        }
    }
}
