//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → otlp.json
//! ```
//!
//! Spans land in `~/.local/share/zellij/item-pager/otlp.json`, one OTLP
//! document per line, rotated at 5 MB with 3 numbered backups. The filter
//! comes from the `trace_level` plugin option (default `info`), using
//! `EnvFilter` directive syntax.
//!
//! - [`init`]: subscriber setup
//! - `tracer`: provider and exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating writer

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME};
