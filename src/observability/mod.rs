//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → JsonLinesExporter → spans.jsonl
//! ```
//!
//! Each finished span becomes one JSON line in `<data_dir>/userdeck-spans.jsonl`.
//! The file rotates to a single timestamped backup at 5 MB. The level comes from
//! the `trace_level` config key and defaults to `info`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `exporter`: the span exporter and record format
//! - `writer`: rotating JSON-lines file

mod exporter;
mod init;
mod writer;

pub use exporter::SpanRecord;
pub use init::init_tracing;
