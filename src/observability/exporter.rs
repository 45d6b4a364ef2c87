//! OpenTelemetry span exporter writing one JSON object per finished span.
//!
//! ```json
//! {"service":"userdeck","name":"handle_event","trace_id":"4bf9…","span_id":"00f0…",
//!  "parent_span_id":null,"start":"2026-01-02T03:04:05.000006Z",
//!  "end":"2026-01-02T03:04:05.000107Z","duration_us":101,
//!  "attributes":{"event_type":"Submit"},"status":"unset"}
//! ```

use super::writer::{RotatingWriter, DEFAULT_MAX_BYTES};
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::SystemTime;

/// One line of the span file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanRecord {
    pub service: String,
    pub name: String,
    pub trace_id: String,
    pub span_id: String,
    pub parent_span_id: Option<String>,
    pub start: String,
    pub end: String,
    pub duration_us: u128,
    pub attributes: BTreeMap<String, JsonValue>,
    pub status: String,
}

impl SpanRecord {
    fn from_span(service: &str, span: &SpanData) -> Self {
        let parent_span_id =
            (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
        let status = match &span.status {
            Status::Unset => "unset".to_string(),
            Status::Ok => "ok".to_string(),
            Status::Error { description } => format!("error: {description}"),
        };

        Self {
            service: service.to_string(),
            name: span.name.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            start: rfc3339(span.start_time),
            end: rfc3339(span.end_time),
            duration_us: span
                .end_time
                .duration_since(span.start_time)
                .map_or(0, |elapsed| elapsed.as_micros()),
            attributes: attributes_json(&span.attributes),
            status,
        }
    }
}

fn rfc3339(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn attributes_json(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), value_json(&kv.value)))
        .collect()
}

fn value_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}

/// Span exporter backed by a [`RotatingWriter`].
#[derive(Debug)]
pub struct JsonLinesExporter {
    service: String,
    writer: RotatingWriter,
    is_shutdown: bool,
}

impl JsonLinesExporter {
    pub fn new(path: PathBuf, service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            writer: RotatingWriter::new(path, DEFAULT_MAX_BYTES),
            is_shutdown: false,
        }
    }

    fn write_batch(&mut self, batch: &[SpanData]) -> ExportResult {
        for span in batch {
            let record = SpanRecord::from_span(&self.service, span);
            let line = serde_json::to_string(&record).map_err(|e| TraceError::from(e.to_string()))?;
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        if let Some(service) = resource.get(opentelemetry::Key::from_static_str("service.name")) {
            self.service = service.to_string();
        }
    }
}

/// Builds a tracer provider that exports every span to `path` as it ends.
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter::new(path, env!("CARGO_PKG_NAME"));

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
