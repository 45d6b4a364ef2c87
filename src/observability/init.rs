//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::infrastructure::spans_path;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an [`EnvFilter`] at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that exports spans to
/// `<data_dir>/userdeck-spans.jsonl`.
///
/// Returns the provider so the caller can flush it on exit. Returns `None`, and
/// installs nothing, if the data directory cannot be created. Calling it twice
/// keeps the first subscriber.
///
/// # Example
///
/// ```no_run
/// use userdeck::observability::init_tracing;
/// use userdeck::Config;
///
/// let config = Config { trace_level: Some("debug".to_string()), ..Config::default() };
/// let provider = init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// # drop(provider);
/// ```
pub fn init_tracing(config: &Config) -> Option<TracerProvider> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return None;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", env!("CARGO_PKG_NAME")),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::create_tracer_provider(spans_path(&config.data_dir), resource);

    let tracer = provider.tracer(env!("CARGO_PKG_NAME"));
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer));

    let _ = subscriber.try_init();
    Some(provider)
}
