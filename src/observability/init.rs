//! Tracing subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::{tracer, SCOPE_NAME, SERVICE_NAME, TRACE_FILE_NAME};
use crate::Config;

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber: `EnvFilter` from `trace_level`, then an
/// OpenTelemetry layer exporting to `<data dir>/barlekha-directory-otlp.json`.
///
/// Does nothing if the data directory cannot be created. Only the first call
/// in a process takes effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SCOPE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
