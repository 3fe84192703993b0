//! Tracer provider backed by a file span exporter.
//!
//! The plugin runs in a WASI sandbox with no network, so finished spans are
//! written as OTLP JSON lines to a rotating file instead of a collector.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;

/// Writes each exported batch as one JSON line.
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: FileWriter, formatter: SpanFormatter) -> Self {
        Self {
            writer,
            formatter,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a provider that exports every span synchronously to `file_path`.
///
/// `scope` names the instrumentation scope in the written documents.
pub fn create_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(
        FileWriter::new(file_path),
        SpanFormatter::new(resource.clone(), scope),
    );

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;
    use std::fs;
    use tempfile::tempdir;

    fn exporter(path: PathBuf) -> FileSpanExporter {
        let resource = Resource::new(vec![KeyValue::new("service.name", "test")]);
        FileSpanExporter::new(FileWriter::new(path), SpanFormatter::new(resource, "test"))
    }

    #[test]
    fn batch_is_written_as_one_json_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("otlp.json");

        exporter(path.clone()).write_batch(&[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        let doc: serde_json::Value = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(doc["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], "test");
    }

    #[test]
    fn export_after_shutdown_fails_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("otlp.json");
        let mut exporter = exporter(path.clone());

        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
        assert!(!path.exists());
    }
}
