//! OpenTelemetry-based tracing with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/barlekha-directory/barlekha-directory-otlp.json`,
//! rotated at 10 MB with 3 backups. The level comes from the `trace_level`
//! plugin option (default `info`) and accepts any `EnvFilter` directive.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

const SERVICE_NAME: &str = "Barlekha Directory";
const SCOPE_NAME: &str = "barlekha-directory";
const TRACE_FILE_NAME: &str = "barlekha-directory-otlp.json";
