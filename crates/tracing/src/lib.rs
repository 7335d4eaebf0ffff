//! Tracing management for atlas.
//!
//! Builds a `tracing-subscriber` registry out of a stdout layer and an optional file layer, each
//! with its own format and filter.

mod formatter;
mod layers;

pub use formatter::LogFormat;
pub use layers::{BoxedLayer, FileInfo};
pub use tracing_subscriber;

use layers::Layers;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Guard for the non-blocking file writer. Logs are flushed when it is dropped.
pub type FileWorkerGuard = tracing_appender::non_blocking::WorkerGuard;

/// Tracer for application logging.
#[derive(Debug, Clone)]
pub struct AtlasTracer {
    stdout: LayerInfo,
    file: Option<(LayerInfo, FileInfo)>,
}

impl AtlasTracer {
    /// Creates a new tracer with a default stdout layer and no file layer.
    pub fn new() -> Self {
        Self { stdout: LayerInfo::default(), file: None }
    }

    /// Sets the configuration for the stdout layer.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Sets the configuration for the file layer.
    pub fn with_file(mut self, config: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((config, file_info));
        self
    }
}

impl Default for AtlasTracer {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a single logging layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Creates a new [LayerInfo].
    ///
    /// `default_directive` is used when `RUST_LOG` is unset; `filters` is a comma separated list
    /// of extra directives; `color` is one of `always`, `auto` or `never`.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: "info".to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// Installs a global tracing subscriber.
pub trait Tracer {
    /// Initializes the global subscriber. Returns the file writer guard when a file layer is
    /// configured; it must be kept alive for as long as logs should be written.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

impl Tracer for AtlasTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        let file_guard = match self.file {
            Some((config, file_info)) => {
                Some(layers.file(config.format, &config.filters, file_info)?)
            }
            None => None,
        };

        tracing_subscriber::registry().with(layers.into_inner()).try_init()?;
        Ok(file_guard)
    }
}
