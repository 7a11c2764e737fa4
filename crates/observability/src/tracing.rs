//! Tracing/logging initialization.
//!
//! Logs always go to stderr; stdout belongs to the demo output.

use core::str::FromStr;

use ::tracing::Subscriber;
use syntaxlab_core::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(Error::config(format!("unknown log format: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Build the process subscriber without installing it.
pub fn build_subscriber<W>(config: &LogConfig, make_writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_target(false);

    match config.format {
        LogFormat::Json => Box::new(
            builder
                .json()
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .finish(),
        ),
        LogFormat::Pretty => Box::new(builder.pretty().finish()),
    }
}

/// Initialize tracing/logging for the process, writing to stderr.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let _ = ::tracing::subscriber::set_global_default(build_subscriber(config, std::io::stderr));
}
