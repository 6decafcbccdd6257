//! Structured logging initialization via `tracing`.
//!
//! Logs go to stderr so that command output on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Output format of the log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Build the env filter: `RUST_LOG` wins, otherwise `default_level`.
///
/// An unparsable `default_level` falls back to `warn`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable for filtering. Calling it
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn init_tracing(default_level: &str, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr);
    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
