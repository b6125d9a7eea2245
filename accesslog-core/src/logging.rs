use crate::conf::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostic output format. Diagnostics always go to stderr so that stdout
/// carries only the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON when stderr is redirected, pretty when it is a terminal.
    #[default]
    Auto,
    Json,
    Pretty,
}

/// Initialize the logging system with environment-based filtering.
///
/// `RUST_LOG` wins when set; otherwise the configured level is used, falling
/// back to `warn` if that level does not parse.
pub fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&cfg.level));

    match resolve_format(cfg.format) {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        _ => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .init(),
    }
}

/// Filter for a configured level directive, `warn` if it does not parse.
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn resolve_format(format: LogFormat) -> LogFormat {
    match format {
        LogFormat::Auto => default_log_format(),
        explicit => explicit,
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}
