mod error;
mod loader;
mod types;


pub use error::ConfigError;
pub use loader::{
    DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE, load_config, resolve_config, write_default_config,
};
pub use types::{AccessLogConfig, LoggingConfig};
