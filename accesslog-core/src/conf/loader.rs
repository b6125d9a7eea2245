use crate::conf::error::ConfigError;
use crate::conf::types::AccessLogConfig;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "accesslog.toml";

/// Written by `config init`. Parses to [`AccessLogConfig::default`].
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# accesslog configuration

[analysis]
# "direct": the day number is the table index, so day 31 overflows the table.
# "zero_based": day 1 is index 0.
day_index = "direct"

# Hour modulus inside the busiest two-hour window: "modulo12" or "modulo24".
two_hour_wrap = "modulo12"

# "accumulate": repeating a pass adds to the previous counts.
# "fresh": every pass starts from zero.
passes = "accumulate"

[logging]
# Used when RUST_LOG is unset.
level = "warn"

# "auto", "json" or "pretty". Logs are written to stderr.
format = "auto"
"#;

pub fn load_config(path: &Path) -> Result<AccessLogConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
    Ok(cfg)
}

/// Load `explicit` if given. Otherwise load `default_path` when it exists and
/// fall back to built-in defaults when it does not.
pub fn resolve_config(
    explicit: Option<&Path>,
    default_path: &Path,
) -> Result<AccessLogConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None if default_path.is_file() => load_config(default_path),
        None => Ok(AccessLogConfig::default()),
    }
}

/// Write [`DEFAULT_CONFIG_TEMPLATE`] to `path`. Never overwrites.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => ConfigError::WriteFile {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())
        .map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
}
