use crate::analysis::AnalysisPolicy;
use crate::conf::{DEFAULT_CONFIG_FILE, load_config, write_default_config};
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Config file [default: --config, then accesslog.toml]
        path: Option<PathBuf>,
    },

    /// Print resolved configuration
    Dump {
        /// Config file [default: --config, then accesslog.toml]
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a commented default config file
    Init {
        /// Config file [default: --config, then accesslog.toml]
        path: Option<PathBuf>,
    },
}

/// Run a config subcommand against stdout.
///
/// `global` is the top-level `--config` value; a positional path wins over it.
pub fn run(cmd: ConfigCmd, global: Option<&Path>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(cmd, global, &mut out)
}

pub fn run_to<W: Write>(cmd: ConfigCmd, global: Option<&Path>, out: &mut W) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(&target_path(path, global), out),
        ConfigCmd::Dump { path, json, yaml } => dump(&target_path(path, global), json, yaml, out),
        ConfigCmd::Init { path } => init(&target_path(path, global), out),
    }
}

/// Positional path, then `--config`, then [`DEFAULT_CONFIG_FILE`].
pub fn target_path(path: Option<PathBuf>, global: Option<&Path>) -> PathBuf {
    path.or_else(|| global.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn check<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let cfg = load_config(path)?;

    writeln!(out, "✔ Config loaded successfully")?;
    for line in describe_policy(&cfg.analysis) {
        writeln!(out, "✔ {line}")?;
    }
    writeln!(out, "✔ log level {}", cfg.logging.level)?;

    Ok(())
}

pub fn dump<W: Write>(path: &Path, json: bool, yaml: bool, out: &mut W) -> Result<()> {
    let cfg = load_config(path)?;

    if yaml {
        dump_yaml(&cfg, out)?;
    } else if json || !yaml {
        // default: json
        dump_json(&cfg, out)?;
    }

    Ok(())
}

pub fn init<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    write_default_config(path)?;
    writeln!(out, "✔ Wrote {}", path.display())?;
    Ok(())
}

/// One `name: value` line per policy switch, using the command-line spelling.
pub fn describe_policy(policy: &AnalysisPolicy) -> Vec<String> {
    vec![
        format!("day_index: {}", value_name(&policy.day_index)),
        format!("two_hour_wrap: {}", value_name(&policy.two_hour_wrap)),
        format!("passes: {}", value_name(&policy.passes)),
    ]
}

fn value_name<T: ValueEnum>(value: &T) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

fn dump_json<T: Serialize, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    writeln!(out, "{s}")?;
    Ok(())
}

fn dump_yaml<T: Serialize, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let s = serde_yaml::to_string(value)?;
    write!(out, "{s}")?;
    Ok(())
}
