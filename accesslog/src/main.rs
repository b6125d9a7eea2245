use accesslog_core::cli::config::ConfigCmd;
use accesslog_core::cli::report::{PolicyOverrides, ReportScope, run_data, run_report};
use accesslog_core::conf::{DEFAULT_CONFIG_FILE, resolve_config};
use accesslog_core::logging::init_logging;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "accesslog",
    version,
    about = "Hourly, daily and monthly hit counts for web server access logs"
)]
struct Cli {
    /// Path to the accesslog config file [default: accesslog.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: PolicyOverrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Analyze(AnalyzeCmd),

    /// Config file tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand, Debug)]
enum AnalyzeCmd {
    /// Counts per hour, total, busiest/quietest hour and busiest two-hour window
    Hourly { file: PathBuf },

    /// Counts per day of month with busiest/quietest day
    Daily { file: PathBuf },

    /// Counts per month with busiest/quietest month
    Monthly { file: PathBuf },

    /// Hourly, daily and monthly reports in one run
    Summary { file: PathBuf },

    /// List every parsed entry
    Data { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config { cmd } => accesslog_core::cli::config::run(cmd, cli.config.as_deref()),
        Command::Analyze(cmd) => analyze(cli.config.as_deref(), &cli.overrides, cmd),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "accesslog failed");
        eprintln!("accesslog: {e:#}");
        std::process::exit(1);
    }
}

fn analyze(config: Option<&Path>, overrides: &PolicyOverrides, cmd: AnalyzeCmd) -> Result<()> {
    let cfg = resolve_config(config, Path::new(DEFAULT_CONFIG_FILE))?;
    init_logging(&cfg.logging);

    let policy = overrides.apply(cfg.analysis);
    tracing::debug!(?policy, "resolved analysis policy");

    match cmd {
        AnalyzeCmd::Hourly { file } => run_report(&file, ReportScope::Hourly, policy),
        AnalyzeCmd::Daily { file } => run_report(&file, ReportScope::Daily, policy),
        AnalyzeCmd::Monthly { file } => run_report(&file, ReportScope::Monthly, policy),
        AnalyzeCmd::Summary { file } => run_report(&file, ReportScope::Summary, policy),
        AnalyzeCmd::Data { file } => run_data(&file),
    }
}
