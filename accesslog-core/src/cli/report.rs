use crate::analysis::{AnalysisPolicy, DayIndex, Dimension, LogAnalyzer, PassMode, TwoHourWrap};
use crate::render::render_report;
use anyhow::Result;
use clap::Args;
use std::io::{self, BufRead, Seek, Write};
use std::path::Path;

/// Command-line overrides for the analysis policy. Unset flags keep the
/// value from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyOverrides {
    /// How a day of month maps onto the day table
    #[arg(long, global = true, value_enum)]
    pub day_index: Option<DayIndex>,

    /// Hour modulus used by the busiest two-hour window
    #[arg(long, global = true, value_enum)]
    pub two_hour_wrap: Option<TwoHourWrap>,

    /// Whether repeated passes add up or start from zero
    #[arg(long, global = true, value_enum)]
    pub passes: Option<PassMode>,
}

impl PolicyOverrides {
    pub fn apply(&self, base: AnalysisPolicy) -> AnalysisPolicy {
        AnalysisPolicy {
            day_index: self.day_index.unwrap_or(base.day_index),
            two_hour_wrap: self.two_hour_wrap.unwrap_or(base.two_hour_wrap),
            passes: self.passes.unwrap_or(base.passes),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    Hourly,
    Daily,
    Monthly,
    Summary,
}

impl ReportScope {
    pub fn dimensions(self) -> &'static [Dimension] {
        match self {
            ReportScope::Hourly => &[Dimension::Hour],
            ReportScope::Daily => &[Dimension::Day],
            ReportScope::Monthly => &[Dimension::Month],
            ReportScope::Summary => &Dimension::ALL,
        }
    }
}

pub fn run_report(path: &Path, scope: ReportScope, policy: AnalysisPolicy) -> Result<()> {
    let mut analyzer = LogAnalyzer::open_with_policy(path, policy)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut analyzer, scope, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Run the passes for `scope` and write one report block per dimension.
pub fn write_report<R, W>(
    analyzer: &mut LogAnalyzer<R>,
    scope: ReportScope,
    out: &mut W,
) -> Result<()>
where
    R: BufRead + Seek,
    W: Write,
{
    for (i, dimension) in scope.dimensions().iter().copied().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        let entries = analyzer.analyze(dimension)?;
        tracing::info!(%dimension, entries, "analysis complete");

        out.write_all(render_report(analyzer, dimension).as_bytes())?;
    }

    Ok(())
}

pub fn run_data(path: &Path) -> Result<()> {
    let mut analyzer = LogAnalyzer::open(path)?;
    analyzer.print_data()?;
    Ok(())
}
