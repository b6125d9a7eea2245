use crate::analysis::dimension::Dimension;
use crate::analysis::error::AnalysisError;
use crate::analysis::policy::{AnalysisPolicy, PassMode};
use crate::analysis::table::FrequencyTable;
use crate::reader::LogReader;
use crate::render;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

/// Tabulates accesses per hour, day and month over one log source.
///
/// Each `analyze_*` call is a full pass over the source. Queries read the
/// tables as they stand, so they return zeros until the matching pass ran.
#[derive(Debug)]
pub struct LogAnalyzer<R = BufReader<File>> {
    reader: LogReader<R>,
    policy: AnalysisPolicy,
    hour_counts: FrequencyTable,
    day_counts: FrequencyTable,
    month_counts: FrequencyTable,
}

impl LogAnalyzer<BufReader<File>> {
    /// Analyzer over `path` with the historical counting rules.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        Self::open_with_policy(path, AnalysisPolicy::default())
    }

    pub fn open_with_policy(
        path: impl AsRef<Path>,
        policy: AnalysisPolicy,
    ) -> Result<Self, AnalysisError> {
        Ok(Self::new(LogReader::open(path)?, policy))
    }
}

impl<R: BufRead + Seek> LogAnalyzer<R> {
    pub fn new(reader: LogReader<R>, policy: AnalysisPolicy) -> Self {
        Self {
            reader,
            policy,
            hour_counts: FrequencyTable::new(Dimension::Hour),
            day_counts: FrequencyTable::new(Dimension::Day),
            month_counts: FrequencyTable::new(Dimension::Month),
        }
    }

    pub fn policy(&self) -> AnalysisPolicy {
        self.policy
    }

    //--------------------------------------------------------------------------
    // Passes
    //--------------------------------------------------------------------------

    /// Count accesses per hour of day. Returns the number of entries read.
    pub fn analyze_hourly_data(&mut self) -> Result<u64, AnalysisError> {
        self.analyze(Dimension::Hour)
    }

    /// Count accesses per day of month. Returns the number of entries read.
    pub fn analyze_daily_data(&mut self) -> Result<u64, AnalysisError> {
        self.analyze(Dimension::Day)
    }

    /// Count accesses per month of year. Returns the number of entries read.
    pub fn analyze_month_data(&mut self) -> Result<u64, AnalysisError> {
        self.analyze(Dimension::Month)
    }

    /// Run one pass for `dimension`.
    ///
    /// On failure no table is modified. On success the pass result is either
    /// added to the existing table or replaces it, per [`PassMode`].
    pub fn analyze(&mut self, dimension: Dimension) -> Result<u64, AnalysisError> {
        tracing::debug!(%dimension, "pass started");

        let mut scratch = FrequencyTable::new(dimension);
        let entries = match self.count_into(&mut scratch) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(%dimension, error = %err, "pass aborted");
                return Err(err);
            }
        };

        let passes = self.policy.passes;
        let table = self.table_mut(dimension);
        match passes {
            PassMode::Accumulate => table.absorb(&scratch),
            PassMode::Fresh => *table = scratch,
        }

        tracing::debug!(
            %dimension,
            entries,
            total = table.total(),
            "pass committed"
        );

        Ok(entries)
    }

    fn count_into(&mut self, scratch: &mut FrequencyTable) -> Result<u64, AnalysisError> {
        let dimension = scratch.dimension();

        self.reader.reset()?;
        let mut entries = 0;
        while self.reader.has_next()? {
            let entry = self.reader.next_entry()?;
            scratch.record(dimension.index_of(&entry, &self.policy))?;
            entries += 1;
        }

        Ok(entries)
    }

    //--------------------------------------------------------------------------
    // Queries
    //--------------------------------------------------------------------------

    pub fn table(&self, dimension: Dimension) -> &FrequencyTable {
        match dimension {
            Dimension::Hour => &self.hour_counts,
            Dimension::Day => &self.day_counts,
            Dimension::Month => &self.month_counts,
        }
    }

    fn table_mut(&mut self, dimension: Dimension) -> &mut FrequencyTable {
        match dimension {
            Dimension::Hour => &mut self.hour_counts,
            Dimension::Day => &mut self.day_counts,
            Dimension::Month => &mut self.month_counts,
        }
    }

    pub fn hour_counts(&self) -> &FrequencyTable {
        &self.hour_counts
    }

    pub fn day_counts(&self) -> &FrequencyTable {
        &self.day_counts
    }

    pub fn month_counts(&self) -> &FrequencyTable {
        &self.month_counts
    }

    /// Sum of the hourly table. Zero until an hourly pass has run.
    pub fn total_accesses(&self) -> u64 {
        self.hour_counts.total()
    }

    pub fn busiest_hour(&self) -> usize {
        self.hour_counts.busiest()
    }

    pub fn quietest_hour(&self) -> usize {
        self.hour_counts.quietest()
    }

    pub fn busiest_day(&self) -> usize {
        self.day_counts.busiest()
    }

    pub fn quietest_day(&self) -> usize {
        self.day_counts.quietest()
    }

    pub fn busiest_month(&self) -> usize {
        self.month_counts.busiest()
    }

    pub fn quietest_month(&self) -> usize {
        self.month_counts.quietest()
    }

    /// Start hour of the busiest two-hour window, wrapped per
    /// [`TwoHourWrap`](crate::analysis::TwoHourWrap). `None` when no hour has
    /// any access.
    pub fn busiest_two_hour(&self) -> Option<usize> {
        let modulus = self.policy.two_hour_wrap.modulus();
        self.hour_counts.busiest_window(2, modulus)
    }

    //--------------------------------------------------------------------------
    // Printing
    //--------------------------------------------------------------------------

    pub fn print_hourly_counts(&self) {
        print!("{}", render::render_counts(&self.hour_counts));
    }

    pub fn print_daily_counts(&self) {
        print!("{}", render::render_counts(&self.day_counts));
    }

    pub fn print_monthly_counts(&self) {
        print!("{}", render::render_counts(&self.month_counts));
    }

    /// Print every entry of the source, one per line.
    pub fn print_data(&mut self) -> Result<(), AnalysisError> {
        print!("{}", self.render_data()?);
        Ok(())
    }

    /// Every entry of the source, one per line.
    pub fn render_data(&mut self) -> Result<String, AnalysisError> {
        self.reader.reset()?;
        let mut out = String::new();
        for entry in self.reader.by_ref() {
            out.push_str(&entry?.to_string());
            out.push('\n');
        }
        Ok(out)
    }
}
