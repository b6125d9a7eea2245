use crate::analysis::policy::{AnalysisPolicy, DayIndex};
use crate::reader::LogEntry;
use std::fmt;

/// The calendar unit a frequency table is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Hour,
    Day,
    Month,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Hour, Dimension::Day, Dimension::Month];

    /// Number of cells in a table for this dimension.
    pub const fn slots(self) -> usize {
        match self {
            Dimension::Hour => 24,
            Dimension::Day => 31,
            Dimension::Month => 12,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Hour => "hour",
            Dimension::Day => "day",
            Dimension::Month => "month",
        }
    }

    /// Table cell that `entry` is counted in.
    ///
    /// Hours are already zero-based and months are shifted down by one. Days
    /// depend on the policy: with [`DayIndex::Direct`] the day number is the
    /// index, so day 31 points one past the end of the table.
    pub(crate) fn index_of(self, entry: &LogEntry, policy: &AnalysisPolicy) -> usize {
        match self {
            Dimension::Hour => usize::from(entry.hour()),
            Dimension::Month => usize::from(entry.month()) - 1,
            Dimension::Day => match policy.day_index {
                DayIndex::Direct => usize::from(entry.day()),
                DayIndex::ZeroBased => usize::from(entry.day()) - 1,
            },
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
