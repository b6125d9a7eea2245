use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Switches between the historical counting rules and their corrected forms.
///
/// The default reproduces the historical behaviour on every axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisPolicy {
    pub day_index: DayIndex,
    pub two_hour_wrap: TwoHourWrap,
    pub passes: PassMode,
}

impl AnalysisPolicy {
    /// Zero-based days, a 24 hour wrap and fresh tables on every pass.
    pub const fn corrected() -> Self {
        Self {
            day_index: DayIndex::ZeroBased,
            two_hour_wrap: TwoHourWrap::Modulo24,
            passes: PassMode::Fresh,
        }
    }
}

/// How a day of month maps onto the 31-slot day table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DayIndex {
    /// The day number is the index. Day 31 overflows the table.
    #[default]
    Direct,
    /// `day - 1`.
    #[value(name = "zero_based")]
    ZeroBased,
}

/// Modulus applied to hour indices inside the two-hour window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TwoHourWrap {
    /// Windows starting at 12..=23 re-read hours 0..=11.
    #[default]
    Modulo12,
    Modulo24,
}

impl TwoHourWrap {
    pub const fn modulus(self) -> usize {
        match self {
            TwoHourWrap::Modulo12 => 12,
            TwoHourWrap::Modulo24 => 24,
        }
    }
}

/// What a repeated pass does with the counts of the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PassMode {
    /// Add to whatever the table already holds.
    #[default]
    Accumulate,
    /// Replace the table with the counts of this pass.
    Fresh,
}
