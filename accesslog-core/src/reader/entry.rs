use crate::reader::parse::{ParseFailure, parse_line};
use std::fmt;
use std::str::FromStr;

/// One parsed access.
///
/// Entries are only produced by the parser, so every value is already range
/// checked: month `1..=12`, day `1..=31`, hour `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogEntry {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
}

impl LogEntry {
    pub(crate) fn new(year: i32, month: u8, day: u8, hour: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }
}

impl FromStr for LogEntry {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}:{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour
        )
    }
}
