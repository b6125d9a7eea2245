//! Text rendering for analysis results.
//!
//! Everything here returns a `String`; callers decide where it goes.

use crate::analysis::{Dimension, FrequencyTable, LogAnalyzer};
use std::fmt::Write;
use std::io::{BufRead, Seek};


/// Which end of a table a sentence talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Busiest,
    Quietest,
}

impl Extreme {
    fn word(self) -> &'static str {
        match self {
            Extreme::Busiest => "busiest",
            Extreme::Quietest => "quietest",
        }
    }
}

fn header(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Hour => "Hr: Count",
        Dimension::Day => "Day: Count",
        Dimension::Month => "Month:Count",
    }
}

/// Header line followed by one `index: count` line per cell, in index order.
pub fn render_counts(table: &FrequencyTable) -> String {
    let mut out = String::new();
    out.push_str(header(table.dimension()));
    out.push('\n');
    for (index, count) in table.iter() {
        let _ = writeln!(out, "{index}: {count}");
    }
    out
}

pub fn render_extreme(dimension: Dimension, extreme: Extreme, index: usize) -> String {
    format!("The {} {dimension} is at index: {index}\n", extreme.word())
}

pub fn render_total(total: u64) -> String {
    format!("Total accesses: {total}\n")
}

pub fn render_two_hour(start: Option<usize>) -> String {
    match start {
        Some(start) => format!(
            "The busiest two-hour period is from {start} to {}\n",
            start + 2
        ),
        None => "The busiest two-hour period is undefined: no accesses recorded\n".to_string(),
    }
}

/// Counts plus the busiest and quietest cell for `dimension`. The hourly
/// report also carries the total and the busiest two-hour window.
///
/// Reads the analyzer's tables as they are; run the matching pass first.
pub fn render_report<R>(analyzer: &LogAnalyzer<R>, dimension: Dimension) -> String
where
    R: BufRead + Seek,
{
    let table = analyzer.table(dimension);

    let mut out = render_counts(table);
    out.push('\n');

    if dimension == Dimension::Hour {
        out.push_str(&render_total(analyzer.total_accesses()));
    }
    out.push_str(&render_extreme(dimension, Extreme::Busiest, table.busiest()));
    out.push_str(&render_extreme(dimension, Extreme::Quietest, table.quietest()));
    if dimension == Dimension::Hour {
        out.push_str(&render_two_hour(analyzer.busiest_two_hour()));
    }

    out
}
