//! Counting passes and the queries over their results.
//!
//! The data flow is:
//!
//! LogReader
//! reset + drain
//! Dimension::index_of
//! FrequencyTable (scratch)
//! commit (accumulate or replace)
//! busiest / quietest / busiest two-hour window
//!
//! Each pass counts into a scratch table and only touches the analyzer's
//! tables once the whole source has been consumed.

mod analyzer;
mod dimension;
mod error;
mod policy;
mod table;

#[cfg(test)]
mod tests;

pub use analyzer::LogAnalyzer;
pub use dimension::Dimension;
pub use error::AnalysisError;
pub use policy::{AnalysisPolicy, DayIndex, PassMode, TwoHourWrap};
pub use table::FrequencyTable;
