//! Access log input.
//!
//! A log file holds one access per line: four integer fields in the order
//! `year month day hour`, separated by `:` and/or whitespace. [`LogReader`]
//! walks those lines lazily, parses each one into a [`LogEntry`], and can be
//! rewound to the first line so that several passes can share one open source.

mod entry;
mod error;
mod log_reader;
mod parse;

#[cfg(test)]
mod tests;

pub use entry::LogEntry;
pub use error::{ParseError, ReaderError};
pub use log_reader::LogReader;
pub use parse::{FIELD_COUNT, Field, ParseFailure, parse_line};
