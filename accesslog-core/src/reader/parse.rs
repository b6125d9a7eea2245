use crate::reader::entry::LogEntry;
use std::fmt;
use thiserror::Error;

/// Number of integer fields on every log line.
pub const FIELD_COUNT: usize = 4;

/// Position of a value on a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
}

impl Field {
    const ORDER: [Field; FIELD_COUNT] = [Field::Year, Field::Month, Field::Day, Field::Hour];

    fn bounds(self) -> (i64, i64) {
        match self {
            Field::Year => (i32::MIN as i64, i32::MAX as i64),
            Field::Month => (1, 12),
            Field::Day => (1, 31),
            Field::Hour => (0, 23),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
        })
    }
}

/// Why a single line could not be turned into a [`LogEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("line is not valid UTF-8")]
    NotUtf8,

    #[error("expected {} fields, found {found}", FIELD_COUNT)]
    FieldCount { found: usize },

    #[error("{field} field {value:?} is not an integer")]
    NotInteger { field: Field, value: String },

    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Parse one log line.
///
/// Fields are split on `:` and on whitespace, and empty pieces are ignored,
/// so `2023:02:01:09`, `2023 02 01 09` and `2023 02:01  09` all parse the
/// same way. Anything other than exactly [`FIELD_COUNT`] integers is rejected.
pub fn parse_line(line: &str) -> Result<LogEntry, ParseFailure> {
    let raw: Vec<&str> = line
        .split(|c: char| c == ':' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .collect();

    if raw.len() != FIELD_COUNT {
        return Err(ParseFailure::FieldCount { found: raw.len() });
    }

    let mut values = [0i64; FIELD_COUNT];
    for ((slot, field), text) in values.iter_mut().zip(Field::ORDER).zip(raw) {
        *slot = parse_field(field, text)?;
    }

    let [year, month, day, hour] = values;

    // bounds() already narrowed every value to its target type
    Ok(LogEntry::new(
        year as i32,
        month as u8,
        day as u8,
        hour as u8,
    ))
}

fn parse_field(field: Field, text: &str) -> Result<i64, ParseFailure> {
    let value = text
        .parse::<i64>()
        .map_err(|_| ParseFailure::NotInteger {
            field,
            value: text.to_string(),
        })?;

    let (min, max) = field.bounds();
    if !(min..=max).contains(&value) {
        return Err(ParseFailure::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }

    Ok(value)
}
