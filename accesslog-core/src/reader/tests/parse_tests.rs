use crate::reader::{Field, LogEntry, ParseFailure, parse_line};
use pretty_assertions::assert_eq;

#[test]
fn parses_colon_delimited_line() {
    let entry = parse_line("2023:02:01:09").unwrap();

    assert_eq!(entry.year(), 2023);
    assert_eq!(entry.month(), 2);
    assert_eq!(entry.day(), 1);
    assert_eq!(entry.hour(), 9);
}

#[test]
fn colon_and_whitespace_separators_are_equivalent() {
    let colon = parse_line("2015:06:30:23").unwrap();

    assert_eq!(parse_line("2015 06 30 23").unwrap(), colon);
    assert_eq!(parse_line("2015 06:30\t23").unwrap(), colon);
    assert_eq!(parse_line("  2015:06:30:23  ").unwrap(), colon);
}

#[test]
fn from_str_delegates_to_parser() {
    let entry: LogEntry = "2020:12:31:00".parse().unwrap();
    assert_eq!(entry.to_string(), "2020:12:31:00");
}

#[test]
fn rejects_non_integer_field() {
    let err = parse_line("abc:02:01:09").unwrap_err();

    assert_eq!(
        err,
        ParseFailure::NotInteger {
            field: Field::Year,
            value: "abc".to_string(),
        }
    );
}

#[test]
fn rejects_too_few_fields() {
    let err = parse_line("2023:02:01").unwrap_err();
    assert_eq!(err, ParseFailure::FieldCount { found: 3 });
}

#[test]
fn rejects_too_many_fields() {
    let err = parse_line("2023 02 01 09 45").unwrap_err();
    assert_eq!(err, ParseFailure::FieldCount { found: 5 });
}

#[test]
fn rejects_empty_line() {
    assert_eq!(
        parse_line("").unwrap_err(),
        ParseFailure::FieldCount { found: 0 }
    );
}

#[test]
fn rejects_out_of_range_values() {
    assert_eq!(
        parse_line("2023:13:01:09").unwrap_err(),
        ParseFailure::OutOfRange {
            field: Field::Month,
            value: 13,
            min: 1,
            max: 12,
        }
    );
    assert_eq!(
        parse_line("2023:02:00:09").unwrap_err(),
        ParseFailure::OutOfRange {
            field: Field::Day,
            value: 0,
            min: 1,
            max: 31,
        }
    );
    assert_eq!(
        parse_line("2023:02:01:24").unwrap_err(),
        ParseFailure::OutOfRange {
            field: Field::Hour,
            value: 24,
            min: 0,
            max: 23,
        }
    );
}

#[test]
fn negative_hour_is_out_of_range_not_garbage() {
    let err = parse_line("2023 02 01 -1").unwrap_err();
    assert!(matches!(
        err,
        ParseFailure::OutOfRange {
            field: Field::Hour,
            value: -1,
            ..
        }
    ));
}

#[test]
fn accepts_boundary_values() {
    let low = parse_line("0:1:1:0").unwrap();
    let high = parse_line("9999:12:31:23").unwrap();

    assert_eq!((low.month(), low.day(), low.hour()), (1, 1, 0));
    assert_eq!((high.month(), high.day(), high.hour()), (12, 31, 23));
}

#[test]
fn failure_messages_name_the_field() {
    let err = parse_line("2023:xx:01:09").unwrap_err();
    assert_eq!(err.to_string(), "month field \"xx\" is not an integer");
}
