use crate::analysis::{AnalysisError, Dimension, FrequencyTable};
use pretty_assertions::assert_eq;

#[test]
fn new_table_is_zero_filled_with_fixed_length() {
    let hours = FrequencyTable::new(Dimension::Hour);
    let days = FrequencyTable::new(Dimension::Day);
    let months = FrequencyTable::new(Dimension::Month);

    assert_eq!(hours.len(), 24);
    assert_eq!(days.len(), 31);
    assert_eq!(months.len(), 12);
    assert!(hours.counts().iter().all(|c| *c == 0));
    assert_eq!(hours.total(), 0);
}

#[test]
fn from_counts_pads_and_truncates() {
    let short = FrequencyTable::from_counts(Dimension::Month, &[1, 2]);
    assert_eq!(short.get(1), Some(2));
    assert_eq!(short.get(11), Some(0));

    let long = FrequencyTable::from_counts(Dimension::Month, &[1; 20]);
    assert_eq!(long.len(), 12);
    assert_eq!(long.total(), 12);
}

#[test]
fn record_increments_one_cell() {
    let mut table = FrequencyTable::new(Dimension::Hour);

    table.record(9).unwrap();
    table.record(9).unwrap();
    table.record(14).unwrap();

    assert_eq!(table.get(9), Some(2));
    assert_eq!(table.get(14), Some(1));
    assert_eq!(table.total(), 3);
}

#[test]
fn record_past_the_end_fails_without_resizing() {
    let mut table = FrequencyTable::new(Dimension::Day);

    let err = table.record(31).unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::IndexOutOfRange {
            dimension: Dimension::Day,
            index: 31,
            len: 31,
        }
    ));
    assert_eq!(table.len(), 31);
    assert_eq!(table.total(), 0);
}

#[test]
fn busiest_and_quietest_find_unique_extremes() {
    let table =
        FrequencyTable::from_counts(Dimension::Month, &[4, 4, 9, 4, 1, 4, 4, 4, 4, 4, 4, 4]);

    assert_eq!(table.busiest(), 2);
    assert_eq!(table.quietest(), 4);
}

#[test]
fn ties_go_to_the_lowest_index() {
    let table = FrequencyTable::from_counts(Dimension::Hour, &[1, 5, 0, 5, 0]);

    assert_eq!(table.busiest(), 1);
    assert_eq!(table.quietest(), 2);
}

#[test]
fn equal_tables_report_index_zero() {
    let zeros = FrequencyTable::new(Dimension::Hour);
    let sevens = FrequencyTable::from_counts(Dimension::Month, &[7; 12]);

    assert_eq!(zeros.busiest(), 0);
    assert_eq!(zeros.quietest(), 0);
    assert_eq!(sevens.busiest(), 0);
    assert_eq!(sevens.quietest(), 0);
}

#[test]
fn window_sums_adjacent_cells() {
    let mut counts = [0u64; 24];
    counts[3] = 4;
    counts[4] = 4;
    counts[7] = 6;
    let table = FrequencyTable::from_counts(Dimension::Hour, &counts);

    // 3+4 = 8 beats 7 alone (6) and 6+7 (6)
    assert_eq!(table.busiest_window(2, 24), Some(3));
}

#[test]
fn window_ties_go_to_the_earliest_start() {
    let mut counts = [0u64; 24];
    counts[5] = 3;
    let table = FrequencyTable::from_counts(Dimension::Hour, &counts);

    // windows starting at 4 and 5 both sum to 3
    assert_eq!(table.busiest_window(2, 24), Some(4));
}

#[test]
fn window_on_empty_counts_is_none() {
    let table = FrequencyTable::new(Dimension::Hour);
    assert_eq!(table.busiest_window(2, 24), None);
    assert_eq!(table.busiest_window(2, 12), None);
}

#[test]
fn window_with_small_modulus_never_reads_upper_cells() {
    let mut counts = [0u64; 24];
    counts[22] = 50;
    counts[23] = 50;
    counts[0] = 1;
    let table = FrequencyTable::from_counts(Dimension::Hour, &counts);

    assert_eq!(table.busiest_window(2, 12), Some(0));
    assert_eq!(table.busiest_window(2, 24), Some(22));
}

#[test]
fn window_wraps_across_the_end_of_the_table() {
    let mut counts = [0u64; 24];
    counts[23] = 2;
    counts[0] = 2;
    let table = FrequencyTable::from_counts(Dimension::Hour, &counts);

    assert_eq!(table.busiest_window(2, 24), Some(23));
}

#[test]
fn oversized_modulus_is_clamped() {
    let mut counts = [0u64; 12];
    counts[11] = 1;
    let table = FrequencyTable::from_counts(Dimension::Month, &counts);
    assert_eq!(table.busiest_window(2, 100), Some(10));
}

#[test]
fn absorb_adds_cellwise() {
    let mut a = FrequencyTable::from_counts(Dimension::Month, &[1, 2, 3]);
    let b = FrequencyTable::from_counts(Dimension::Month, &[10, 0, 1]);

    a.absorb(&b);

    assert_eq!(&a.counts()[..3], &[11, 2, 4]);
    assert_eq!(a.len(), 12);
}
