use accesslog_core::analysis::LogAnalyzer;
use integration_tests::harness::{TempLog, captured_events, init_test_tracing};
use tracing::Level;

// Single test: the capture layer is process-global.
#[test]
fn passes_emit_structured_events() {
    let events = captured_events();
    init_test_tracing(events.clone());

    let log = TempLog::new("2023:02:01:09\n2023:02:01:10\n2023:02:01:31\n");
    let mut analyzer = LogAnalyzer::open(log.path()).unwrap();
    assert!(analyzer.analyze_hourly_data().is_err());

    let ok = TempLog::with_hours(&[9, 10]);
    let mut analyzer = LogAnalyzer::open(ok.path()).unwrap();
    analyzer.analyze_month_data().unwrap();

    let events = events.lock().unwrap();

    let opened = events
        .iter()
        .filter(|e| e.message() == Some("opened access log"))
        .count();
    assert_eq!(opened, 2);

    let aborted = events
        .iter()
        .find(|e| e.message() == Some("pass aborted"))
        .expect("missing pass aborted event");
    assert_eq!(aborted.level, Level::WARN);
    assert_eq!(aborted.field("dimension"), Some("hour"));
    assert!(aborted.field("error").unwrap().contains("line 3"));

    let committed = events
        .iter()
        .find(|e| e.message() == Some("pass committed"))
        .expect("missing pass committed event");
    assert_eq!(committed.level, Level::DEBUG);
    assert_eq!(committed.field("dimension"), Some("month"));
    assert_eq!(committed.field("entries"), Some("2"));
    assert_eq!(committed.field("total"), Some("2"));
    assert!(committed.target.starts_with("accesslog_core"));
}
