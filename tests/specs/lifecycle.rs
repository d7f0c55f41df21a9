//! Reporter lifecycle specs.

use std::time::Duration;

use crate::prelude::*;

/// > The report lands at the configured path; missing parent directories
/// > are created.
#[test]
fn report_written_to_configured_path() {
    let mut run = Run::new();
    run.test_end(&TestCase::new("only test"), &TestResult::passed(Duration::from_millis(1234)));
    run.reporter.on_end().unwrap();

    let expected = run.dir().join("playwright-report/test-report.html");
    assert!(predicates::path::exists().eval(expected.as_path()));
    assert_contains(&run.read_report(), "<td>1.23s</td>");
}

/// > Finalizing twice regenerates identical content.
#[test]
fn finalize_twice_is_identical() {
    let mut run = Run::new().replay_fixture("sample.jsonl");
    run.reporter.on_end().unwrap();
    let first = run.read_report();
    run.reporter.on_end().unwrap();
    similar_asserts::assert_eq!(first, run.read_report());
}

/// > Accumulation cannot resume after finalize.
#[test]
fn no_results_after_finalize() {
    let mut run = Run::new();
    run.reporter.on_end().unwrap();
    assert_eq!(run.reporter.state(), ReporterState::Finalized);

    let err = run
        .reporter
        .on_test_end(&TestCase::new("late"), &TestResult::passed(Duration::ZERO))
        .unwrap_err();
    assert!(matches!(err, Error::Finalized));
}

/// > An empty run still produces a complete document.
#[test]
fn empty_run_report() {
    let html = Run::new().finish();
    assert_contains(&html, "Total Tests: 0 | Passed: 0 | Failed: 0 | Skipped: 0");
    assert_contains(&html, "</html>");
}
