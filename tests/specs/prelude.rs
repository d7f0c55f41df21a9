//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;

pub use runreport::{
    Error, HtmlReporter, ReportConfig, Reporter, ReporterState, TestCase, TestResult,
};

/// Path to a fixture under `tests/fixtures/events`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures/events")
        .join(name)
}

/// Assert that `haystack` contains `needle`, showing the document on failure.
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        predicate::str::contains(needle).eval(haystack),
        "expected report to contain:\n  {needle}\n\nreport:\n{haystack}"
    );
}

/// One reporting session writing into a temporary directory.
pub struct Run {
    dir: tempfile::TempDir,
    pub reporter: HtmlReporter,
}

impl Run {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::default()
            .with_output(dir.path().join("playwright-report/test-report.html"));
        Self {
            reporter: HtmlReporter::new(config),
            dir,
        }
    }

    /// Replay a fixture's events, returning any error.
    pub fn try_replay_fixture(&mut self, name: &str) -> runreport::Result<usize> {
        let file = File::open(fixture(name)).unwrap();
        runreport::replay(BufReader::new(file), &mut self.reporter)
    }

    /// Replay a fixture's events.
    pub fn replay_fixture(mut self, name: &str) -> Self {
        self.try_replay_fixture(name).unwrap();
        self
    }

    /// Report a single test.
    pub fn test_end(&mut self, test: &TestCase, result: &TestResult) -> &mut Self {
        self.reporter.on_test_end(test, result).unwrap();
        self
    }

    /// Finalize the run and read the written report.
    pub fn finish(mut self) -> String {
        self.reporter.on_end().unwrap();
        self.read_report()
    }

    pub fn read_report(&self) -> String {
        std::fs::read_to_string(self.reporter.output_path()).unwrap()
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
