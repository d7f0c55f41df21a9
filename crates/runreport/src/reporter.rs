// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The HTML reporter a harness drives.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::collector::Collector;
use crate::config::ReportConfig;
use crate::error::{Error, Result};
use crate::harness::{Reporter, TestCase, TestResult};
use crate::report::HtmlFormatter;
use crate::summary::ReportSummary;

/// Reporter lifecycle. The only transition is `Accumulating -> Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterState {
    Accumulating,
    Finalized,
}

/// Collects results during a run and writes one HTML report at the end.
#[derive(Debug)]
pub struct HtmlReporter {
    config: ReportConfig,
    formatter: HtmlFormatter,
    collector: Collector,
    state: ReporterState,
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl HtmlReporter {
    /// Create a reporter for one run.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            formatter: HtmlFormatter::from_config(&config),
            config,
            collector: Collector::new(),
            state: ReporterState::Accumulating,
        }
    }

    pub fn state(&self) -> ReporterState {
        self.state
    }

    /// Records collected so far.
    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    /// Where the report is written.
    pub fn output_path(&self) -> &Path {
        &self.config.output
    }

    /// Render the current records without touching the filesystem.
    pub fn render(&self) -> String {
        self.formatter.format(self.collector.records())
    }

    /// Write the report, replacing any existing file.
    fn write_report(&self) -> Result<()> {
        let path = self.output_path();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.formatter
            .format_to(&mut writer, self.collector.records())
            .map_err(|e| Error::io(path, e))?;
        writer.flush().map_err(|e| Error::io(path, e))?;
        Ok(())
    }
}

impl Reporter for HtmlReporter {
    fn on_test_end(&mut self, test: &TestCase, result: &TestResult) -> Result<()> {
        if self.state == ReporterState::Finalized {
            return Err(Error::Finalized);
        }
        self.collector.record_test_end(test, result);
        Ok(())
    }

    fn on_end(&mut self) -> Result<()> {
        self.state = ReporterState::Finalized;

        let summary = ReportSummary::from_records(self.collector.records());
        if summary.unrecognized > 0 {
            tracing::warn!(
                "{} test(s) with unrecognized status are listed but not counted in the total",
                summary.unrecognized
            );
        }

        self.write_report()?;
        tracing::info!(
            path = %self.output_path().display(),
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            "wrote test report"
        );
        Ok(())
    }
}

/// A reporter that can be called from several threads.
///
/// Each callback holds the lock for its whole duration, so appends never
/// interleave.
#[derive(Debug)]
pub struct SharedReporter<R> {
    inner: Arc<Mutex<R>>,
}

impl<R> Clone for SharedReporter<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reporter> SharedReporter<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(reporter)),
        }
    }

    /// Record a finished test.
    pub fn on_test_end(&self, test: &TestCase, result: &TestResult) -> Result<()> {
        self.lock().on_test_end(test, result)
    }

    /// Finalize the run.
    pub fn on_end(&self) -> Result<()> {
        self.lock().on_end()
    }

    /// Run a closure with the wrapped reporter.
    pub fn with<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&*self.lock())
    }

    /// Recover the wrapped reporter once no other handles remain.
    pub fn into_inner(self) -> Option<R> {
        Arc::try_unwrap(self.inner)
            .ok()
            .map(|m| m.into_inner().unwrap_or_else(PoisonError::into_inner))
    }

    fn lock(&self) -> MutexGuard<'_, R> {
        // A panic in another callback leaves the records intact.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Reporter> Reporter for SharedReporter<R> {
    fn on_test_end(&mut self, test: &TestCase, result: &TestResult) -> Result<()> {
        SharedReporter::on_test_end(self, test, result)
    }

    fn on_end(&mut self) -> Result<()> {
        SharedReporter::on_end(self)
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
