// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-run reporting: collect one record per finished test, then render a
//! static HTML summary with a status tally and a donut chart.

pub mod collector;
pub mod config;
pub mod error;
pub mod harness;
pub mod record;
pub mod replay;
pub mod report;
pub mod reporter;
pub mod summary;

pub use collector::Collector;
pub use config::ReportConfig;
pub use error::{Error, Result};
pub use harness::{Reporter, TestCase, TestResult, TestStep};
pub use record::TestOutcomeRecord;
pub use replay::replay;
pub use report::{HtmlFormatter, render};
pub use reporter::{HtmlReporter, ReporterState, SharedReporter};
pub use summary::{ReportSummary, StatusBucket};

#[cfg(test)]
pub mod test_utils;
