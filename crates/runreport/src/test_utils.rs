// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use crate::harness::{TestCase, TestResult};
use crate::record::TestOutcomeRecord;

/// Build one record per status, named `test N`.
pub fn records_with_statuses(statuses: &[&str]) -> Vec<TestOutcomeRecord> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| TestOutcomeRecord {
            name: format!("test {}", i + 1),
            steps: String::new(),
            status: status.to_string(),
            duration: "0.00s".to_string(),
        })
        .collect()
}

/// The login/logout/signup run used across report tests.
pub fn sample_run() -> Vec<(TestCase, TestResult)> {
    vec![
        (
            TestCase::new("login test"),
            TestResult::passed(Duration::from_millis(1500)).with_steps(["open", "fill", "submit"]),
        ),
        (
            TestCase::new("logout test"),
            TestResult::failed(Duration::from_millis(200)),
        ),
        (
            TestCase::new("signup test"),
            TestResult::skipped(Duration::ZERO).with_steps(["open"]),
        ),
    ]
}

/// Records for [`sample_run`].
pub fn sample_records() -> Vec<TestOutcomeRecord> {
    sample_run()
        .iter()
        .map(|(test, result)| TestOutcomeRecord::from_harness(test, result))
        .collect()
}
