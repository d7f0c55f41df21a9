// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Descriptors delivered by the test harness, and the callback seam it drives.
//!
//! The descriptor shapes follow the harness's JSON form (`title`, `status`,
//! `duration` in milliseconds, `steps[].title`); any other fields are ignored.
//! `title`, `status` and `duration` are required. A missing `steps` array
//! means the test had no steps.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Lifecycle callbacks a harness invokes on a reporter.
///
/// `on_test_end` runs once per finished test in completion order, then
/// `on_end` runs once after the whole run.
pub trait Reporter {
    /// Record the outcome of one finished test.
    fn on_test_end(&mut self, test: &TestCase, result: &TestResult) -> Result<()>;

    /// Finalize the run and produce the report artifact.
    fn on_end(&mut self) -> Result<()>;
}

/// A test case as declared by the harness.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    /// Display title.
    pub title: String,
}

impl TestCase {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A step executed inside a test.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestStep {
    /// Step title.
    pub title: String,
}

/// Outcome of one test execution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestResult {
    /// Status label (`passed`, `failed`, `skipped`, or anything else the
    /// harness reports).
    pub status: String,
    /// Wall-clock duration.
    #[serde(deserialize_with = "deserialize_millis")]
    pub duration: Duration,
    /// Top-level steps in execution order.
    #[serde(default)]
    pub steps: Vec<TestStep>,
}

impl TestResult {
    /// Create a result with the given status and no steps.
    pub fn new(status: impl Into<String>, duration: Duration) -> Self {
        Self {
            status: status.into(),
            duration,
            steps: Vec::new(),
        }
    }

    /// Create a passing result.
    pub fn passed(duration: Duration) -> Self {
        Self::new("passed", duration)
    }

    /// Create a failing result.
    pub fn failed(duration: Duration) -> Self {
        Self::new("failed", duration)
    }

    /// Create a skipped result.
    pub fn skipped(duration: Duration) -> Self {
        Self::new("skipped", duration)
    }

    /// Add steps by title.
    pub fn with_steps<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = titles
            .into_iter()
            .map(|title| TestStep {
                title: title.into(),
            })
            .collect();
        self
    }
}

/// Exclusive upper bound on representable durations, in nanoseconds.
const MAX_NANOS: f64 = u64::MAX as f64;

/// Parse a millisecond count (integer or fractional) into a `Duration`.
fn deserialize_millis<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = f64::deserialize(deserializer)?;
    if !millis.is_finite() || millis < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "duration must be a non-negative number of milliseconds, got {millis}"
        )));
    }
    let nanos = (millis * 1_000_000.0).round();
    if nanos >= MAX_NANOS {
        return Err(serde::de::Error::custom(format!(
            "duration of {millis} milliseconds is out of range"
        )));
    }
    Ok(Duration::from_nanos(nanos as u64))
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
