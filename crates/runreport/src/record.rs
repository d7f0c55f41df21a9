// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test outcome records.

use std::time::Duration;

use crate::harness::{TestCase, TestResult, TestStep};

/// Separator between step titles in a record.
pub const STEP_SEPARATOR: &str = ", ";

/// Display summary of one finished test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcomeRecord {
    /// Test title, verbatim.
    pub name: String,
    /// Step titles joined with `", "`.
    pub steps: String,
    /// Status label, verbatim.
    pub status: String,
    /// Seconds with two decimals and an `s` suffix, e.g. `1.23s`.
    pub duration: String,
}

impl TestOutcomeRecord {
    /// Derive a record from the harness descriptors.
    pub fn from_harness(test: &TestCase, result: &TestResult) -> Self {
        Self {
            name: test.title.clone(),
            steps: join_steps(&result.steps),
            status: result.status.clone(),
            duration: format_duration(result.duration),
        }
    }

    /// Status with its first character upper-cased.
    pub fn display_status(&self) -> String {
        capitalize(&self.status)
    }
}

/// Join step titles in execution order.
pub fn join_steps(steps: &[TestStep]) -> String {
    steps
        .iter()
        .map(|step| step.title.as_str())
        .collect::<Vec<_>>()
        .join(STEP_SEPARATOR)
}

/// Format a duration as seconds with two decimals.
///
/// Rounds the binary `f64` value of `millis / 1000`, so `15ms` gives `0.01s`
/// and `1005ms` gives `1.00s`. Values that sit exactly halfway between two
/// hundredths (`0.125`) round up.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_nanos() as f64 / 1_000_000.0;
    let secs = millis / 1000.0;
    format!("{:.2}s", round_half_up_hint(secs))
}

/// Nudge exact halfway values up so `{:.2}` does not round them to even.
///
/// A double is exactly halfway between two hundredths only when it is an odd
/// multiple of 1/8.
fn round_half_up_hint(secs: f64) -> f64 {
    let eighths = secs * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        secs + 0.0025
    } else {
        secs
    }
}

/// Upper-case the first character, leaving the rest unchanged.
///
/// An empty string stays empty.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
