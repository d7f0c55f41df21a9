// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered accumulation of test outcome records.
//!
//! A [`Collector`] is owned by one reporting session.

use crate::harness::{TestCase, TestResult};
use crate::record::TestOutcomeRecord;

/// Records in the order their tests finished.
#[derive(Debug, Default, Clone)]
pub struct Collector {
    records: Vec<TestOutcomeRecord>,
}

impl Collector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a record from a finished test and append it.
    pub fn record_test_end(&mut self, test: &TestCase, result: &TestResult) {
        let record = TestOutcomeRecord::from_harness(test, result);
        tracing::debug!(
            name = %record.name,
            status = %record.status,
            duration = %record.duration,
            "recorded test"
        );
        self.push(record);
    }

    /// Append an already-derived record.
    pub fn push(&mut self, record: TestOutcomeRecord) {
        self.records.push(record);
    }

    /// Records in completion order.
    pub fn records(&self) -> &[TestOutcomeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the collector, returning its records.
    pub fn into_records(self) -> Vec<TestOutcomeRecord> {
        self.records
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
