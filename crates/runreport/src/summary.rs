// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status tally over collected records.

use crate::record::TestOutcomeRecord;

/// The statuses counted in the summary and drawn in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    Passed,
    Failed,
    Skipped,
}

impl StatusBucket {
    /// Buckets in chart order.
    pub const ALL: [StatusBucket; 3] = [
        StatusBucket::Passed,
        StatusBucket::Failed,
        StatusBucket::Skipped,
    ];

    /// Bucket for an exact status label, if it is one of the counted ones.
    ///
    /// Matching is case-sensitive: `"Passed"` is not counted.
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "passed" => Some(StatusBucket::Passed),
            "failed" => Some(StatusBucket::Failed),
            "skipped" => Some(StatusBucket::Skipped),
            _ => None,
        }
    }

    /// Chart label.
    pub fn label(self) -> &'static str {
        match self {
            StatusBucket::Passed => "Passed",
            StatusBucket::Failed => "Failed",
            StatusBucket::Skipped => "Skipped",
        }
    }

    /// Chart segment color.
    pub fn color(self) -> &'static str {
        match self {
            StatusBucket::Passed => "#4CAF50",
            StatusBucket::Failed => "#F44336",
            StatusBucket::Skipped => "#FFC107",
        }
    }
}

/// Counts of records by status.
///
/// `total` is the sum of the three counted buckets, not the record count.
/// Records with any other status land in `unrecognized`, which is not shown
/// in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total: usize,
    pub unrecognized: usize,
}

impl ReportSummary {
    /// Tally records by status.
    pub fn from_records(records: &[TestOutcomeRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match StatusBucket::from_status(&record.status) {
                Some(StatusBucket::Passed) => summary.passed += 1,
                Some(StatusBucket::Failed) => summary.failed += 1,
                Some(StatusBucket::Skipped) => summary.skipped += 1,
                None => summary.unrecognized += 1,
            }
        }
        summary.total = summary.passed + summary.failed + summary.skipped;
        summary
    }

    /// Count for one bucket.
    pub fn count(&self, bucket: StatusBucket) -> usize {
        match bucket {
            StatusBucket::Passed => self.passed,
            StatusBucket::Failed => self.failed,
            StatusBucket::Skipped => self.skipped,
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
