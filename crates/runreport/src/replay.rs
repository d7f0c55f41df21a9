// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replay recorded harness events into a reporter.
//!
//! Input is JSON lines, one finished test per line:
//!
//! ```json
//! {"test": {"title": "login test"}, "result": {"status": "passed", "duration": 1500, "steps": [{"title": "open"}]}}
//! ```

use std::io::BufRead;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::harness::{Reporter, TestCase, TestResult};

/// One test-end event.
#[derive(Debug, Deserialize)]
struct TestEndEvent {
    test: TestCase,
    result: TestResult,
}

/// Feed every event in `reader` to `reporter.on_test_end`.
///
/// Blank lines are skipped. Returns the number of events delivered. Stops at
/// the first malformed line; `on_end` is left to the caller.
pub fn replay<R, P>(reader: R, reporter: &mut P) -> Result<usize>
where
    R: BufRead,
    P: Reporter + ?Sized,
{
    let mut delivered = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| Error::Read {
            line: line_number,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let event: TestEndEvent = serde_json::from_str(&line).map_err(|source| Error::Event {
            line: line_number,
            source,
        })?;
        reporter.on_test_end(&event.test, &event.result)?;
        delivered += 1;
    }
    tracing::debug!("replayed {} test events", delivered);
    Ok(delivered)
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
