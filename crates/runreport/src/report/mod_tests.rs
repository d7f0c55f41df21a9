// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::{records_with_statuses, sample_records};
use yare::parameterized;

#[parameterized(
    plain = { "login test", "login test" },
    ampersand = { "a & b", "a &amp; b" },
    tags = { "<b>bold</b>", "&lt;b&gt;bold&lt;/b&gt;" },
    quotes = { r#"say "hi" 'now'"#, "say &quot;hi&quot; &#39;now&#39;" },
    empty = { "", "" },
)]
fn escape_html_cases(input: &str, expected: &str) {
    assert_eq!(escape_html(input), expected);
}

#[test]
fn render_matches_default_formatter() {
    let records = sample_records();
    similar_asserts::assert_eq!(render(&records), HtmlFormatter::default().format(&records));
}

#[test]
fn render_is_deterministic() {
    let records = records_with_statuses(&["passed", "failed", "timedOut"]);
    assert_eq!(render(&records), render(&records));
}

#[test]
fn render_empty_run() {
    let output = render(&[]);
    assert!(output.contains("Total Tests: 0 | Passed: 0 | Failed: 0 | Skipped: 0"));
    assert!(!output.contains("<td>"));
}
