// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Rendering is pure: records in, document out. Writing the document to disk
//! is the reporter's job.

mod html;

use crate::record::TestOutcomeRecord;

pub use html::HtmlFormatter;

/// Render records into a complete HTML document with default settings.
pub fn render(records: &[TestOutcomeRecord]) -> String {
    HtmlFormatter::default().format(records)
}

/// Escape text for use in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
