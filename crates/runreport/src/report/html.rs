// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML format report output.

use crate::config::{DEFAULT_CHART_SCRIPT, DEFAULT_TITLE, ReportConfig};
use crate::record::TestOutcomeRecord;
use crate::summary::{ReportSummary, StatusBucket};

use super::escape_html;

/// Size estimation constants for pre-allocation.
const HTML_BASE_SIZE: usize = 2500; // Template + CSS + chart script
const HTML_ROW_SIZE: usize = 120;

/// HTML format report formatter.
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    title: String,
    chart_script: String,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            chart_script: DEFAULT_CHART_SCRIPT.to_string(),
        }
    }
}

impl HtmlFormatter {
    /// Create a formatter using the title and chart script from config.
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            title: config.title.clone(),
            chart_script: config.chart_script.clone(),
        }
    }

    /// Generate CSS styles for the report.
    fn css() -> &'static str {
        r#"body {
      font-family: Arial, sans-serif;
      margin: 20px;
      background-color: #f9f9f9;
    }
    .header-container {
      text-align: center;
      color: #333;
      padding: 10px;
      margin-bottom: 20px;
    }
    .chart-container {
      width: 30%;
      margin: 0 auto;
    }
    canvas {
      max-width: 100%;
      height: auto;
    }
    .table-container {
      width: 100%;
      margin-top: 20px;
    }
    table {
      width: 100%;
      border-collapse: collapse;
      background-color: #fff;
      border-radius: 8px;
      overflow: hidden;
    }
    table, th, td {
      border: 1px solid #ddd;
      padding: 8px;
    }
    th {
      background-color: #f2f2f2;
      text-align: left;
    }
    tr:nth-child(even) {
      background-color: #f9f9f9;
    }
    tr:hover {
      background-color: #f1f1f1;
    }"#
    }

    /// Render everything up to and including the opening `<tbody>`.
    fn render_head(&self, summary: &ReportSummary) -> String {
        let css = Self::css();
        let title = escape_html(&self.title);
        let ReportSummary {
            passed,
            failed,
            skipped,
            total,
            ..
        } = *summary;
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    {css}
  </style>
</head>
<body>
  <div class="header-container">
    <h1>Test Results Summary</h1>
    <p>Total Tests: {total} | Passed: {passed} | Failed: {failed} | Skipped: {skipped}</p>
    <div class="chart-container">
      <canvas id="donutChart"></canvas>
    </div>
  </div>
  <div class="table-container">
    <table>
      <thead>
        <tr><th>S.No</th><th>Test Name</th><th>Steps</th><th>Status</th><th>Time Taken</th></tr>
      </thead>
      <tbody>
"#
        )
    }

    /// Render one table row. `index` is 1-based.
    fn render_row(index: usize, record: &TestOutcomeRecord) -> String {
        format!(
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            index,
            escape_html(&record.name),
            escape_html(&record.steps),
            escape_html(&record.display_status()),
            escape_html(&record.duration),
        )
    }

    /// Chart.js configuration for the status donut.
    fn chart_config(summary: &ReportSummary) -> String {
        let labels: Vec<_> = StatusBucket::ALL.iter().map(|b| b.label()).collect();
        let data: Vec<_> = StatusBucket::ALL.iter().map(|b| summary.count(*b)).collect();
        let colors: Vec<_> = StatusBucket::ALL.iter().map(|b| b.color()).collect();
        let config = serde_json::json!({
            "type": "doughnut",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Test Results",
                    "data": data,
                    "backgroundColor": colors,
                    "hoverOffset": 4
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false
            }
        });
        config.to_string()
    }

    /// Render everything after the last table row.
    fn render_tail(&self, summary: &ReportSummary) -> String {
        let chart_script = escape_html(&self.chart_script);
        let chart_config = Self::chart_config(summary);
        format!(
            r#"      </tbody>
    </table>
  </div>
  <script src="{chart_script}"></script>
  <script>
    const ctx = document.getElementById('donutChart').getContext('2d');
    const donutChart = new Chart(ctx, {chart_config});
  </script>
</body>
</html>
"#
        )
    }

    /// Format records into a complete document.
    pub fn format(&self, records: &[TestOutcomeRecord]) -> String {
        let summary = ReportSummary::from_records(records);
        let mut output = String::with_capacity(HTML_BASE_SIZE + records.len() * HTML_ROW_SIZE);

        output.push_str(&self.render_head(&summary));
        for (i, record) in records.iter().enumerate() {
            output.push_str(&Self::render_row(i + 1, record));
        }
        output.push_str(&self.render_tail(&summary));
        output
    }

    /// Format records directly to a writer (streaming).
    pub fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        records: &[TestOutcomeRecord],
    ) -> std::io::Result<()> {
        let summary = ReportSummary::from_records(records);

        writer.write_all(self.render_head(&summary).as_bytes())?;
        for (i, record) in records.iter().enumerate() {
            writer.write_all(Self::render_row(i + 1, record).as_bytes())?;
        }
        writer.write_all(self.render_tail(&summary).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
