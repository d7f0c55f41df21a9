// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reporter configuration.
//!
//! Every field has a default, so a host that never loads a config file gets
//! the fixed output location. A config file, when used, is TOML with a
//! required `version = 1`:
//!
//! ```toml
//! version = 1
//! output = "playwright-report/test-report.html"
//! title = "Playwright Test Report"
//! chart_script = "https://cdn.jsdelivr.net/npm/chart.js"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Default report location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "playwright-report/test-report.html";

/// Default document title.
pub const DEFAULT_TITLE: &str = "Playwright Test Report";

/// Chart.js, loaded by the browser when the report is viewed.
pub const DEFAULT_CHART_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "output", "title", "chart_script"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(flatten)]
    config: ReportConfig,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Report settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where the HTML document is written. Overwritten on every run.
    pub output: PathBuf,

    /// Document `<title>`.
    pub title: String,

    /// URL of the charting script referenced from the document.
    pub chart_script: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            chart_script: DEFAULT_CHART_SCRIPT.to_string(),
        }
    }
}

impl ReportConfig {
    /// Use a different output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Load config from a file, warning on unknown keys.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse config from string content, warning on unknown keys.
    ///
    /// `path` is only used in error messages and warnings.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config_error = |message: String| Error::Config {
            message,
            path: Some(path.to_path_buf()),
        };

        let version_check: VersionOnly =
            toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
        let version = version_check
            .version
            .ok_or_else(|| config_error("missing required field: version".to_string()))?;
        if version != SUPPORTED_VERSION {
            return Err(config_error(format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            )));
        }

        let flexible: FlexibleConfig =
            toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

        for key in flexible.unknown.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn_unknown_key(path, key);
            }
        }

        Ok(flexible.config)
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(
        "{}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
