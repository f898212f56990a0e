//! Rendering of failing verdicts.

use std::str::FromStr;

use serde::Serialize;

use super::verdict::{Verdict, Violation};

/// Environment variable selecting the report format (`text` or `json`).
pub const REPORT_FORMAT_ENV: &str = "ALGEBRAIC_LAWS_REPORT";
/// Environment variable capping the length of each violation detail.
pub const MAX_DETAIL_ENV: &str = "ALGEBRAIC_LAWS_MAX_DETAIL";

/// Supported output formats for failure reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per violation.
    #[default]
    Text,
    /// Pretty-printed JSON with every violation inline.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format `{other}`")),
        }
    }
}

/// How failing verdicts are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Output format.
    pub format: ReportFormat,
    /// Maximum number of characters kept from each violation detail.
    pub max_detail_len: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            max_detail_len: Some(2_000),
        }
    }
}

impl ReportConfig {
    /// Defaults overridden by [`REPORT_FORMAT_ENV`] and [`MAX_DETAIL_ENV`].
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(REPORT_FORMAT_ENV) {
            match raw.parse::<ReportFormat>() {
                Ok(format) => config.format = format,
                Err(error) => log::warn!("ignoring {REPORT_FORMAT_ENV}: {error}"),
            }
        }
        if let Ok(raw) = std::env::var(MAX_DETAIL_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(0) => config.max_detail_len = None,
                Ok(limit) => config.max_detail_len = Some(limit),
                Err(error) => log::warn!("ignoring {MAX_DETAIL_ENV}={raw:?}: {error}"),
            }
        }
        config
    }

    /// Set output format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Cap detail length; `0` disables truncation.
    pub fn with_max_detail_len(mut self, limit: usize) -> Self {
        self.max_detail_len = (limit > 0).then_some(limit);
        self
    }
}

#[derive(Serialize)]
struct JsonReport {
    evaluated: usize,
    violated: usize,
    violations: Vec<Violation>,
}

/// Render a verdict for humans or machines.
pub fn render_verdict(verdict: &Verdict, config: &ReportConfig) -> String {
    let violations: Vec<Violation> = verdict
        .violations()
        .iter()
        .cloned()
        .map(|mut violation| {
            violation.detail = truncate_detail(&violation.detail, config.max_detail_len);
            violation
        })
        .collect();

    match config.format {
        ReportFormat::Json => serde_json::to_string_pretty(&JsonReport {
            evaluated: verdict.evaluated,
            violated: violations.len(),
            violations,
        })
        .expect("report JSON should serialize"),
        ReportFormat::Text => {
            let mut out = format!(
                "{} of {} law evaluation(s) violated\n",
                violations.len(),
                verdict.evaluated
            );
            for violation in &violations {
                out.push_str(&format!("  - {violation}\n"));
            }
            out
        }
    }
}

/// Truncate `detail` to at most `limit` characters, marking the cut.
pub fn truncate_detail(detail: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) if detail.chars().count() > limit => {
            let kept: String = detail.chars().take(limit).collect();
            format!("{kept}...")
        }
        _ => detail.to_string(),
    }
}
