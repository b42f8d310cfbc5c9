//! Diagnosis report
//!
//! Aggregate of every case outcome, in case declaration order, plus the
//! text / JSON / HTML renderers the presenter chooses between.

use crate::catalog;
use crate::types::DiagnosticOutcome;
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

/// Mapping from case name to outcome, insertion order preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    cases: IndexMap<String, DiagnosticOutcome>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one case's outcome. Written exactly once per case per run.
    pub fn record(&mut self, name: &str, outcome: DiagnosticOutcome) {
        self.cases.insert(name.to_string(), outcome);
    }

    pub fn outcome(&self, name: &str) -> Option<&DiagnosticOutcome> {
        self.cases.get(name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiagnosticOutcome)> {
        self.cases.iter().map(|(name, outcome)| (name.as_str(), outcome))
    }

    pub fn all_passed(&self) -> bool {
        self.cases.values().all(|outcome| outcome.success)
    }

    pub fn failed_cases(&self) -> Vec<&str> {
        self.cases
            .iter()
            .filter(|(_, outcome)| !outcome.success)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Indented JSON, the canonical machine-readable form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text summary for terminals
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str("NFT API diagnosis\n");
        text.push_str(&"─".repeat(50));
        text.push('\n');

        for (name, outcome) in self.iter() {
            let status = if outcome.success { "ok " } else { "FAIL" };
            text.push_str(&format!("  [{status}] {name}\n"));
            for error in &outcome.errors {
                text.push_str(&format!("         - {error}\n"));
            }
        }

        text.push_str(&"─".repeat(50));
        text.push('\n');
        let failed = self.failed_cases().len();
        text.push_str(&format!(
            "{} cases, {} passed, {} failed\n",
            self.len(),
            self.len() - failed,
            failed
        ));
        let unverified = catalog::unverified_fixture_count();
        if unverified > 0 {
            text.push_str(&format!(
                "note: {unverified} expected hashes in the fixture table are not manually verified\n"
            ));
        }
        text
    }

    /// Standalone HTML page: per-case progress lines followed by the full
    /// report as indented JSON, as a browser-facing presenter renders it.
    pub fn to_html(&self, target: &str) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");
        html.push_str("<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str("  <title>NFT API Diagnosis</title>\n");
        html.push_str("  <style>\n");
        html.push_str(include_str!("report_style.css"));
        html.push_str("  </style>\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");

        html.push_str(&format!(
            "<header><h1>NFT API Diagnosis</h1><p>Inspected NFT API at: {}</p><p>Generated: {}</p></header>\n",
            html_escape(target),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        html.push_str("<section class=\"cases\">\n");
        html.push_str("<h2>Cases</h2>\n");
        html.push_str("<ul>\n");
        for (name, outcome) in self.iter() {
            let class = if outcome.success { "pass" } else { "fail" };
            let status = if outcome.success { "success" } else { "failed" };
            html.push_str(&format!(
                "<li class=\"{}\">{}: {}</li>\n",
                class,
                status,
                html_escape(name)
            ));
        }
        html.push_str("</ul>\n");
        html.push_str("</section>\n");

        html.push_str("<section class=\"report\">\n");
        html.push_str("<h2>Report</h2>\n");
        let json = self
            .to_json()
            .unwrap_or_else(|e| format!("report serialization failed: {e}"));
        html.push_str(&format!("<pre>{}</pre>\n", html_escape(&json)));
        html.push_str("</section>\n");

        let unverified = catalog::unverified_fixture_count();
        if unverified > 0 {
            html.push_str(&format!(
                "<footer><p>{unverified} expected hashes in the fixture table are not manually verified.</p></footer>\n"
            ));
        }

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }

    /// Render in `format` and write to `path`.
    pub fn save(&self, path: &Path, format: ReportFormat, target: &str) -> Result<()> {
        let content = match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json()?,
            ReportFormat::Html => self.to_html(target),
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Output format for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Html,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            other => anyhow::bail!("unknown report format '{other}' (expected text, json or html)"),
        }
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.record("first case", DiagnosticOutcome::from_errors(Vec::new()));
        report.record(
            "second case",
            DiagnosticOutcome::from_errors(vec![ValidationError::incorrect_data(
                "M",
                "owner",
                "expected owner 'x', got: 'y'",
            )]),
        );
        report
    }

    #[test]
    fn test_record_preserves_declaration_order() {
        let report = sample_report();
        let names: Vec<_> = report.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["first case", "second case"]);
    }

    #[test]
    fn test_json_shape() {
        let report = sample_report();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["first case"], serde_json::json!({ "success": true }));
        assert_eq!(value["second case"]["success"], false);
        assert_eq!(value["second case"]["errors"][0]["type"], "incorrect data");
        assert_eq!(value["second case"]["errors"][0]["field"], "owner");
    }

    #[test]
    fn test_all_passed_and_failed_cases() {
        let report = sample_report();
        assert!(!report.all_passed());
        assert_eq!(report.failed_cases(), ["second case"]);
    }

    #[test]
    fn test_text_render_lists_every_case() {
        let text = sample_report().to_text();
        assert!(text.contains("[ok ] first case"));
        assert!(text.contains("[FAIL] second case"));
        assert!(text.contains("2 cases, 1 passed, 1 failed"));
    }

    #[test]
    fn test_html_render_escapes_and_embeds_json() {
        let html = sample_report().to_html("http://localhost:1919/?a=1&b=2");
        assert!(html.contains("&amp;b=2"));
        assert!(html.contains("success: first case"));
        assert!(html.contains("failed: second case"));
        assert!(html.contains("<pre>"));
        assert!(html.contains("incorrect data"));
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!(ReportFormat::from_str("text").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_str("JSON").unwrap(), ReportFormat::Json);
        assert_eq!(ReportFormat::from_str("Html").unwrap(), ReportFormat::Html);
        assert!(ReportFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_save_writes_selected_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        sample_report()
            .save(&path, ReportFormat::Json, "http://localhost:1919")
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"second case\""));
    }
}
