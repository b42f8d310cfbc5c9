//! Diagnostic case runner
//!
//! Executes one named case, converts any fault into a structured error and
//! records the outcome. A fault in one case never stops the suite from
//! proceeding to the next.

use crate::report::Report;
use crate::types::{DiagnosticOutcome, ValidationError};
use anyhow::Result;
use std::future::Future;
use tracing::warn;

/// Append-only progress output, one line per case.
///
/// The sink is never read back; the default is a no-op so library callers
/// pay nothing for progress they do not want.
pub trait ProgressSink: Send {
    fn append_line(&mut self, line: &str);
}

/// Discards all progress output
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn append_line(&mut self, _line: &str) {}
}

/// Collects progress lines in memory
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl ProgressSink for LineBuffer {
    fn append_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Run one case and record its outcome under `name`.
///
/// A normal return records the case's own errors; success iff there are
/// none. A fault is wrapped as a single `exception` entry. The status line
/// reflects whether the case ran to completion, not whether it passed.
pub async fn run_case<F>(name: &str, case: F, report: &mut Report, sink: &mut dyn ProgressSink)
where
    F: Future<Output = Result<Vec<ValidationError>>>,
{
    match case.await {
        Ok(errors) => {
            sink.append_line(&format!("success: {name}"));
            report.record(name, DiagnosticOutcome::from_errors(errors));
        }
        Err(fault) => {
            warn!(case = name, %fault, "diagnostic case faulted");
            sink.append_line(&format!("err: {name}"));
            report.record(
                name,
                DiagnosticOutcome::from_errors(vec![ValidationError::exception(
                    fault.to_string(),
                )]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use anyhow::anyhow;

    #[tokio::test]
    async fn test_clean_case_records_success() {
        let mut report = Report::new();
        let mut sink = LineBuffer::new();

        run_case("clean", async { Ok(Vec::new()) }, &mut report, &mut sink).await;

        let outcome = report.outcome("clean").unwrap();
        assert!(outcome.success);
        assert!(outcome.errors.is_empty());
        assert_eq!(sink.lines(), ["success: clean"]);
    }

    #[tokio::test]
    async fn test_errors_mark_failure_in_original_order() {
        let errors = vec![
            ValidationError::incorrect_data("M", "block_hash", "first"),
            ValidationError::incorrect_data("M", "owner", "second"),
        ];
        let returned = errors.clone();
        let mut report = Report::new();
        let mut sink = LineBuffer::new();

        run_case("dirty", async { Ok(returned) }, &mut report, &mut sink).await;

        let outcome = report.outcome("dirty").unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.errors, errors);
        // A case that ran to completion still reports a "success:" line.
        assert_eq!(sink.lines(), ["success: dirty"]);
    }

    #[tokio::test]
    async fn test_fault_becomes_single_exception_entry() {
        let mut report = Report::new();
        let mut sink = LineBuffer::new();

        run_case(
            "faulty",
            async { Err(anyhow!("connection reset")) },
            &mut report,
            &mut sink,
        )
        .await;

        let outcome = report.outcome("faulty").unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].kind, ErrorKind::Exception);
        assert_eq!(outcome.errors[0].message, "connection reset");
        assert_eq!(sink.lines(), ["err: faulty"]);
    }

    #[tokio::test]
    async fn test_faulting_case_does_not_stop_following_cases() {
        let mut report = Report::new();
        let mut sink = NoopSink;

        run_case("first", async { Err(anyhow!("boom")) }, &mut report, &mut sink).await;
        run_case("second", async { Ok(Vec::new()) }, &mut report, &mut sink).await;

        assert_eq!(report.len(), 2);
        assert!(report.outcome("second").unwrap().success);
    }
}
