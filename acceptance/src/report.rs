//! Acceptance report types: step results, severity levels, and report aggregation.

use serde::Serialize;

use crate::error::{AcceptanceError, ErrorKind};

/// Outcome class of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The step passed.
    Pass,
    /// The step is a placeholder without an implementation.
    Pending,
    /// The step did not run because an earlier step stopped the scenario.
    Skipped,
    /// No step definition matches the step text.
    Undefined,
    /// The step failed (blocks acceptance).
    Failure,
}

impl Severity {
    /// Short status label used in the text report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Pending => "PEND",
            Severity::Skipped => "SKIP",
            Severity::Undefined => "UNDF",
            Severity::Failure => "FAIL",
        }
    }
}

/// A single step result.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    /// Feature the step belongs to.
    pub feature: String,
    /// Scenario the step belongs to.
    pub scenario: String,
    /// Step text as written, keyword included.
    pub step: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Classification of the error behind a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    /// Optional additional detail lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl StepResult {
    fn new(
        scope: &Scope<'_>,
        step: &str,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            feature: scope.feature.to_string(),
            scenario: scope.scenario.to_string(),
            step: step.to_string(),
            message: message.into(),
            severity,
            error_kind: None,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(scope: &Scope<'_>, step: &str, message: impl Into<String>) -> Self {
        Self::new(scope, step, Severity::Pass, message)
    }

    /// Creates a pending result.
    pub fn pending(scope: &Scope<'_>, step: &str, message: impl Into<String>) -> Self {
        Self::new(scope, step, Severity::Pending, message)
    }

    /// Creates a skipped result.
    pub fn skipped(scope: &Scope<'_>, step: &str) -> Self {
        Self::new(scope, step, Severity::Skipped, "not run")
    }

    /// Creates an undefined-step result.
    pub fn undefined(scope: &Scope<'_>, step: &str) -> Self {
        Self::new(
            scope,
            step,
            Severity::Undefined,
            "no step definition matches this text",
        )
    }

    /// Creates a failure result from the error that stopped the step.
    pub fn fail(scope: &Scope<'_>, step: &str, error: &AcceptanceError) -> Self {
        let mut result = Self::new(scope, step, Severity::Failure, error.to_string());
        result.error_kind = Some(error.kind());
        result.details = error.details().to_vec();
        result
    }

    /// Returns true if this result blocks acceptance.
    pub fn is_failure(&self) -> bool {
        matches!(self.severity, Severity::Failure | Severity::Undefined)
    }
}

/// Feature and scenario names a result is filed under.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    /// Feature name.
    pub feature: &'a str,
    /// Scenario name.
    pub scenario: &'a str,
}

/// Aggregated report across every scenario run.
#[derive(Debug, Default, Serialize)]
pub struct AcceptanceReport {
    /// All individual step results, in execution order.
    pub results: Vec<StepResult>,
}

/// Per-severity totals of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Passed steps.
    pub passed: usize,
    /// Pending steps.
    pub pending: usize,
    /// Skipped steps.
    pub skipped: usize,
    /// Undefined steps.
    pub undefined: usize,
    /// Failed steps.
    pub failed: usize,
}

impl AcceptanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: StepResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: AcceptanceReport) {
        self.results.extend(other.results);
    }

    /// Returns the count of results that block acceptance.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if nothing blocks acceptance.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Totals results by severity.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for result in &self.results {
            match result.severity {
                Severity::Pass => summary.passed += 1,
                Severity::Pending => summary.pending += 1,
                Severity::Skipped => summary.skipped += 1,
                Severity::Undefined => summary.undefined += 1,
                Severity::Failure => summary.failed += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPE: Scope<'static> = Scope {
        feature: "Collections",
        scenario: "Same entities",
    };

    #[test]
    fn undefined_and_failure_block_acceptance() {
        let mut report = AcceptanceReport::new();
        report.push(StepResult::pass(&SCOPE, "Given a", "ok"));
        report.push(StepResult::pending(&SCOPE, "Then b", "pending"));
        assert!(report.all_passed());

        report.push(StepResult::undefined(&SCOPE, "Then c"));
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn failure_carries_error_kind_and_details() {
        let err = AcceptanceError::assertion("5 != 4", vec!["foaf:Person: 3".into()]);
        let result = StepResult::fail(&SCOPE, "Then d", &err);
        assert_eq!(result.error_kind, Some(ErrorKind::Assertion));
        assert_eq!(result.details, vec!["foaf:Person: 3".to_string()]);
        assert!(result.is_failure());
    }

    #[test]
    fn summary_totals_each_severity() {
        let mut report = AcceptanceReport::new();
        report.push(StepResult::pass(&SCOPE, "a", "ok"));
        report.push(StepResult::pass(&SCOPE, "b", "ok"));
        report.push(StepResult::skipped(&SCOPE, "c"));
        let mut other = AcceptanceReport::new();
        other.push(StepResult::fail(
            &SCOPE,
            "d",
            &AcceptanceError::MissingContext("entity count"),
        ));
        report.extend(other);

        let summary = report.summary();
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn json_uses_lowercase_severity() {
        let result = StepResult::pass(&SCOPE, "a", "ok");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["severity"], "pass");
        assert!(json.get("details").is_none());
    }
}
