//! Diagnostics and the aggregated validation report.
//!
//! Every check returns its own `Vec<Diagnostic>`; the report is built once,
//! by value, from the concatenation of those vectors in pipeline order.

use serde::Serialize;
use std::fmt;

/// Severity level for a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported but does not fail the package
    Warning,
    /// Fails the package
    Error,
}

/// Where in the document a finding points
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// A header field, by key
    Field(&'static str),
    /// A 1-based line of the primary document
    Line(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{}", name),
            Self::Line(line) => write!(f, "line {}", line),
        }
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Rule code, `family/name` (e.g. `name/too-long`)
    pub rule: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn error(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule,
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            message: message.into(),
            location: None,
        }
    }

    /// Attach a header field location
    pub fn at_field(mut self, field: &'static str) -> Self {
        self.location = Some(Location::Field(field));
        self
    }

    /// Attach a document line location
    pub fn at_line(mut self, line: usize) -> Self {
        self.location = Some(Location::Line(line));
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// True if `pattern` names this diagnostic's rule or its family.
    pub fn matches_rule(&self, pattern: &str) -> bool {
        self.rule == pattern
            || self
                .rule
                .split_once('/')
                .is_some_and(|(family, _)| family == pattern)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}", location, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Aggregated result of one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Names of the checks that ran, in order
    pub checks: Vec<&'static str>,
    /// All findings, in discovery order
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new(checks: Vec<&'static str>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            checks,
            diagnostics,
        }
    }

    /// Drop warnings whose rule (or rule family) is listed in `disabled`.
    ///
    /// Errors are never dropped: they decide the verdict.
    pub fn without_disabled(mut self, disabled: &[String]) -> Self {
        if !disabled.is_empty() {
            self.diagnostics.retain(|d| {
                d.is_error() || !disabled.iter().any(|pattern| d.matches_rule(pattern))
            });
        }
        self
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True iff there are no errors, regardless of warnings
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// True iff there are no findings at all
    pub fn clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Process exit status for this verdict
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(diagnostics: Vec<Diagnostic>) -> ValidationReport {
        ValidationReport::new(vec![], diagnostics)
    }

    #[test]
    fn test_empty_report_is_clean_and_passed() {
        let r = report(vec![]);
        assert!(r.passed());
        assert!(r.clean());
        assert_eq!(r.exit_code(), 0);
    }

    #[test]
    fn test_warnings_only_pass_but_are_not_clean() {
        let r = report(vec![Diagnostic::warning("name/generic", "too generic")]);
        assert!(r.passed());
        assert!(!r.clean());
        assert_eq!(r.exit_code(), 0);
    }

    #[test]
    fn test_any_error_fails() {
        let r = report(vec![
            Diagnostic::warning("body/too-long", "long"),
            Diagnostic::error("name/too-long", "long"),
        ]);
        assert!(!r.passed());
        assert_eq!(r.error_count(), 1);
        assert_eq!(r.warning_count(), 1);
        assert_eq!(r.exit_code(), 1);
    }

    #[test]
    fn test_severity_partitions_keep_discovery_order() {
        let r = report(vec![
            Diagnostic::error("a/one", "first"),
            Diagnostic::warning("a/two", "second"),
            Diagnostic::error("a/three", "third"),
        ]);
        let errors: Vec<_> = r.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(errors, vec!["first", "third"]);
    }

    #[test]
    fn test_without_disabled_by_code_and_family() {
        let r = report(vec![
            Diagnostic::warning("description/no-trigger", "x"),
            Diagnostic::warning("description/person", "y"),
            Diagnostic::error("name/too-long", "z"),
        ]);

        let by_code = r.clone().without_disabled(&["description/no-trigger".to_string()]);
        assert_eq!(by_code.diagnostics.len(), 2);

        let by_family = r.without_disabled(&["description".to_string()]);
        assert_eq!(by_family.diagnostics.len(), 1);
        assert_eq!(by_family.diagnostics[0].rule, "name/too-long");
    }

    #[test]
    fn test_without_disabled_keeps_errors() {
        let r = report(vec![
            Diagnostic::error("name/invalid-chars", "x"),
            Diagnostic::warning("name/generic", "y"),
            Diagnostic::error("references/missing", "z"),
        ]);

        let r = r.without_disabled(&["name".to_string(), "references".to_string()]);
        let rules: Vec<_> = r.diagnostics.iter().map(|d| d.rule).collect();
        assert_eq!(rules, vec!["name/invalid-chars", "references/missing"]);
        assert!(!r.passed());
    }

    #[test]
    fn test_display_includes_location() {
        let d = Diagnostic::error("name/empty", "must not be empty").at_field("name");
        assert_eq!(d.to_string(), "name: must not be empty");

        let d = Diagnostic::error("body/backslash-path", "bad").at_line(7);
        assert_eq!(d.to_string(), "line 7: bad");
    }
}
