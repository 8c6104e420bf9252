//! Rendering of a finished [`ValidationReport`].
//!
//! Nothing is printed while checks run; the renderer receives the complete
//! report and produces the whole output at once.

use serde_json::json;
use std::fmt::Write as _;
use std::path::Path;

use crate::diagnostic::{Diagnostic, Severity, ValidationReport};
use crate::error::StructuralError;
use crate::paths::PRIMARY_DOCUMENT;
use crate::ui::{self, colors};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report with icons
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Renders reports in one format
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    pub format: OutputFormat,
    /// Omit the per-check progress lines
    pub quiet: bool,
    /// Emit ANSI colors
    pub color: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render a completed report
    pub fn render(&self, root: &Path, report: &ValidationReport) -> String {
        match self.format {
            OutputFormat::Text => self.render_text(root, report),
            OutputFormat::Json => render_json(root, report),
        }
    }

    /// Render a run that stopped before any check could execute
    pub fn render_structural(&self, root: &Path, err: &StructuralError) -> String {
        match self.format {
            OutputFormat::Text => self.render_structural_text(root, err),
            OutputFormat::Json => format!(
                "{:#}\n",
                json!({
                    "package": root.display().to_string(),
                    "passed": false,
                    "clean": false,
                    "errors": 1,
                    "warnings": 0,
                    "fatal": err.to_string(),
                    "checks": [],
                    "diagnostics": [],
                })
            ),
        }
    }

    fn render_text(&self, root: &Path, report: &ValidationReport) -> String {
        let c = self.color;
        let mut out = String::new();

        if !self.quiet {
            let _ = writeln!(out, "Validating skill package: {}", root.display());
            let _ = writeln!(out, "{} Found {}", ui::success_icon(c), PRIMARY_DOCUMENT);
            let _ = writeln!(out, "{} Header parsed", ui::success_icon(c));
            for check in &report.checks {
                let _ = writeln!(out, "{} Checked {}", ui::success_icon(c), check);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "{}", ui::banner(c));

        if report.clean() {
            let _ = writeln!(
                out,
                "{} {}",
                ui::success_icon(c),
                colors::success("All validations passed!", c)
            );
            return out;
        }

        let errors: Vec<&Diagnostic> = report.errors().collect();
        let warnings: Vec<&Diagnostic> = report.warnings().collect();

        if !errors.is_empty() {
            self.write_block(&mut out, Severity::Error, &errors);
        }
        if !warnings.is_empty() {
            if !errors.is_empty() {
                out.push('\n');
            }
            self.write_block(&mut out, Severity::Warning, &warnings);
        }

        out.push('\n');
        if report.passed() {
            let line = format!(
                "Validation passed with {}",
                ui::format::count_noun(warnings.len(), "warning")
            );
            let _ = writeln!(out, "{} {}", ui::success_icon(c), colors::success(&line, c));
        } else {
            let line = format!(
                "Validation failed with {}",
                ui::format::count_noun(errors.len(), "error")
            );
            let _ = writeln!(
                out,
                "{} {}",
                ui::severity_icon(Severity::Error, c),
                colors::error(&line, c)
            );
        }

        out
    }

    fn write_block(&self, out: &mut String, severity: Severity, items: &[&Diagnostic]) {
        let c = self.color;
        let heading = match severity {
            Severity::Error => colors::error(&format!("Found {} error(s):", items.len()), c),
            Severity::Warning => colors::warning(&format!("Found {} warning(s):", items.len()), c),
        };
        let _ = writeln!(out, "{} {}", ui::severity_icon(severity, c), heading);

        for (idx, diagnostic) in items.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} {}",
                idx + 1,
                colors::secondary(&format!("[{}]", diagnostic.rule), c),
                diagnostic
            );
        }
    }

    fn render_structural_text(&self, root: &Path, err: &StructuralError) -> String {
        let c = self.color;
        let mut out = String::new();

        if !self.quiet {
            let _ = writeln!(out, "Validating skill package: {}", root.display());
            if matches!(err, StructuralError::MissingHeader) {
                let _ = writeln!(out, "{} Found {}", ui::success_icon(c), PRIMARY_DOCUMENT);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "{}", ui::banner(c));
        let icon = ui::severity_icon(Severity::Error, c);
        let _ = writeln!(out, "{} {}", icon, colors::error("Found 1 error(s):", c));
        let _ = writeln!(out, "  1. {}", err);
        out.push('\n');
        let _ = writeln!(
            out,
            "{} {}",
            icon,
            colors::error("Validation failed: the package could not be inspected", c)
        );

        out
    }
}

fn render_json(root: &Path, report: &ValidationReport) -> String {
    format!(
        "{:#}\n",
        json!({
            "package": root.display().to_string(),
            "passed": report.passed(),
            "clean": report.clean(),
            "errors": report.error_count(),
            "warnings": report.warning_count(),
            "checks": report.checks,
            "diagnostics": report.diagnostics,
        })
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(diagnostics: Vec<Diagnostic>) -> ValidationReport {
        ValidationReport::new(vec!["name", "references"], diagnostics)
    }

    #[test]
    fn test_clean_report() {
        let out = Reporter::new(OutputFormat::Text).render(Path::new("pkg"), &sample(vec![]));
        assert!(out.starts_with("Validating skill package: pkg\n"));
        assert!(out.contains("✓ Found SKILL.md\n"));
        assert!(out.contains("✓ Checked name\n✓ Checked references\n"));
        assert!(out.ends_with("✓ All validations passed!\n"));
        assert!(!out.contains("warning"));
    }

    #[test]
    fn test_warnings_only_report() {
        let report = sample(vec![Diagnostic::warning("name/generic", "too generic").at_field("name")]);
        let out = Reporter::new(OutputFormat::Text).render(Path::new("pkg"), &report);
        assert!(out.contains("⚠ Found 1 warning(s):\n  1. [name/generic] name: too generic\n"));
        assert!(out.ends_with("✓ Validation passed with 1 warning\n"));
        assert!(!out.contains("error(s)"));
    }

    #[test]
    fn test_failed_report_lists_errors_then_warnings() {
        let report = sample(vec![
            Diagnostic::warning("body/too-long", "long"),
            Diagnostic::error("name/too-long", "too long").at_field("name"),
            Diagnostic::error("references/missing", "Referenced file not found: a.md").at_line(9),
        ]);
        let out = Reporter::new(OutputFormat::Text).render(Path::new("pkg"), &report);

        let errors_at = out.find("✗ Found 2 error(s):").unwrap();
        let warnings_at = out.find("⚠ Found 1 warning(s):").unwrap();
        assert!(errors_at < warnings_at);
        assert!(out.contains("  1. [name/too-long] name: too long\n"));
        assert!(out.contains("  2. [references/missing] line 9: Referenced file not found: a.md\n"));
        assert!(out.ends_with("✗ Validation failed with 2 errors\n"));
    }

    #[test]
    fn test_quiet_omits_progress() {
        let out = Reporter::new(OutputFormat::Text)
            .quiet(true)
            .render(Path::new("pkg"), &sample(vec![]));
        assert!(!out.contains("Checked"));
        assert!(out.starts_with(&ui::banner(false)));
    }

    #[test]
    fn test_json_report() {
        let report = sample(vec![Diagnostic::error("name/empty", "Name must not be empty").at_field("name")]);
        let out = Reporter::new(OutputFormat::Json).render(Path::new("pkg"), &report);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["passed"], false);
        assert_eq!(value["errors"], 1);
        assert_eq!(value["warnings"], 0);
        assert_eq!(value["diagnostics"][0]["severity"], "error");
        assert_eq!(value["diagnostics"][0]["rule"], "name/empty");
        assert_eq!(value["diagnostics"][0]["location"]["field"], "name");
    }

    #[test]
    fn test_structural_text_and_json() {
        let reporter = Reporter::new(OutputFormat::Text);
        let out = reporter.render_structural(Path::new("pkg"), &StructuralError::MissingHeader);
        assert!(out.contains("✓ Found SKILL.md"));
        assert!(out.contains("  1. missing header"));
        assert!(out.contains("Validation failed"));

        let out = Reporter::new(OutputFormat::Json)
            .render_structural(Path::new("pkg"), &StructuralError::MissingHeader);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["passed"], false);
        assert!(value["fatal"].as_str().unwrap().starts_with("missing header"));
    }
}
