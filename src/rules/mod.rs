//! The check pipeline.
//!
//! Each check is a value implementing [`Check`]: it reads the shared
//! [`RuleContext`] and returns its own findings. The pipeline runs every
//! check in registration order and concatenates the results, so a failing
//! check never suppresses a later one and the report order is fixed:
//! fields, then body, then references.

use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::header::HeaderRecord;
use crate::package::Package;

pub mod body;
pub mod fields;
pub mod references;

/// Everything a check may inspect during one run
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub package: &'a Package,
    pub header: &'a HeaderRecord,
    pub body: &'a str,
    pub config: &'a Config,
}

impl RuleContext<'_> {
    /// Document line number for a 0-based body line index
    pub fn document_line(&self, body_line: usize) -> usize {
        self.header.body_start_line + body_line
    }
}

/// A single independent rule
pub trait Check {
    /// Short label shown in the progress lines (`Checked <name>`)
    fn name(&self) -> &'static str;

    /// Inspect the context and return findings
    fn run(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic>;
}

/// Ordered list of checks
#[derive(Default)]
pub struct Pipeline {
    checks: Vec<Box<dyn Check>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in checks in report order
    pub fn standard() -> Self {
        Self::new()
            .with(fields::NameCheck)
            .with(fields::DescriptionCheck)
            .with(fields::AllowedToolsCheck)
            .with(body::BodySizeCheck)
            .with(body::PathSeparatorCheck)
            .with(body::TimeSensitiveCheck)
            .with(references::ReferenceCheck)
    }

    /// Append a check to the end of the pipeline
    pub fn with(mut self, check: impl Check + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check, returning the names that ran and all findings.
    pub fn run(&self, ctx: &RuleContext<'_>) -> (Vec<&'static str>, Vec<Diagnostic>) {
        let mut names = Vec::with_capacity(self.checks.len());
        let mut diagnostics = Vec::new();

        for check in &self.checks {
            let found = check.run(ctx);
            tracing::debug!(check = check.name(), findings = found.len(), "check complete");
            names.push(check.name());
            diagnostics.extend(found);
        }

        (names, diagnostics)
    }
}
