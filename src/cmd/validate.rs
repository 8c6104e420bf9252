//! Validate a skill package and print the report
//!
//! The report is rendered only after every check has finished; the returned
//! value is the process exit status.

use anyhow::Result;
use std::path::{Path, PathBuf};

use skillcheck::config::Config;
use skillcheck::report::{OutputFormat, Reporter};
use skillcheck::ui;

/// Options shared by every validation run
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub format: OutputFormat,
    pub quiet: bool,
    pub config: Option<PathBuf>,
}

pub fn cmd_validate(path: &Path, options: &ValidateOptions) -> Result<i32> {
    let config = Config::load(options.config.as_deref())?;

    let reporter = Reporter::new(options.format)
        .quiet(options.quiet || ui::is_quiet())
        .color(options.format == OutputFormat::Text && ui::stdout_is_tty());

    match skillcheck::validate_package(path, &config) {
        Ok(report) => {
            tracing::info!(
                errors = report.error_count(),
                warnings = report.warning_count(),
                "validation finished"
            );
            print!("{}", reporter.render(path, &report));
            Ok(report.exit_code())
        }
        Err(err) => {
            tracing::info!(error = %err, "package could not be inspected");
            print!("{}", reporter.render_structural(path, &err));
            Ok(1)
        }
    }
}
