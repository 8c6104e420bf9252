//! # skillcheck - skill package validator
//!
//! A skill package is a directory holding a `SKILL.md` primary document plus
//! any auxiliary files it links to. The document starts with a `---`
//! delimited header carrying `name`, `description` and an optional
//! `allowed-tools` list; everything after the header is free-form markdown.
//!
//! ## Modules
//!
//! - [`package`] - Opening a package directory and reading its primary document
//! - [`header`] - Header extraction from the primary document
//! - [`rules`] - The ordered check pipeline (fields, body, references)
//! - [`diagnostic`] - Diagnostics, severities and the aggregated report
//! - [`report`] - Text and JSON rendering of a report
//! - [`config`] - Lint configuration (thresholds, disabled rules)
//! - [`scaffold`] - Creating new packages from templates
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use skillcheck::config::Config;
//!
//! let report = skillcheck::validate_package(Path::new("skills/pdf-forms"), &Config::default())
//!     .expect("package should be readable");
//!
//! if report.passed() {
//!     println!("{} warning(s)", report.warnings().count());
//! }
//! ```

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod header;
pub mod package;
pub mod report;
pub mod rules;
pub mod scaffold;
pub mod ui;

use std::path::Path;

use config::Config;
use diagnostic::ValidationReport;
use error::StructuralError;
use package::Package;

/// Default path constants for package layout.
pub mod paths {
    /// File name of the primary document inside a package: `SKILL.md`
    pub const PRIMARY_DOCUMENT: &str = "SKILL.md";
    /// Config file name inside the user config directory: `skillcheck/config.md`
    pub const CONFIG_FILE: &str = "skillcheck/config.md";
}

/// Validate the package rooted at `root`.
///
/// Structural problems (missing directory, missing or unreadable `SKILL.md`,
/// absent header) abort the run. Every other finding is collected into the
/// returned report.
pub fn validate_package(root: &Path, config: &Config) -> Result<ValidationReport, StructuralError> {
    let package = Package::open(root)?;
    validate(&package, config)
}

/// Run the full check pipeline over an already opened package.
pub fn validate(package: &Package, config: &Config) -> Result<ValidationReport, StructuralError> {
    let extraction = header::extract_header(package.content())?;
    let pipeline = rules::Pipeline::standard();
    let ctx = rules::RuleContext {
        package,
        header: &extraction.record,
        body: &extraction.body,
        config,
    };

    let (checks, found) = pipeline.run(&ctx);

    let mut diagnostics = extraction.diagnostics;
    diagnostics.extend(found);

    Ok(ValidationReport::new(checks, diagnostics).without_disabled(&config.lint.disable))
}
