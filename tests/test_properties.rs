//! Library-level behavior of a whole validation run

use skillcheck::config::Config;
use skillcheck::diagnostic::{Severity, ValidationReport};
use skillcheck::package::Package;
use skillcheck::rules::fields::check_name;
use std::fs;
use tempfile::TempDir;

mod support;
use support::fixtures::{skill, skill_with_body};

fn run(content: &str) -> ValidationReport {
    let package = Package::from_content("/nonexistent/pkg", content);
    skillcheck::validate(&package, &Config::default()).unwrap()
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_findings_follow_pipeline_order() {
    // header warning first, then name, description, body and reference findings
    let content = "---\nname: My_Skill\ndescription: Fills forms.\ncolour: blue\n---\n\
                   As of 2024 use scripts\\a.py and [x](x.md).\n";
    let report = run(content);

    let rules: Vec<&str> = report.diagnostics.iter().map(|d| d.rule).collect();
    assert_eq!(
        rules,
        vec![
            "header/unknown-key",
            "name/invalid-chars",
            "description/no-trigger",
            "body/backslash-path",
            "body/time-sensitive",
            "references/missing",
        ]
    );
}

#[test]
fn test_every_check_runs_even_after_errors() {
    let report = run(&skill("claude-helper", "", 0));

    assert_eq!(report.checks.len(), 7);
    assert!(report.diagnostics.iter().any(|d| d.rule == "name/reserved-word"));
    assert!(report.diagnostics.iter().any(|d| d.rule == "description/empty"));
}

// ============================================================================
// VERDICT
// ============================================================================

#[test]
fn test_verdict_depends_only_on_errors() {
    let warnings_only = run(&skill("pdf-forms", "Fills PDF forms.", 600));
    assert!(warnings_only.warning_count() >= 2);
    assert_eq!(warnings_only.error_count(), 0);
    assert!(warnings_only.passed());
    assert!(!warnings_only.clean());
    assert_eq!(warnings_only.exit_code(), 0);

    let failed = run(&skill("pdf-forms", "Fills <PDF> forms. Use when asked.", 1));
    assert_eq!(failed.error_count(), 1);
    assert_eq!(failed.diagnostics[0].severity, Severity::Error);
    assert!(!failed.passed());
    assert_eq!(failed.exit_code(), 1);
}

fn assert_superset(before: &ValidationReport, after: &ValidationReport) {
    assert!(after.error_count() >= before.error_count());
    assert!(after.warning_count() >= before.warning_count());
    for diagnostic in &before.diagnostics {
        assert!(
            after.diagnostics.contains(diagnostic),
            "{:?} disappeared from {:?}",
            diagnostic,
            after.diagnostics
        );
    }
}

#[test]
fn test_adding_a_broken_link_never_removes_findings() {
    let base = skill_with_body("Read [guide](guide.md).\n");
    let worse = skill_with_body("Read [guide](guide.md) and [other](other.md).\n");

    let before = run(&base);
    let after = run(&worse);

    assert_superset(&before, &after);
    assert!(after.error_count() > before.error_count());
}

#[test]
fn test_adding_dated_wording_never_removes_findings() {
    let base = skill("pdf-forms", "Fills PDF forms.", 3) + "Read [guide](guide.md).\n";
    let worse = base.clone() + "Before 2025 the form had two pages.\n";

    let before = run(&base);
    let after = run(&worse);

    assert_superset(&before, &after);
    assert_eq!(after.error_count(), before.error_count());
    assert_eq!(after.warning_count(), before.warning_count() + 1);
}

#[test]
fn test_adding_a_header_defect_never_removes_findings() {
    let base = skill_with_body("As of 2024 see [guide](guide.md).\n");
    let worse = base.replacen("name: pdf-forms", "name: Pdf-Forms", 1);

    let before = run(&base);
    let after = run(&worse);

    assert_superset(&before, &after);
    assert!(after.error_count() > before.error_count());
}

#[test]
fn test_repeated_runs_are_identical() {
    let content = skill_with_body("Until March 2025 see [a](a.md), [a](a.md) and C:\\tmp\\x.\n");
    assert_eq!(run(&content), run(&content));
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

#[test]
fn test_well_formed_identifiers_have_no_errors() {
    let longest = "a".repeat(64);
    for name in ["a", "pdf-forms", "x1-y2-z3", "processing-excel-files", longest.as_str()] {
        let found = check_name(name, 64);
        assert!(
            found.iter().all(|d| !d.is_error()),
            "{} produced {:?}",
            name,
            found
        );
    }
}

#[test]
fn test_malformed_identifiers_have_errors() {
    let too_long = "a".repeat(65);
    for name in ["PDF", "pdf_forms", "pdf forms", "my-claude-skill", too_long.as_str()] {
        assert!(
            check_name(name, 64).iter().any(|d| d.is_error()),
            "{} should fail",
            name
        );
    }
}

// ============================================================================
// REFERENCES
// ============================================================================

#[test]
fn test_references_resolve_against_package_root() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/forms.md"), "# Forms\n").unwrap();
    fs::write(
        root.join("SKILL.md"),
        skill_with_body(
            "See [forms](docs/forms.md#fields), [site](https://example.com), \
             [top](#usage) and [gone](docs/gone.md).\n",
        ),
    )
    .unwrap();

    let report = skillcheck::validate_package(&root, &Config::default()).unwrap();
    let missing: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.rule == "references/missing")
        .collect();

    assert_eq!(missing.len(), 1);
    assert!(missing[0].message.contains("docs/gone.md"));
}

#[test]
fn test_structural_errors_stop_the_run() {
    let tmp = TempDir::new().unwrap();

    let err = skillcheck::validate_package(&tmp.path().join("absent"), &Config::default())
        .unwrap_err();
    assert!(err.to_string().starts_with("package directory not found"));

    let err = skillcheck::validate_package(tmp.path(), &Config::default()).unwrap_err();
    assert!(err.to_string().contains("SKILL.md not found"));
}
