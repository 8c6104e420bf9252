//! Create a new skill package
//!
//! Collects the name and description (prompting on a terminal when they are
//! missing), renders the template and runs a validation pass over the result.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use skillcheck::config::Config;
use skillcheck::scaffold::{self, ScaffoldRequest, Template};

/// Use the given value, prompt for it on a terminal, or fail.
fn value_or_prompt(value: Option<String>, prompt: &str, what: &str) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }

    if atty::is(atty::Stream::Stdin) {
        let answer: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()?;
        return Ok(answer);
    }

    anyhow::bail!("{} is required when stdin is not a terminal", what)
}

pub fn cmd_init(
    name: Option<String>,
    description: Option<String>,
    template: &str,
    destination: &Path,
    force: bool,
) -> Result<()> {
    // Resolve the template first so a typo fails before any prompt
    let template = Template::resolve(template)?;

    let name = value_or_prompt(name, "Skill name (lowercase letters, digits, hyphens)", "NAME")?;
    let description = value_or_prompt(
        description,
        "Description (what it does, then 'Use when ...')",
        "--description",
    )?;

    let target = scaffold::scaffold(&ScaffoldRequest {
        name: &name,
        description: &description,
        template: &template,
        destination,
        force,
    })?;

    println!("{} Created {}", "✓".green(), target.display());

    let config = Config::load(None)?;
    let report = skillcheck::validate_package(&target, &config)?;
    if report.clean() {
        println!("{} Package passes all checks", "✓".green());
    } else {
        let icon = if report.passed() { "⚠".yellow() } else { "✗".red() };
        println!(
            "{} New package has {} error(s) and {} warning(s); run 'skillcheck {}' for details",
            icon,
            report.error_count(),
            report.warning_count(),
            target.display()
        );
    }

    println!("\n{}", "Next steps:".bold());
    println!(
        "  {} Edit {}",
        "→".cyan(),
        target.join(skillcheck::paths::PRIMARY_DOCUMENT).display()
    );
    println!("  {} Validate with: skillcheck {}", "→".cyan(), target.display());

    Ok(())
}
