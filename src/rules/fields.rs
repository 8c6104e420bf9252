//! Header field checks: `name`, `description` and `allowed-tools`.
//!
//! A missing field is reported once by the header extractor; these checks
//! only inspect fields that are present.

use regex::Regex;
use std::sync::LazyLock;

use super::{Check, RuleContext};
use crate::diagnostic::Diagnostic;

/// Substrings a name may not contain, compared case-insensitively
pub const RESERVED_WORDS: &[&str] = &["anthropic", "claude"];

/// Names too generic to tell one skill from another
pub const GENERIC_NAMES: &[&str] = &[
    "helper",
    "utils",
    "tools",
    "data",
    "files",
    "documents",
    "skill",
    "misc",
];

/// Phrase that tells the host when the skill applies
pub const TRIGGER_PHRASE: &str = "use when";

/// Tool names accepted in `allowed-tools`
pub const KNOWN_TOOLS: &[&str] = &[
    "AskUserQuestion",
    "Bash",
    "BashOutput",
    "Edit",
    "ExitPlanMode",
    "Glob",
    "Grep",
    "KillShell",
    "LS",
    "MultiEdit",
    "NotebookEdit",
    "NotebookRead",
    "Read",
    "Skill",
    "SlashCommand",
    "Task",
    "TodoWrite",
    "WebFetch",
    "WebSearch",
    "Write",
];

/// Prefix of MCP-provided tool names, always accepted
pub const MCP_TOOL_PREFIX: &str = "mcp__";

/// `I` and `us` are case-sensitive so "i.e." and "the US" stay quiet
static RE_PERSONAL_PRONOUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(I|[uU]s|(?i:me|my|mine|we|our|ours|you|your|yours))\b")
        .expect("pronoun pattern is valid")
});

/// `I` opening an abbreviation such as "I/O" or "I.e."
fn starts_abbreviation(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some('/') => true,
        Some('.') => chars.next().is_some_and(|c| c.is_alphabetic()),
        _ => false,
    }
}

fn has_angle_brackets(text: &str) -> bool {
    text.contains('<') || text.contains('>')
}

/// `name`: lowercase kebab-case identifier
pub struct NameCheck;

impl Check for NameCheck {
    fn name(&self) -> &'static str {
        "name"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        match ctx.header.name.as_deref() {
            Some(name) => check_name(name, ctx.config.lint.thresholds.max_name_length),
            None => Vec::new(),
        }
    }
}

/// Apply every identifier constraint to `name`.
pub fn check_name(name: &str, max_len: usize) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    if name.is_empty() {
        found.push(Diagnostic::error("name/empty", "Name must not be empty").at_field("name"));
        return found;
    }

    let mut invalid: Vec<char> = Vec::new();
    for c in name.chars() {
        let allowed = c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
        if !allowed && !invalid.contains(&c) {
            invalid.push(c);
        }
    }
    if !invalid.is_empty() {
        let listed: Vec<String> = invalid.iter().map(|c| format!("'{}'", c)).collect();
        found.push(
            Diagnostic::error(
                "name/invalid-chars",
                format!(
                    "Name '{}' contains invalid characters ({}); use lowercase letters, digits and hyphens only",
                    name,
                    listed.join(", ")
                ),
            )
            .at_field("name"),
        );
    }

    let len = name.chars().count();
    if len > max_len {
        found.push(
            Diagnostic::error(
                "name/too-long",
                format!("Name is {} characters long (maximum {})", len, max_len),
            )
            .at_field("name"),
        );
    }

    let lower = name.to_lowercase();
    for word in RESERVED_WORDS {
        if lower.contains(word) {
            found.push(
                Diagnostic::error(
                    "name/reserved-word",
                    format!("Name must not contain the reserved word '{}'", word),
                )
                .at_field("name"),
            );
        }
    }

    if has_angle_brackets(name) {
        found.push(
            Diagnostic::error("name/angle-brackets", "Name must not contain '<' or '>'")
                .at_field("name"),
        );
    }

    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        found.push(
            Diagnostic::warning(
                "name/hyphenation",
                format!(
                    "Name '{}' has leading, trailing or repeated hyphens",
                    name
                ),
            )
            .at_field("name"),
        );
    }

    if GENERIC_NAMES.contains(&name) {
        found.push(
            Diagnostic::warning(
                "name/generic",
                format!(
                    "Name '{}' is too generic; qualify it with a domain (e.g. 'pdf-{}')",
                    name, name
                ),
            )
            .at_field("name"),
        );
    }

    found
}

/// `description`: what the skill does and when to use it
pub struct DescriptionCheck;

impl Check for DescriptionCheck {
    fn name(&self) -> &'static str {
        "description"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        match ctx.header.description.as_deref() {
            Some(description) => check_description(
                description,
                ctx.config.lint.thresholds.max_description_length,
            ),
            None => Vec::new(),
        }
    }
}

/// Apply every summary constraint to `description`.
pub fn check_description(description: &str, max_len: usize) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    if description.trim().is_empty() {
        found.push(
            Diagnostic::error("description/empty", "Description must not be empty")
                .at_field("description"),
        );
        return found;
    }

    let len = description.chars().count();
    if len > max_len {
        found.push(
            Diagnostic::error(
                "description/too-long",
                format!("Description is {} characters long (maximum {})", len, max_len),
            )
            .at_field("description"),
        );
    }

    if has_angle_brackets(description) {
        found.push(
            Diagnostic::error(
                "description/angle-brackets",
                "Description must not contain '<' or '>'",
            )
            .at_field("description"),
        );
    }

    let mut pronouns: Vec<String> = Vec::new();
    for m in RE_PERSONAL_PRONOUN.find_iter(description) {
        if m.as_str() == "I" && starts_abbreviation(&description[m.end()..]) {
            continue;
        }
        let word = m.as_str().to_string();
        if !pronouns.iter().any(|p| p.eq_ignore_ascii_case(&word)) {
            pronouns.push(word);
        }
    }
    if !pronouns.is_empty() {
        found.push(
            Diagnostic::warning(
                "description/person",
                format!(
                    "Description uses first/second person ({}); write in third person",
                    pronouns.join(", ")
                ),
            )
            .at_field("description"),
        );
    }

    if !description.to_lowercase().contains(TRIGGER_PHRASE) {
        found.push(
            Diagnostic::warning(
                "description/no-trigger",
                "Description should say when to use the skill (e.g. 'Use when ...')",
            )
            .at_field("description"),
        );
    }

    found
}

/// `allowed-tools`: every token should name a known tool
pub struct AllowedToolsCheck;

impl Check for AllowedToolsCheck {
    fn name(&self) -> &'static str {
        "allowed-tools"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        match ctx.header.allowed_tools.as_deref() {
            Some(tools) => check_allowed_tools(tools, &ctx.config.lint.extra_tools),
            None => Vec::new(),
        }
    }
}

/// Warn about each token whose tool name is not recognized.
pub fn check_allowed_tools(tools: &[String], extra: &[String]) -> Vec<Diagnostic> {
    if tools.is_empty() {
        return vec![Diagnostic::warning(
            "tools/empty",
            "allowed-tools is present but lists no tools",
        )
        .at_field("allowed-tools")];
    }

    tools
        .iter()
        .filter(|token| !is_known_tool(token, extra))
        .map(|token| {
            Diagnostic::warning(
                "tools/unknown",
                format!("Unrecognized tool '{}' in allowed-tools", token),
            )
            .at_field("allowed-tools")
        })
        .collect()
}

/// A token like `Bash(git status:*)` is judged by its base name `Bash`.
fn is_known_tool(token: &str, extra: &[String]) -> bool {
    let base = token.split('(').next().unwrap_or(token).trim();
    KNOWN_TOOLS.contains(&base)
        || base.starts_with(MCP_TOOL_PREFIX)
        || extra.iter().any(|t| t == base)
}
