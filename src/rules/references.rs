//! Intra-package references: every relative markdown link must resolve to
//! an existing file under the package root.
//!
//! Referenced files are not opened, so their own links are never followed.

use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

use super::{Check, RuleContext};
use crate::diagnostic::Diagnostic;

/// Link targets with these prefixes are external and never resolved
pub const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "ftp://", "tel:", "data:"];

/// `[text](target)` or `[text](target "title")`, image links included.
/// A bare target may hold one level of balanced parentheses: `file(1).md`.
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[[^\]]*\]\(\s*(<[^>]*>|(?:[^()\s]|\([^()\s]*\))+)(?:\s+"[^"]*")?\s*\)"#)
        .expect("link pattern is valid")
});

/// A link target found in the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Target as written, minus angle brackets
    pub target: String,
    /// 0-based body line of the first occurrence
    pub line: usize,
}

/// Extract link targets in order of first appearance, without duplicates.
pub fn extract_references(body: &str) -> Vec<Reference> {
    let mut refs: Vec<Reference> = Vec::new();

    for caps in RE_LINK.captures_iter(body) {
        let Some(m) = caps.get(1) else { continue };
        let target = m
            .as_str()
            .trim_start_matches('<')
            .trim_end_matches('>')
            .trim()
            .to_string();
        if target.is_empty() || refs.iter().any(|r| r.target == target) {
            continue;
        }
        let line = body[..m.start()].matches('\n').count();
        refs.push(Reference { target, line });
    }

    refs
}

/// True for URLs and in-document anchors
pub fn is_external(target: &str) -> bool {
    let lower = target.to_ascii_lowercase();
    target.starts_with('#') || EXTERNAL_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Reduce a link target to the file path it names: drop the fragment and
/// query, decode `%20`.
fn file_part(target: &str) -> String {
    let end = target.find(['#', '?']).unwrap_or(target.len());
    target[..end].replace("%20", " ")
}

/// True when `path` is absolute or its `..` components climb above the root
fn escapes_root(path: &Path) -> bool {
    let mut depth: i32 = 0;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return true,
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
        }
    }
    false
}

/// Resolve relative link targets against the package root
pub struct ReferenceCheck;

impl Check for ReferenceCheck {
    fn name(&self) -> &'static str {
        "references"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let root = ctx.package.root();
        let mut found = Vec::new();

        for reference in extract_references(ctx.body) {
            if is_external(&reference.target) {
                continue;
            }
            let file = file_part(&reference.target);
            if file.is_empty() {
                continue;
            }
            let relative = Path::new(&file);
            let line = ctx.document_line(reference.line);

            if escapes_root(relative) {
                found.push(
                    Diagnostic::warning(
                        "references/outside-package",
                        format!(
                            "Reference '{}' points outside the package; bundle the file instead",
                            reference.target
                        ),
                    )
                    .at_line(line),
                );
            }

            if !root.join(relative).exists() {
                found.push(
                    Diagnostic::error(
                        "references/missing",
                        format!("Referenced file not found: {}", file),
                    )
                    .at_line(line),
                );
            }
        }

        found
    }
}
