//! Body checks: size, path separators and time-anchored wording.

use regex::Regex;
use std::sync::LazyLock;

use super::{Check, RuleContext};
use crate::diagnostic::Diagnostic;

const MONTHS: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";

/// Phrases that tie instructions to a calendar date and go stale.
/// Matches "before 2025", "after March 2024", "as of 2026" and "until 2027".
static TIME_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ["before", "after", r"as\s+of", "until"]
        .into_iter()
        .map(|lead| {
            let pattern = format!(r"(?i)\b{}\s+(?:(?:{})\s+)?\d{{4}}\b", lead, MONTHS);
            let regex = Regex::new(&pattern).expect("time pattern is valid");
            (lead, regex)
        })
        .collect()
});

/// Warn when the body is long enough that it should be split
pub struct BodySizeCheck;

impl Check for BodySizeCheck {
    fn name(&self) -> &'static str {
        "body size"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let max = ctx.config.lint.thresholds.max_body_lines;
        let lines = ctx.body.lines().count();
        if lines <= max {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            "body/too-long",
            format!(
                "Body is {} lines (recommended maximum {}); move detail into referenced files",
                lines, max
            ),
        )]
    }
}

/// Reject Windows-style `\` path separators
pub struct PathSeparatorCheck;

impl Check for PathSeparatorCheck {
    fn name(&self) -> &'static str {
        "path separators"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        match find_backslash_path(ctx.body) {
            Some((line, snippet)) => vec![Diagnostic::error(
                "body/backslash-path",
                format!(
                    "Backslash path separator in '{}'; use forward slashes",
                    snippet
                ),
            )
            .at_line(ctx.document_line(line))],
            None => Vec::new(),
        }
    }
}

/// Find the first backslash that looks like a path separator.
///
/// A backslash is ignored when it directly follows a backtick, ends the line
/// or is followed by whitespace. `\n`, `\t` and `\r` count as escapes only
/// inside a quoted or code span, or when no word character follows the
/// letter, so `scripts\run.py` is still caught.
/// Returns the 0-based line index and the whitespace-delimited word holding it.
pub fn find_backslash_path(body: &str) -> Option<(usize, String)> {
    for (idx, line) in body.lines().enumerate() {
        let chars: Vec<char> = line.chars().collect();

        for (pos, &c) in chars.iter().enumerate() {
            if c != '\\' {
                continue;
            }
            if pos > 0 && chars[pos - 1] == '`' {
                continue;
            }
            match chars.get(pos + 1) {
                None => continue,
                Some(next) if next.is_whitespace() => continue,
                Some('n' | 't' | 'r') if is_escape(&chars, pos) => continue,
                Some(_) => return Some((idx, word_around(&chars, pos))),
            }
        }
    }
    None
}

/// `chars[pos]` is a backslash followed by `n`, `t` or `r`
fn is_escape(chars: &[char], pos: usize) -> bool {
    let quoted = ['"', '`']
        .iter()
        .any(|q| chars[..pos].iter().filter(|c| *c == q).count() % 2 == 1);
    let word_follows = chars
        .get(pos + 2)
        .is_some_and(|c| c.is_alphanumeric() || *c == '_');
    quoted || !word_follows
}

fn word_around(chars: &[char], pos: usize) -> String {
    let start = chars[..pos]
        .iter()
        .rposition(|c| c.is_whitespace())
        .map_or(0, |p| p + 1);
    let end = chars[pos..]
        .iter()
        .position(|c| c.is_whitespace())
        .map_or(chars.len(), |p| pos + p);
    chars[start..end].iter().collect()
}

/// Warn about wording anchored to a specific year
pub struct TimeSensitiveCheck;

impl Check for TimeSensitiveCheck {
    fn name(&self) -> &'static str {
        "time-sensitive wording"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut found = Vec::new();

        for (_, regex) in TIME_PATTERNS.iter() {
            if let Some(m) = regex.find(ctx.body) {
                let line = ctx.body[..m.start()].matches('\n').count();
                found.push(
                    Diagnostic::warning(
                        "body/time-sensitive",
                        format!(
                            "Time-sensitive wording '{}' will go stale; describe the current behavior instead",
                            m.as_str()
                        ),
                    )
                    .at_line(ctx.document_line(line)),
                );
            }
        }

        found
    }
}
