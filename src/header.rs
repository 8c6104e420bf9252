//! Header extraction for the primary document.
//!
//! The header is the block between the first two lines consisting solely of
//! `---`. It is line-scanned rather than parsed as YAML: one `key: value` per
//! line, no nesting. The only list-valued key, `allowed-tools`, also accepts
//! a flow list (`[a, b]`) or a block of `- item` lines.

use crate::diagnostic::Diagnostic;
use crate::error::StructuralError;

/// Line marking the start and end of the header
pub const DELIMITER: &str = "---";

/// Keys the header may carry. Anything else draws a warning.
pub const KNOWN_KEYS: &[&str] = &[
    "name",
    "description",
    "allowed-tools",
    "license",
    "metadata",
    "version",
];

/// Parsed header fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `None` when the key is absent, `Some(vec![])` when present but empty
    pub allowed_tools: Option<Vec<String>>,
    /// Header text between the delimiters, verbatim
    pub raw: String,
    /// 1-based document line of the first body line
    pub body_start_line: usize,
}

/// Output of [`extract_header`]
#[derive(Debug, Clone)]
pub struct Extraction {
    pub record: HeaderRecord,
    pub body: String,
    /// Findings raised while scanning the header (missing keys and the like)
    pub diagnostics: Vec<Diagnostic>,
}

/// Locate the two delimiter lines, returning their 0-based indices.
fn delimiter_lines(lines: &[&str]) -> Option<(usize, usize)> {
    let mut markers = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == DELIMITER)
        .map(|(idx, _)| idx);
    let open = markers.next()?;
    let close = markers.next()?;
    Some((open, close))
}

/// Split content into header text and body.
///
/// Returns `None` when the content has fewer than two delimiter lines.
pub fn split_frontmatter(content: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = content.lines().collect();
    let (open, close) = delimiter_lines(&lines)?;
    Some((
        lines[open + 1..close].join("\n"),
        lines[close + 1..].join("\n"),
    ))
}

/// Extract the header record and body from the primary document text.
///
/// Fails only when the delimiters are missing. Missing mandatory keys are
/// reported as errors in [`Extraction::diagnostics`].
pub fn extract_header(content: &str) -> Result<Extraction, StructuralError> {
    let lines: Vec<&str> = content.lines().collect();
    let (open, close) = delimiter_lines(&lines).ok_or(StructuralError::MissingHeader)?;

    let header_lines = &lines[open + 1..close];
    let mut record = HeaderRecord {
        raw: header_lines.join("\n"),
        body_start_line: close + 2,
        ..HeaderRecord::default()
    };
    let mut diagnostics = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    let mut collecting_tools = false;

    for (offset, line) in header_lines.iter().enumerate() {
        let line_no = open + 2 + offset;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Sequence items and indented continuation lines
        if line.starts_with(char::is_whitespace) || trimmed.starts_with('-') {
            if collecting_tools {
                if let Some(item) = trimmed.strip_prefix('-') {
                    if let Some(tools) = record.allowed_tools.as_mut() {
                        tools.extend(split_tool_list(item));
                    }
                }
            }
            continue;
        }
        collecting_tools = false;

        let Some((key, value)) = trimmed.split_once(':') else {
            diagnostics.push(
                Diagnostic::warning(
                    "header/malformed-line",
                    format!("Header line is not a 'key: value' pair: '{}'", trimmed),
                )
                .at_line(line_no),
            );
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if seen.iter().any(|k| k == key) {
            diagnostics.push(
                Diagnostic::warning(
                    "header/duplicate-key",
                    format!("Key '{}' appears more than once; the first value is used", key),
                )
                .at_line(line_no),
            );
            continue;
        }
        seen.push(key.to_string());

        match key {
            "name" => record.name = Some(unquote(value).to_string()),
            "description" => record.description = Some(unquote(value).to_string()),
            "allowed-tools" => {
                record.allowed_tools = Some(split_tool_list(value));
                collecting_tools = value.is_empty();
            }
            k if KNOWN_KEYS.contains(&k) => {}
            _ => diagnostics.push(
                Diagnostic::warning(
                    "header/unknown-key",
                    format!(
                        "Unrecognized header key '{}' (expected one of: {})",
                        key,
                        KNOWN_KEYS.join(", ")
                    ),
                )
                .at_line(line_no),
            ),
        }
    }

    if record.name.is_none() {
        diagnostics.push(
            Diagnostic::error("header/missing-name", "Missing required field 'name' in header")
                .at_field("name"),
        );
    }
    if record.description.is_none() {
        diagnostics.push(
            Diagnostic::error(
                "header/missing-description",
                "Missing required field 'description' in header",
            )
            .at_field("description"),
        );
    }

    tracing::debug!(
        name = record.name.as_deref().unwrap_or(""),
        findings = diagnostics.len(),
        "header extracted"
    );

    Ok(Extraction {
        record,
        body: lines[close + 1..].join("\n"),
        diagnostics,
    })
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Split a tool list on commas and whitespace outside parentheses.
///
/// `[Read, Bash(git add:*)]` → `["Read", "Bash(git add:*)"]`
pub fn split_tool_list(value: &str) -> Vec<String> {
    let value = value.trim();
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for c in inner.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if depth == 0 && (c == ',' || c.is_whitespace()) => {
                push_token(&mut tokens, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_token(&mut tokens, &current);

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let token = unquote(raw.trim());
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
}
