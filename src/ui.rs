//! Centralized UI formatting and color utilities
//!
//! Icons and colors used by the report renderer and the command layer.
//! Every helper takes a `color` flag so rendering into a non-terminal writer
//! produces plain, byte-stable text.

use colored::Colorize;

use crate::diagnostic::Severity;

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("SKILLCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Check whether stdout is a terminal (colors on)
pub fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Icon for a severity:
/// - Error: ✗ (red)
/// - Warning: ⚠ (yellow)
pub fn severity_icon(severity: Severity, color: bool) -> String {
    match (severity, color) {
        (Severity::Error, true) => "✗".red().to_string(),
        (Severity::Warning, true) => "⚠".yellow().to_string(),
        (Severity::Error, false) => "✗".to_string(),
        (Severity::Warning, false) => "⚠".to_string(),
    }
}

/// Green check mark
pub fn success_icon(color: bool) -> String {
    if color {
        "✓".green().to_string()
    } else {
        "✓".to_string()
    }
}

/// Color scheme for report text
pub mod colors {
    use colored::Colorize;

    /// Green for success
    pub fn success(text: &str, color: bool) -> String {
        if color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Red for errors
    pub fn error(text: &str, color: bool) -> String {
        if color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Yellow for warnings
    pub fn warning(text: &str, color: bool) -> String {
        if color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dimmed for rule codes and other secondary text
    pub fn secondary(text: &str, color: bool) -> String {
        if color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "━".repeat(width)
    }

    /// Singular or plural noun for a count: `1 error`, `2 errors`
    pub fn count_noun(count: usize, noun: &str) -> String {
        if count == 1 {
            format!("{} {}", count, noun)
        } else {
            format!("{} {}s", count, noun)
        }
    }
}

/// Cyan banner line, colored only on a terminal
pub fn banner(color: bool) -> String {
    let line = format::separator(60);
    if color {
        line.cyan().to_string()
    } else {
        line
    }
}
