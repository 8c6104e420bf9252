//! Creating new skill packages from templates.
//!
//! A template is either one of the built-ins or a directory on disk. Every
//! text file in it has `{{name}}`, `{{description}}` and `{{title}}`
//! placeholders substituted; unknown placeholders are left untouched.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::paths::PRIMARY_DOCUMENT;

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Names of the built-in templates
pub const BUILTIN_TEMPLATES: &[&str] = &["basic", "with-reference"];

/// Template used when none is given
pub const DEFAULT_TEMPLATE: &str = "basic";

const BASIC_SKILL: &str = r#"---
name: {{name}}
description: {{description}}
---

# {{title}}

## Instructions

Describe, step by step, how to carry out the task this skill covers.

## Examples

Show a representative input and the result it should produce.
"#;

const REFERENCE_SKILL: &str = r#"---
name: {{name}}
description: {{description}}
---

# {{title}}

## Instructions

Describe, step by step, how to carry out the task this skill covers.
Keep this file short and move detail into [reference.md](reference.md).

## Examples

Show a representative input and the result it should produce.
"#;

const REFERENCE_DOC: &str = r#"# {{title}} reference

Detailed material that is only needed for some requests goes here.
"#;

/// Where template files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Basic,
    WithReference,
    /// A directory copied recursively
    Directory(PathBuf),
}

impl Template {
    /// Resolve a template argument: a built-in name or an existing directory.
    pub fn resolve(arg: &str) -> Result<Self> {
        match arg {
            "basic" => Ok(Self::Basic),
            "with-reference" => Ok(Self::WithReference),
            other => {
                let dir = PathBuf::from(other);
                if !dir.is_dir() {
                    anyhow::bail!(
                        "Unknown template '{}'. Use one of: {}, or a template directory",
                        other,
                        BUILTIN_TEMPLATES.join(", ")
                    );
                }
                if !dir.join(PRIMARY_DOCUMENT).is_file() {
                    anyhow::bail!(
                        "Template directory {} has no {}",
                        dir.display(),
                        PRIMARY_DOCUMENT
                    );
                }
                Ok(Self::Directory(dir))
            }
        }
    }

    /// Files of this template as (relative path, raw bytes)
    fn files(&self) -> Result<Vec<(PathBuf, Vec<u8>)>> {
        match self {
            Self::Basic => Ok(vec![(
                PathBuf::from(PRIMARY_DOCUMENT),
                BASIC_SKILL.as_bytes().to_vec(),
            )]),
            Self::WithReference => Ok(vec![
                (
                    PathBuf::from(PRIMARY_DOCUMENT),
                    REFERENCE_SKILL.as_bytes().to_vec(),
                ),
                (PathBuf::from("reference.md"), REFERENCE_DOC.as_bytes().to_vec()),
            ]),
            Self::Directory(dir) => directory_files(dir),
        }
    }
}

fn directory_files(dir: &Path) -> Result<Vec<(PathBuf, Vec<u8>)>> {
    let pattern = dir.join("**").join("*");
    let pattern = pattern.to_string_lossy();
    let mut files = Vec::new();

    for entry in glob::glob(&pattern).context("Invalid template directory path")? {
        let path = entry.context("Failed to read template directory entry")?;
        if !path.is_file() {
            continue;
        }
        let relative = path
            .strip_prefix(dir)
            .with_context(|| format!("Template file {} outside template", path.display()))?
            .to_path_buf();
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read template file {}", path.display()))?;
        files.push((relative, bytes));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Replace `{{var}}` placeholders, keeping unknown ones as written.
pub fn substitute(text: &str, variables: &HashMap<&str, String>) -> String {
    RE_PLACEHOLDER
        .replace_all(text, |caps: &regex::Captures| {
            variables
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

/// `pdf-forms` → `Pdf Forms`
pub fn title_from_name(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inputs for [`scaffold`]
#[derive(Debug, Clone)]
pub struct ScaffoldRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub template: &'a Template,
    /// Directory in which `<name>/` is created
    pub destination: &'a Path,
    /// Write into an existing package directory
    pub force: bool,
}

/// Create `<destination>/<name>/` from the template and return its path.
pub fn scaffold(request: &ScaffoldRequest<'_>) -> Result<PathBuf> {
    let name = request.name.trim();
    if name.is_empty() {
        anyhow::bail!("Skill name must not be empty");
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        anyhow::bail!("Skill name '{}' must be a single directory name", name);
    }

    let target = request.destination.join(name);
    if target.exists() && !request.force {
        anyhow::bail!(
            "{} already exists (use --force to write into it)",
            target.display()
        );
    }

    // The header is line-oriented, so the description must stay on one line
    let description = request.description.split_whitespace().collect::<Vec<_>>().join(" ");
    let variables: HashMap<&str, String> = HashMap::from([
        ("name", name.to_string()),
        ("description", description),
        ("title", title_from_name(name)),
    ]);

    for (relative, bytes) in request.template.files()? {
        let path = target.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = match String::from_utf8(bytes) {
            Ok(text) => substitute(&text, &variables).into_bytes(),
            Err(raw) => raw.into_bytes(),
        };
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(file = %path.display(), "scaffolded");
    }

    Ok(target)
}
