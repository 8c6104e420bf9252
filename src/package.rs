//! The unit under validation: a package directory and its primary document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StructuralError;
use crate::paths::PRIMARY_DOCUMENT;

/// A skill package opened for one validation run.
///
/// The primary document is read exactly once, when the package is opened.
#[derive(Debug, Clone)]
pub struct Package {
    root: PathBuf,
    content: String,
}

impl Package {
    /// Open the package rooted at `root` and read its `SKILL.md`.
    pub fn open(root: &Path) -> Result<Self, StructuralError> {
        if !root.exists() {
            return Err(StructuralError::PackageNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(StructuralError::NotADirectory(root.to_path_buf()));
        }

        let document = root.join(PRIMARY_DOCUMENT);
        if !document.is_file() {
            return Err(StructuralError::DocumentNotFound(root.to_path_buf()));
        }

        let content = fs::read_to_string(&document).map_err(|source| {
            StructuralError::Unreadable {
                path: document.clone(),
                source,
            }
        })?;

        tracing::debug!(root = %root.display(), bytes = content.len(), "package opened");

        Ok(Self {
            root: root.to_path_buf(),
            content,
        })
    }

    /// Build a package from in-memory content, rooted at `root`.
    ///
    /// Reference checks still consult the filesystem under `root`.
    pub fn from_content(root: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            content: content.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
