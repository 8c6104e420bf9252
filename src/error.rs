//! Fatal errors that stop a validation run before any rule executes.

use std::path::PathBuf;

use thiserror::Error;

/// A package that cannot be inspected at all.
///
/// Everything else a rule finds is a [`crate::diagnostic::Diagnostic`] and
/// never aborts the run.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("package directory not found: {}", .0.display())]
    PackageNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} not found in {}", crate::paths::PRIMARY_DOCUMENT, .0.display())]
    DocumentNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing header: expected a block delimited by two '---' lines")]
    MissingHeader,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_message() {
        assert!(StructuralError::MissingHeader
            .to_string()
            .starts_with("missing header"));
    }

    #[test]
    fn test_document_not_found_names_file() {
        let err = StructuralError::DocumentNotFound(PathBuf::from("skills/pdf"));
        assert_eq!(err.to_string(), "SKILL.md not found in skills/pdf");
    }
}
