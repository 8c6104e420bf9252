//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

/// Longest `name` a host accepts; config may only tighten it
pub const NAME_LENGTH_LIMIT: usize = 64;

/// Longest `description` a host accepts; config may only tighten it
pub const DESCRIPTION_LENGTH_LIMIT: usize = 1024;

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_max_name_length, usize, NAME_LENGTH_LIMIT);
default_fn!(default_max_description_length, usize, DESCRIPTION_LENGTH_LIMIT);
default_fn!(default_max_body_lines, usize, 500);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Size limits applied by the field and body checks
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LintThresholds {
    /// Max characters in `name` (default and upper bound: 64)
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    /// Max characters in `description` (default and upper bound: 1024)
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,
    /// Body lines above which a split is recommended (default: 500)
    #[serde(default = "default_max_body_lines")]
    pub max_body_lines: usize,
}

impl Default for LintThresholds {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            max_description_length: default_max_description_length(),
            max_body_lines: default_max_body_lines(),
        }
    }
}

/// Linter configuration for package validation
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct LintConfig {
    #[serde(default)]
    pub thresholds: LintThresholds,
    /// Rule codes (`name/generic`) or families (`description`) whose
    /// warnings are suppressed; errors are always reported
    #[serde(default)]
    pub disable: Vec<String>,
    /// Tool names accepted in `allowed-tools` on top of the built-in list
    #[serde(default)]
    pub extra_tools: Vec<String>,
}
