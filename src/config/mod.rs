//! Configuration management for skillcheck.
//!
//! A config file is markdown with a YAML frontmatter, the same shape as a
//! package's primary document:
//!
//! ```markdown
//! ---
//! lint:
//!   thresholds:
//!     max_body_lines: 800
//!   disable:
//!     - description/no-trigger
//!   extra_tools:
//!     - DeployTool
//! ---
//!
//! # Team skillcheck settings
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::header::split_frontmatter;

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Environment variable naming a config file to use when `--config` is absent
pub const CONFIG_ENV: &str = "SKILLCHECK_CONFIG";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub lint: LintConfig,
}

impl Config {
    /// Resolve and load configuration.
    ///
    /// Lookup order (first match wins):
    /// 1. `explicit` path (usually `--config`), which must exist
    /// 2. `$SKILLCHECK_CONFIG`, which must exist when set
    /// 3. Global config (`~/.config/skillcheck/config.md`) if present
    /// 4. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_global(explicit, global_config_path().as_deref())
    }

    /// Same as [`Config::load`] with the global config path supplied by the caller.
    pub fn load_with_global(explicit: Option<&Path>, global: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Self::load_from(Path::new(&path))
                .with_context(|| format!("Failed to load config named by ${}", CONFIG_ENV));
        }

        match global.filter(|p| p.exists()) {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) =
            split_frontmatter(content).context("Failed to extract frontmatter from config")?;

        let config: Config = if frontmatter.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
        };

        config.lint.validate()?;

        Ok(config)
    }
}

/// Path of the per-user config file, if a config directory is known
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(crate::paths::CONFIG_FILE))
}
