//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::{LintConfig, LintThresholds, DESCRIPTION_LENGTH_LIMIT, NAME_LENGTH_LIMIT};

impl LintThresholds {
    /// Reject thresholds that would flag every package or that would let
    /// through fields a host rejects
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("max_name_length", self.max_name_length),
            ("max_description_length", self.max_description_length),
            ("max_body_lines", self.max_body_lines),
        ] {
            if value == 0 {
                anyhow::bail!("lint.thresholds.{} must be greater than 0", key);
            }
        }

        for (key, value, limit) in [
            ("max_name_length", self.max_name_length, NAME_LENGTH_LIMIT),
            (
                "max_description_length",
                self.max_description_length,
                DESCRIPTION_LENGTH_LIMIT,
            ),
        ] {
            if value > limit {
                anyhow::bail!(
                    "lint.thresholds.{} is {}; it may not exceed {}",
                    key,
                    value,
                    limit
                );
            }
        }
        Ok(())
    }
}

impl LintConfig {
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;

        if let Some(empty) = self.disable.iter().find(|rule| rule.trim().is_empty()) {
            anyhow::bail!("lint.disable contains an empty rule name: '{}'", empty);
        }

        Ok(())
    }
}
