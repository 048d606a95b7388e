//! Configuration for the diff engine.
//!
//! `DiffConfig` holds the size limits that guard the quadratic alignment
//! step and the knobs that pick between equally valid alignments.

use crate::error_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitBehavior {
    /// Align tokens index-by-index and mark the result incomplete.
    FallbackToPositional,
    ReturnError,
}

/// Which classification wins when two alignments have the same LCS length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Treat the current right-side token as added.
    #[default]
    PreferAdded,
    /// Treat the current left-side token as removed.
    PreferRemoved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Upper bound on `left + right` token counts.
    pub max_tokens: u32,
    /// Upper bound on `(left + 1) * (right + 1)` alignment cells.
    #[serde(alias = "max_cells")]
    pub max_matrix_cells: u64,
    pub on_limit_exceeded: LimitBehavior,
    pub tie_break: TieBreak,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_tokens: 20_000,
            max_matrix_cells: 50_000_000,
            on_limit_exceeded: LimitBehavior::ReturnError,
            tie_break: TieBreak::PreferAdded,
        }
    }
}

impl DiffConfig {
    /// Same limits as the default, but oversize inputs degrade to a
    /// positional alignment instead of failing.
    pub fn lenient() -> Self {
        Self {
            on_limit_exceeded: LimitBehavior::FallbackToPositional,
            ..Default::default()
        }
    }

    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder {
            inner: DiffConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tokens == 0 {
            return Err(ConfigError::NonPositiveLimit {
                field: "max_tokens",
                value: 0,
            });
        }
        if self.max_matrix_cells == 0 {
            return Err(ConfigError::NonPositiveLimit {
                field: "max_matrix_cells",
                value: 0,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLimit { field: &'static str, value: u64 },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::NonPositiveLimit { .. } => error_codes::CONFIG_INVALID,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiffConfigBuilder {
    inner: DiffConfig,
}

impl Default for DiffConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfigBuilder {
    pub fn new() -> Self {
        DiffConfig::builder()
    }

    pub fn max_tokens(mut self, value: u32) -> Self {
        self.inner.max_tokens = value;
        self
    }

    pub fn max_matrix_cells(mut self, value: u64) -> Self {
        self.inner.max_matrix_cells = value;
        self
    }

    pub fn on_limit_exceeded(mut self, value: LimitBehavior) -> Self {
        self.inner.on_limit_exceeded = value;
        self
    }

    pub fn tie_break(mut self, value: TieBreak) -> Self {
        self.inner.tie_break = value;
        self
    }

    pub fn build(self) -> Result<DiffConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_limits() {
        let cfg = DiffConfig::default();
        assert_eq!(cfg.max_tokens, 20_000);
        assert_eq!(cfg.max_matrix_cells, 50_000_000);
        assert_eq!(cfg.on_limit_exceeded, LimitBehavior::ReturnError);
        assert_eq!(cfg.tie_break, TieBreak::PreferAdded);
    }

    #[test]
    fn serde_roundtrip_preserves_defaults() {
        let cfg = DiffConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize default config");
        let parsed: DiffConfig = serde_json::from_str(&json).expect("deserialize default config");
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn partial_json_fills_defaults_and_accepts_alias() {
        let json = r#"{
            "max_cells": 1000,
            "on_limit_exceeded": "fallback_to_positional",
            "tie_break": "prefer_removed"
        }"#;
        let cfg: DiffConfig = serde_json::from_str(json).expect("deserialize partial config");
        assert_eq!(cfg.max_matrix_cells, 1000);
        assert_eq!(cfg.max_tokens, 20_000);
        assert_eq!(cfg.on_limit_exceeded, LimitBehavior::FallbackToPositional);
        assert_eq!(cfg.tie_break, TieBreak::PreferRemoved);
    }

    #[test]
    fn builder_rejects_zero_limits() {
        let err = DiffConfig::builder()
            .max_tokens(0)
            .build()
            .expect_err("builder should reject zero token limit");
        assert_eq!(
            err,
            ConfigError::NonPositiveLimit {
                field: "max_tokens",
                value: 0
            }
        );

        let err = DiffConfig::builder()
            .max_matrix_cells(0)
            .build()
            .expect_err("builder should reject zero cell limit");
        assert!(matches!(
            err,
            ConfigError::NonPositiveLimit {
                field: "max_matrix_cells",
                ..
            }
        ));
    }

    #[test]
    fn lenient_only_changes_limit_behavior() {
        let lenient = DiffConfig::lenient();
        let default = DiffConfig::default();
        assert_eq!(lenient.on_limit_exceeded, LimitBehavior::FallbackToPositional);
        assert_eq!(lenient.max_tokens, default.max_tokens);
        assert_eq!(lenient.max_matrix_cells, default.max_matrix_cells);
        assert_eq!(lenient.tie_break, default.tie_break);
    }
}
