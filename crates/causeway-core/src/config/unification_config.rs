//! Unification configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_EOR_UNIVERSE, PROJECT_CONFIG_FILENAME};
use crate::errors::ConfigError;
use crate::models::DependencyDirection;

/// Configuration for one unification engine.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CAUSEWAY_*`)
/// 2. Project config (`causeway.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnificationConfig {
    /// Minimum coefficient magnitude for a variant edge to count during unification.
    pub strength_threshold: f64,
    /// Cutoff used when a single variant graph is built on its own.
    pub variant_strength_threshold: f64,
    /// Optional pre-filter: coefficients below this are zeroed before thresholding.
    pub p_value_threshold: Option<f64>,
    /// Largest successor universe tested for the exhaustive-OR case. 0 disables the test.
    pub eor_universe_limit: usize,
    /// Gather successors (split gates) or predecessors (join gates).
    pub direction: DependencyDirection,
    /// Unify independent variant groups on the rayon pool.
    pub parallel_groups: bool,
}

impl Default for UnificationConfig {
    fn default() -> Self {
        Self {
            strength_threshold: defaults::DEFAULT_STRENGTH_THRESHOLD,
            variant_strength_threshold: defaults::DEFAULT_VARIANT_STRENGTH_THRESHOLD,
            p_value_threshold: defaults::DEFAULT_P_VALUE_THRESHOLD,
            eor_universe_limit: defaults::DEFAULT_EOR_UNIVERSE_LIMIT,
            direction: DependencyDirection::default(),
            parallel_groups: defaults::DEFAULT_PARALLEL_GROUPS,
        }
    }
}

impl UnificationConfig {
    /// Load configuration for a project root.
    ///
    /// A missing `causeway.toml` falls back to defaults; a malformed one is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("strength_threshold", self.strength_threshold)?;
        check_threshold("variant_strength_threshold", self.variant_strength_threshold)?;
        if let Some(p) = self.p_value_threshold {
            if !p.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "p_value_threshold".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        if self.eor_universe_limit > MAX_EOR_UNIVERSE {
            return Err(ConfigError::ValidationFailed {
                field: "eor_universe_limit".to_string(),
                message: format!("must be at most {MAX_EOR_UNIVERSE}"),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `CAUSEWAY_STRENGTH_THRESHOLD`, `CAUSEWAY_DIRECTION`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut UnificationConfig) {
        if let Some(v) = env_parse::<f64>("CAUSEWAY_STRENGTH_THRESHOLD") {
            config.strength_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("CAUSEWAY_VARIANT_STRENGTH_THRESHOLD") {
            config.variant_strength_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("CAUSEWAY_P_VALUE_THRESHOLD") {
            config.p_value_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("CAUSEWAY_EOR_UNIVERSE_LIMIT") {
            config.eor_universe_limit = v;
        }
        if let Ok(val) = std::env::var("CAUSEWAY_DIRECTION") {
            if let Some(direction) = DependencyDirection::from_str_name(&val) {
                config.direction = direction;
            }
        }
        if let Some(v) = env_parse::<bool>("CAUSEWAY_PARALLEL_GROUPS") {
            config.parallel_groups = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn check_threshold(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}
