//! Simulation configuration with documented defaults
//!
//! Values can be loaded from a TOML file. Every section is optional and
//! falls back to the defaults below, which reproduce the classic
//! "42 against 42, stop at 10" mass attack demo.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RiskError};

/// Top level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Master seed for every random source derived by the simulator.
    ///
    /// `None` draws a fresh seed from entropy for each invocation.
    pub seed: Option<u64>,

    pub mass_attack: MassAttackConfig,

    pub monte_carlo: MonteCarloConfig,
}

/// Parameters for repeated mass attacks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MassAttackConfig {
    /// Troops on the attacking territory, including the garrison
    pub attacker: u32,

    /// Troops on the defending territory
    pub defender: u32,

    /// Attacker stops once its troop count falls to this value
    ///
    /// The loop always keeps a floor of 2 regardless of this setting.
    pub stop_threshold: u32,

    /// Number of independent mass attacks to simulate
    pub runs: u32,
}

impl Default for MassAttackConfig {
    fn default() -> Self {
        Self {
            attacker: 42,
            defender: 42,
            stop_threshold: 10,
            runs: 100,
        }
    }
}

/// Parameters for the Monte-Carlo baseline estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Allocations sampled per (players, territories) cell
    ///
    /// At 100_000 samples the estimate agrees with the recorded
    /// baselines to about three decimal places.
    pub samples: u32,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self { samples: 100_000 }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.mass_attack.stop_threshold == 0 {
            return Err(RiskError::invalid(
                "mass_attack.stop_threshold must be at least 1",
            ));
        }

        if self.mass_attack.runs == 0 {
            return Err(RiskError::invalid("mass_attack.runs must be at least 1"));
        }

        if self.monte_carlo.samples == 0 {
            return Err(RiskError::invalid("monte_carlo.samples must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mass_attack.attacker, 42);
        assert_eq!(config.mass_attack.stop_threshold, 10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            seed = 7

            [mass_attack]
            attacker = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.mass_attack.attacker, 10);
        assert_eq!(config.mass_attack.defender, 42);
        assert_eq!(config.monte_carlo.samples, 100_000);
    }

    #[test]
    fn test_zero_stop_threshold_rejected() {
        let result = SimulationConfig::from_toml_str("[mass_attack]\nstop_threshold = 0\n");
        assert!(matches!(result, Err(RiskError::InvalidArgument(_))));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = SimulationConfig::from_toml_str("seed = \"not a number\"");
        assert!(matches!(result, Err(RiskError::ConfigError(_))));
    }
}
