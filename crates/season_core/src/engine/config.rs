use serde::{Deserialize, Serialize};
use std::{env, fs};

use crate::error::{Result, SimulationError};
use crate::models::ZoneRules;

/// Environment variable naming a JSON file with a [`SimulationConfig`].
pub const CONFIG_PATH_ENV: &str = "SEASON_SIM_CONFIG_PATH";

/// Games per team in a completed season.
pub const DEFAULT_SEASON_LENGTH: u32 = 38;

/// Run parameters shared by every trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub season_length: u32,
    /// Fixed seed for reproducible runs. `None` draws a fresh one per run.
    pub seed: Option<u64>,
    pub zones: ZoneRules,
    /// Run trials on the rayon pool. Results do not depend on this flag.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            season_length: DEFAULT_SEASON_LENGTH,
            seed: None,
            zones: ZoneRules::default(),
            parallel: false,
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_season_length(mut self, season_length: u32) -> Self {
        self.season_length = season_length;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SimulationError::InvalidConfig(format!("failed to parse config: {e}")))
    }

    pub fn validate(&self) -> Result<()> {
        if self.season_length == 0 {
            return Err(SimulationError::InvalidConfig(
                "season_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load the config named by [`CONFIG_PATH_ENV`], if the variable is set.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(None);
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SimulationError::InvalidConfig(format!(
                "failed to read config from {CONFIG_PATH_ENV}='{path}': {e}"
            ))
        })?;

        let config = Self::from_json(&content)?;
        config.validate()?;
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.season_length, 38);
        assert_eq!(config.seed, None);
        assert_eq!(config.zones.europe_places, 6);
        assert_eq!(config.zones.relegation_places, 3);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SimulationConfig::from_json(r#"{"seed": 42, "zones": {"relegation_places": 2}}"#)
            .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.season_length, 38);
        assert_eq!(config.zones.relegation_places, 2);
        assert_eq!(config.zones.europe_places, 6);
    }

    #[test]
    fn test_zero_season_length_is_invalid() {
        let config = SimulationConfig::default().with_season_length(0);
        assert!(matches!(config.validate(), Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SimulationConfig::from_json("{seed: }"),
            Err(SimulationError::InvalidConfig(_))
        ));
    }
}
