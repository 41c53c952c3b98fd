//! Configuration options for the equity simulator.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Trial count used when the caller does not choose one.
pub const DEFAULT_TRIALS: u64 = 25_000;

/// Configuration for the equity simulator.
///
/// # Example
/// ```
/// use poker_equity::equity::SimulationConfig;
///
/// let config = SimulationConfig::default().with_workers(4).with_seed(7);
/// assert_eq!(config.worker_count(), 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of parallel workers the trials are split across.
    ///
    /// Set to `None` to use one worker per rayon thread.
    #[serde(default)]
    pub workers: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// If set, worker `i` seeds its generator with `seed + i`, so a fixed
    /// worker count gives identical results. If `None`, each worker seeds
    /// from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a new SimulationConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set number of workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of workers a simulation will be split across.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(rayon::current_num_threads)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.workers, None);
        assert_eq!(config.seed, None);
        assert!(config.worker_count() >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new().with_workers(3).with_seed(42);
        assert_eq!(config.worker_count(), 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = SimulationConfig::new().with_workers(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWorkers)));
    }

    #[test]
    fn test_from_json_file() {
        let dir = std::env::temp_dir();

        let path = dir.join(format!("poker_equity_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "workers": 2 }"#).unwrap();
        let config = SimulationConfig::from_json_file(&path).unwrap();
        assert_eq!(config, SimulationConfig::new().with_workers(2));

        std::fs::write(&path, r#"{ "workers": 0 }"#).unwrap();
        assert!(matches!(
            SimulationConfig::from_json_file(&path),
            Err(ConfigError::ZeroWorkers)
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            SimulationConfig::from_json_file(&path),
            Err(ConfigError::Json(_))
        ));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            SimulationConfig::from_json_file(dir.join("poker_equity_missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
