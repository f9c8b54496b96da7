//! Packing run configuration.

use crate::algorithm::AlgorithmId;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a packing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Algorithms to run against every container, in order.
    pub algorithms: Vec<AlgorithmId>,

    /// Run once per distinct container shape instead of once per container.
    pub deduplicate_containers: bool,

    /// Convert results back to unpadded dimensions and coordinates.
    pub unpad_results: bool,

    /// Skip unregistered algorithm IDs with a warning instead of failing.
    pub skip_unknown_algorithms: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithms: vec![AlgorithmId::EB_AFIT],
            deduplicate_containers: true,
            unpad_results: true,
            skip_unknown_algorithms: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the algorithm list.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = AlgorithmId>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Sets whether containers are deduplicated by shape.
    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.deduplicate_containers = enabled;
        self
    }

    /// Sets whether results are unpadded.
    pub fn with_unpad_results(mut self, enabled: bool) -> Self {
        self.unpad_results = enabled;
        self
    }

    /// Sets whether unknown algorithm IDs are skipped.
    pub fn with_skip_unknown_algorithms(mut self, enabled: bool) -> Self {
        self.skip_unknown_algorithms = enabled;
        self
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            return Err(Error::ConfigError(
                "At least one algorithm must be selected".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.algorithms, vec![AlgorithmId::EB_AFIT]);
        assert!(config.deduplicate_containers);
        assert!(config.unpad_results);
        assert!(!config.skip_unknown_algorithms);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_algorithms_rejected() {
        let config = Config::new().with_algorithms(Vec::new());
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }
}
