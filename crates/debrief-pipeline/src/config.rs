//! Configuration for the analysis pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum window size (characters)
    pub max_chunk_size: usize,

    /// Characters of overlap between consecutive windows
    pub chunk_overlap: usize,

    /// Maximum time for a single analysis call (seconds)
    pub request_timeout_secs: u64,
}

impl PipelineConfig {
    /// Get the per-call timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be greater than 0".to_string());
        }
        if self.chunk_overlap >= self.max_chunk_size {
            return Err(format!(
                "chunk_overlap {} must be smaller than max_chunk_size {}",
                self.chunk_overlap, self.max_chunk_size
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    /// Default configuration sized for typical internal documents
    fn default() -> Self {
        Self {
            max_chunk_size: 1000,
            chunk_overlap: 100,
            request_timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 100);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut config = PipelineConfig::default();
        config.max_chunk_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_chunk_size() {
        let mut config = PipelineConfig::default();
        config.chunk_overlap = config.max_chunk_size;
        assert!(config.validate().is_err());

        config.chunk_overlap = config.max_chunk_size - 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = PipelineConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_chunk_size, parsed.max_chunk_size);
        assert_eq!(config.chunk_overlap, parsed.chunk_overlap);
        assert_eq!(config.request_timeout_secs, parsed.request_timeout_secs);
    }
}
