//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use debrief_pipeline::PipelineConfig;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Model used when neither a flag, the environment, nor the file names one
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Default OpenAI-compatible endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

const DEFAULT_CHUNK_SIZE: usize = 1000;
const DEFAULT_CHUNK_OVERLAP: usize = 100;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Resolved runtime configuration.
///
/// Values are layered: command-line flags (which also absorb their
/// `DEBRIEF_*` variables) override the config file, which overrides the
/// built-in defaults. The API key comes from `DEBRIEF_API_KEY` only and
/// is required.
#[derive(Clone)]
pub struct Config {
    /// Bearer token for the LLM endpoint
    pub api_key: String,

    /// Model name sent with every request
    pub model: String,

    /// OpenAI-compatible base URL
    pub endpoint: String,

    /// Maximum characters per analysis window
    pub chunk_size: usize,

    /// Characters of context carried over between windows
    pub chunk_overlap: usize,

    /// Seconds to wait for each LLM call
    pub timeout_secs: u64,
}

/// Optional overrides read from the TOML config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Model name
    pub model: Option<String>,

    /// OpenAI-compatible base URL
    pub endpoint: Option<String>,

    /// Maximum characters per analysis window
    pub chunk_size: Option<usize>,

    /// Characters of context carried over between windows
    pub chunk_overlap: Option<usize>,

    /// Seconds to wait for each LLM call
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Read overrides from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Could not read {}: {}", path.display(), e)))?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Config {
    /// Default configuration file location (`~/.debrief/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".debrief").join("config.toml"))
    }

    /// Resolve configuration from the parsed CLI and the process environment.
    ///
    /// An explicitly passed `--config` file must exist; the default file
    /// is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    FileConfig::load(&path)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let api_key = require_api_key(env::var("DEBRIEF_API_KEY").ok())?;

        Ok(Self::resolve(cli, file, api_key))
    }

    /// Layer the sources: CLI flags over file values over defaults.
    pub fn resolve(cli: &Cli, file: FileConfig, api_key: String) -> Self {
        Self {
            api_key,
            model: cli
                .model
                .clone()
                .or(file.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: cli
                .endpoint
                .clone()
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            chunk_size: cli.chunk_size.or(file.chunk_size).unwrap_or(DEFAULT_CHUNK_SIZE),
            chunk_overlap: cli
                .overlap
                .or(file.chunk_overlap)
                .unwrap_or(DEFAULT_CHUNK_OVERLAP),
            timeout_secs: cli
                .timeout_secs
                .or(file.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Pipeline settings derived from this configuration, validated.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let config = PipelineConfig {
            max_chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            request_timeout_secs: self.timeout_secs,
        };
        config.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

/// The key comes from the environment only and must be non-blank.
fn require_api_key(value: Option<String>) -> Result<String> {
    value
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| CliError::Config("DEBRIEF_API_KEY is not set (see .env support)".into()))
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
