//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file has an extension the loader does not handle
    #[error("Unsupported file format: '{0}'. Use .txt, .md, or .pdf")]
    UnsupportedFormat(String),

    /// PDF text extraction failed
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pipeline error
    #[error("Analysis failed: {0}")]
    Pipeline(#[from] debrief_pipeline::PipelineError),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
