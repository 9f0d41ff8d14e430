//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Debrief - turn a long operational document into an executive action report.
#[derive(Debug, Parser)]
#[command(name = "debrief")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Document to analyze (.txt, .md, or .pdf)
    pub filepath: PathBuf,

    /// Model to use for analysis
    #[arg(short, long, env = "DEBRIEF_MODEL")]
    pub model: Option<String>,

    /// API base URL for an OpenAI-compatible endpoint
    #[arg(long, env = "DEBRIEF_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Maximum characters per analysis window
    #[arg(long, env = "DEBRIEF_CHUNK_SIZE")]
    pub chunk_size: Option<usize>,

    /// Characters of context carried over between windows
    #[arg(long, env = "DEBRIEF_CHUNK_OVERLAP")]
    pub overlap: Option<usize>,

    /// Seconds to wait for each LLM call
    #[arg(long, env = "DEBRIEF_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let cli = Cli::parse_from(["debrief", "notes.txt"]);
        assert_eq!(cli.filepath, PathBuf::from("notes.txt"));
        assert_eq!(cli.model, None);
        assert_eq!(cli.chunk_size, None);
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "debrief",
            "minutes.pdf",
            "--model",
            "gpt-4o",
            "--endpoint",
            "http://localhost:8080/v1",
            "--chunk-size",
            "500",
            "--overlap",
            "50",
            "--timeout-secs",
            "30",
            "--no-color",
            "--verbose",
        ]);

        assert_eq!(cli.filepath, PathBuf::from("minutes.pdf"));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(cli.chunk_size, Some(500));
        assert_eq!(cli.overlap, Some(50));
        assert_eq!(cli.timeout_secs, Some(30));
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_filepath_is_required() {
        let result = Cli::try_parse_from(["debrief"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_chunk_size_rejected() {
        let result = Cli::try_parse_from(["debrief", "notes.txt", "--chunk-size", "lots"]);
        assert!(result.is_err());
    }
}
