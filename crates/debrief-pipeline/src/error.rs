//! Error types for the analysis pipeline

use thiserror::Error;

/// Errors that can occur while running the pipeline
///
/// Only `EmptyDocument` ever crosses [`crate::Pipeline::run`]; the other
/// variants exist inside the extraction adapter, which absorbs them into
/// degraded sentinel values instead of propagating.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Document produced no usable content after windowing
    #[error("Document produced no usable content")]
    EmptyDocument,

    /// LLM provider error
    #[error("LLM error: {0}")]
    Provider(String),

    /// Analysis call exceeded the configured timeout
    #[error("Analysis call timed out")]
    Timeout,

    /// Response did not satisfy the expected schema
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}
