//! Trait definitions for external interactions
//!
//! These traits define the boundary between the report model and
//! infrastructure. Implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (debrief-llm). Providers are
/// synchronous at this seam; async callers bridge with a blocking task.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a structured (JSON object) completion
    ///
    /// The system prompt carries the role and output contract; the user
    /// prompt carries the payload to analyze. Returns the raw response
    /// text, which the caller parses and validates.
    fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Self::Error>;
}
