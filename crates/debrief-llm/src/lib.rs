//! Debrief LLM Provider Layer
//!
//! Pluggable LLM provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `debrief-domain`. Providers take a system prompt (role and output
//! contract) and a user prompt (the payload) and return the raw response
//! text; parsing and validation belong to the caller.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//!
//! # Examples
//!
//! ```
//! use debrief_llm::MockProvider;
//! use debrief_domain::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"summary": "ok"}"#);
//! let result = provider.generate_structured("system", "user").unwrap();
//! assert_eq!(result, r#"{"summary": "ok"}"#);
//! ```

#![warn(missing_docs)]

pub mod openai;

use debrief_domain::LlmProvider as LlmProviderTrait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// API key missing or rejected
    #[error("Unauthorized: API key was rejected")]
    Unauthorized,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// What the mock does when a rule's needle matches
#[derive(Debug, Clone)]
enum MockOutcome {
    Respond(String),
    Fail(String),
}

/// A substring-triggered canned behavior
#[derive(Debug, Clone)]
struct MockRule {
    needle: String,
    outcome: MockOutcome,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Rules are keyed by substring: the first rule whose needle occurs in
/// either prompt wins, which lets tests target one window out of many by
/// a fragment of its text. Every call is recorded for later inspection.
///
/// # Examples
///
/// ```
/// use debrief_llm::MockProvider;
/// use debrief_domain::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate_structured("s", "p").unwrap(), "Fixed response");
///
/// // Substring-keyed responses
/// let mut provider = MockProvider::default();
/// provider.add_response("alpha", "response one");
/// provider.add_response("beta", "response two");
/// assert_eq!(provider.generate_structured("s", "text with alpha").unwrap(), "response one");
/// assert_eq!(provider.generate_structured("s", "text with beta").unwrap(), "response two");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    rules: Arc<Mutex<Vec<MockRule>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            rules: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Return `response` whenever `needle` occurs in either prompt
    pub fn add_response(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.rules.lock().unwrap().push(MockRule {
            needle: needle.into(),
            outcome: MockOutcome::Respond(response.into()),
        });
    }

    /// Fail with an error whenever `needle` occurs in either prompt
    pub fn add_error(&mut self, needle: impl Into<String>) {
        self.rules.lock().unwrap().push(MockRule {
            needle: needle.into(),
            outcome: MockOutcome::Fail("Mock error".to_string()),
        });
    }

    /// Get the number of times `generate_structured` was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Get the recorded (system prompt, user prompt) pairs, in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Clear the recorded calls
    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        let rules = self.rules.lock().unwrap();
        for rule in rules.iter() {
            if system_prompt.contains(&rule.needle) || user_prompt.contains(&rule.needle) {
                return match &rule.outcome {
                    MockOutcome::Respond(response) => Ok(response.clone()),
                    MockOutcome::Fail(message) => Err(LlmError::Other(message.clone())),
                };
            }
        }

        Ok(self.default_response.clone())
    }
}
