//! OpenAI Provider Implementation
//!
//! Provides integration with the OpenAI chat completions API (and any
//! API-compatible endpoint).
//!
//! # Features
//!
//! - Async HTTP communication with the chat completions API
//! - JSON-object response mode for structured extraction
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use debrief_llm::OpenAiProvider;
//!
//! // Create a provider against the default endpoint
//! let provider = OpenAiProvider::default_endpoint("sk-...", "gpt-4-turbo");
//!
//! // Note: the generate_structured method is async, so you need to use it
//! // in an async context or via the LlmProvider trait's sync wrapper
//! ```

use crate::LlmError;
use debrief_domain::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default OpenAI API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default timeout for LLM requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// OpenAI-compatible chat completions provider
///
/// Requests JSON-object output so responses can be parsed as structured
/// data by the caller.
pub struct OpenAiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

/// A single chat message
#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response format selector (json_object forces valid JSON output)
#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://api.openai.com/v1")
    /// - `api_key`: Bearer token for authentication
    /// - `model`: Model to use (e.g., "gpt-4-turbo")
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a new provider against the default OpenAI endpoint
    pub fn default_endpoint(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, api_key, model)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the per-request HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();
        self
    }

    /// Generate a structured (JSON object) completion
    ///
    /// # Parameters
    ///
    /// - `system_prompt`: Role and output contract for the model
    /// - `user_prompt`: The payload to analyze
    ///
    /// # Returns
    ///
    /// The raw text of the first choice, expected to be a JSON object
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API key is rejected (no retry)
    /// - The model is not available (no retry)
    /// - Rate limits or network communication fail past the final retry
    /// - The response body cannot be decoded
    pub async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match response.json::<ChatCompletionResponse>().await {
                            Ok(completion) => {
                                return completion
                                    .choices
                                    .into_iter()
                                    .next()
                                    .and_then(|choice| choice.message.content)
                                    .ok_or_else(|| {
                                        LlmError::InvalidResponse(
                                            "Response contained no choices".to_string(),
                                        )
                                    });
                            }
                            Err(e) => {
                                return Err(LlmError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                )));
                            }
                        }
                    } else if status == reqwest::StatusCode::UNAUTHORIZED {
                        return Err(LlmError::Unauthorized);
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Self::Error> {
        // Blocking wrapper for the async implementation
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate_structured(system_prompt, user_prompt).await })
    }
}
