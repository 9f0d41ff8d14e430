//! Per-window extraction and document-level synthesis calls
//!
//! The analyzer wraps the LLM provider so that no failure escapes: a
//! call that errors, times out, or returns an unparseable payload is
//! absorbed into the degraded placeholder for that call. Callers always
//! get a value back.

use crate::chunker::TextWindow;
use crate::error::PipelineError;
use crate::parser::{parse_chunk_analysis, parse_final_report};
use crate::prompt::{analysis_prompt, synthesis_prompt, Prompt};
use debrief_domain::{ChunkAnalysis, FinalReport, LlmProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Runs the extraction and synthesis calls against one provider
pub struct Analyzer<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    request_timeout: Duration,
}

impl<L> Analyzer<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new analyzer
    pub fn new(provider: Arc<L>, request_timeout: Duration) -> Self {
        Self {
            provider,
            request_timeout,
        }
    }

    /// Extract a structured analysis from one window
    ///
    /// Never fails: provider errors, timeouts, and malformed responses
    /// all collapse into [`ChunkAnalysis::degraded`].
    pub async fn analyze(&self, window: &TextWindow) -> ChunkAnalysis {
        match self.try_analyze(window).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("Failed to process window {}: {}", window.index, e);
                ChunkAnalysis::degraded()
            }
        }
    }

    /// Consolidate the per-window analyses into the final report
    ///
    /// Never fails: a failed synthesis call yields [`FinalReport::degraded`].
    pub async fn synthesize(&self, analyses: &[ChunkAnalysis]) -> FinalReport {
        match self.try_synthesize(analyses).await {
            Ok(report) => report,
            Err(e) => {
                warn!("Failed to synthesize report: {}", e);
                FinalReport::degraded()
            }
        }
    }

    async fn try_analyze(&self, window: &TextWindow) -> Result<ChunkAnalysis, PipelineError> {
        let prompt = analysis_prompt(&window.text);
        debug!("Window {} prompt length: {} chars", window.index, prompt.user.len());

        let response = timeout(self.request_timeout, self.call_provider(prompt))
            .await
            .map_err(|_| PipelineError::Timeout)??;

        debug!("LLM response length: {} chars", response.len());
        parse_chunk_analysis(&response)
    }

    async fn try_synthesize(
        &self,
        analyses: &[ChunkAnalysis],
    ) -> Result<FinalReport, PipelineError> {
        let prompt = synthesis_prompt(analyses);
        debug!("Synthesis prompt length: {} chars", prompt.user.len());

        let response = timeout(self.request_timeout, self.call_provider(prompt))
            .await
            .map_err(|_| PipelineError::Timeout)??;

        parse_final_report(&response)
    }

    /// Call the LLM provider
    async fn call_provider(&self, prompt: Prompt) -> Result<String, PipelineError> {
        let provider = Arc::clone(&self.provider);

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            provider
                .generate_structured(&prompt.system, &prompt.user)
                .map_err(|e| PipelineError::Provider(e.to_string()))
        })
        .await
        .map_err(|e| PipelineError::Provider(format!("Task join error: {}", e)))?
    }
}
