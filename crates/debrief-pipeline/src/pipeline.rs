//! End-to-end document analysis orchestration

use crate::analyzer::Analyzer;
use crate::chunker::split;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use debrief_domain::{FinalReport, LlmProvider};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

/// Phase of a pipeline run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Splitting the document into windows
    Chunking,
    /// Analyzing each window
    Mapping,
    /// Consolidating the analyses into the report
    Reducing,
}

impl RunPhase {
    /// Lowercase phase name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Chunking => "chunking",
            RunPhase::Mapping => "mapping",
            RunPhase::Reducing => "reducing",
        }
    }
}

/// Accounting for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    /// Character count of the source document
    pub source_chars: usize,

    /// Number of windows the document was split into
    pub window_count: usize,

    /// Windows whose extraction failed and was replaced by the placeholder
    pub degraded_windows: usize,

    /// Whether the synthesis call failed
    pub synthesis_degraded: bool,

    /// Name of the model used for the run
    pub model_name: String,

    /// Wall-clock time for the whole run
    pub processing_time_ms: u64,
}

/// A finished run: the report plus its accounting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The synthesized report
    pub report: FinalReport,

    /// Run accounting
    pub metadata: RunMetadata,
}

/// Orchestrates a document run: split into windows, analyze each one,
/// synthesize the final report
///
/// Window failures never abort the run; they surface as degraded
/// placeholders in the analyses and in the metadata counts. The only
/// error [`Pipeline::run`] returns is [`PipelineError::EmptyDocument`],
/// raised before any provider call is made.
pub struct Pipeline<L>
where
    L: LlmProvider,
{
    analyzer: Analyzer<L>,
    config: PipelineConfig,
    model_name: String,
}

impl<L> Pipeline<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new pipeline
    pub fn new(provider: L, config: PipelineConfig) -> Self {
        let analyzer = Analyzer::new(Arc::new(provider), config.request_timeout());
        Self {
            analyzer,
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Create a new pipeline with a specific model name in the metadata
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Analyze a document end to end
    pub async fn run(&self, text: &str) -> Result<RunOutcome, PipelineError> {
        let start_time = SystemTime::now();
        let source_chars = text.chars().count();

        debug!("Entering {} phase", RunPhase::Chunking.as_str());
        let windows = split(text, self.config.max_chunk_size, self.config.chunk_overlap);
        if windows.is_empty() {
            return Err(PipelineError::EmptyDocument);
        }
        info!("Document split into {} windows", windows.len());

        debug!("Entering {} phase", RunPhase::Mapping.as_str());
        let mut analyses = Vec::with_capacity(windows.len());
        for window in &windows {
            debug!("Analyzing window {}/{}", window.index + 1, windows.len());
            analyses.push(self.analyzer.analyze(window).await);
        }

        let degraded_windows = analyses.iter().filter(|a| a.is_degraded()).count();
        if degraded_windows > 0 {
            warn!(
                "{} of {} windows degraded to placeholders",
                degraded_windows,
                windows.len()
            );
        }

        debug!("Entering {} phase", RunPhase::Reducing.as_str());
        let report = self.analyzer.synthesize(&analyses).await;
        let synthesis_degraded = report.is_degraded();

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        info!(
            "Run complete: {} windows analyzed, {} degraded, {} action items, {} ms",
            windows.len(),
            degraded_windows,
            report.consolidated_action_items.len(),
            processing_time_ms
        );

        Ok(RunOutcome {
            report,
            metadata: RunMetadata {
                source_chars,
                window_count: windows.len(),
                degraded_windows,
                synthesis_degraded,
                model_name: self.model_name.clone(),
                processing_time_ms,
            },
        })
    }
}
