//! Debrief Pipeline
//!
//! Turns a long document into a consolidated action report via LLM calls.
//!
//! # Overview
//!
//! Operational documents (meeting notes, incident writeups, status dumps)
//! rarely fit in one model call. The pipeline splits a document into
//! overlapping windows, extracts a structured analysis from each window,
//! and synthesizes the per-window results into one executive report with
//! deduplicated action items.
//!
//! # Architecture
//!
//! ```text
//! Text → Chunker → Windows → Analyzer (one call per window)
//!                                → Analyses → Synthesis → FinalReport
//! ```
//!
//! # Key Features
//!
//! - **Boundary-Aware Chunking**: Windows prefer paragraph and sentence
//!   breaks over raw size cuts
//! - **Degraded Results**: A failed window or synthesis call yields a
//!   typed placeholder instead of aborting the run
//! - **Strict Response Parsing**: Model output is untrusted; malformed
//!   payloads degrade the call that produced them
//! - **Run Accounting**: Window counts, degradation counts, and timing
//!   come back with every report
//!
//! # Example Usage
//!
//! ```no_run
//! use debrief_pipeline::{Pipeline, PipelineConfig};
//! use debrief_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"summary": "ok"}"#);
//! let config = PipelineConfig::default();
//!
//! let pipeline = Pipeline::new(provider, config).with_model_name("gpt-4-turbo");
//! let outcome = pipeline.run("The quarterly review covers three incidents.").await?;
//!
//! println!("Summary: {}", outcome.report.executive_summary);
//! println!("Windows analyzed: {}", outcome.metadata.window_count);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod chunker;
mod config;
mod error;
mod parser;
mod pipeline;
mod prompt;


pub use analyzer::Analyzer;
pub use chunker::{split, TextWindow};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{Pipeline, RunMetadata, RunOutcome, RunPhase};
