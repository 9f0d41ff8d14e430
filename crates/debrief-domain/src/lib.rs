//! Debrief Domain Layer
//!
//! This crate contains the core report model for Debrief. It has ZERO
//! external dependencies and defines the data contract shared by the
//! analysis pipeline, the LLM providers, and the CLI.
//!
//! ## Key Concepts
//!
//! - **ChunkAnalysis**: structured extraction from one document window
//! - **ActionItem**: a task surfaced by analysis, with priority and owner
//! - **FinalReport**: the synthesized, document-level result
//! - **Degraded sentinels**: structurally valid placeholders substituted
//!   when an extraction or synthesis call fails, so one bad window never
//!   sinks a whole run
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure data types and validation only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for the LLM boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action_item;
pub mod analysis;
pub mod priority;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use action_item::ActionItem;
pub use analysis::ChunkAnalysis;
pub use priority::{priority_rank, Priority};
pub use report::FinalReport;
pub use traits::LlmProvider;
