//! Chunk analysis module - structured extraction from one document window

use crate::ActionItem;

/// Summary text carried by a degraded analysis
pub const DEGRADED_SUMMARY: &str = "Error processing chunk";

/// Structured extraction from a single document window
///
/// One of these exists per window, in window order, whether the
/// extraction call succeeded or not: failures are represented by the
/// degraded sentinel instead of being dropped, so downstream consumers
/// can always line analyses up against windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkAnalysis {
    /// Concise summary of the window (non-empty)
    pub summary: String,

    /// Tasks surfaced by the window, in extraction order (may be empty)
    pub action_items: Vec<ActionItem>,

    /// Notable names, dates, and systems mentioned (may be empty)
    pub key_entities: Vec<String>,
}

impl ChunkAnalysis {
    /// Create a new analysis
    pub fn new(
        summary: impl Into<String>,
        action_items: Vec<ActionItem>,
        key_entities: Vec<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            action_items,
            key_entities,
        }
    }

    /// The placeholder substituted when the extraction call fails
    pub fn degraded() -> Self {
        Self {
            summary: DEGRADED_SUMMARY.to_string(),
            action_items: Vec::new(),
            key_entities: Vec::new(),
        }
    }

    /// Whether this analysis is the failure placeholder
    pub fn is_degraded(&self) -> bool {
        self.summary == DEGRADED_SUMMARY
            && self.action_items.is_empty()
            && self.key_entities.is_empty()
    }

    /// Validate that the analysis has the required fields
    pub fn validate(&self) -> Result<(), String> {
        if self.summary.trim().is_empty() {
            return Err("summary is empty".to_string());
        }
        for item in &self.action_items {
            item.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_analysis() {
        let analysis = ChunkAnalysis::new(
            "The segment covers the Q3 incident postmortem.",
            vec![ActionItem::new("File the postmortem doc", "Medium", None)],
            vec!["Q3 incident".to_string()],
        );
        assert!(analysis.validate().is_ok());
        assert!(!analysis.is_degraded());
    }

    #[test]
    fn test_degraded_sentinel() {
        let analysis = ChunkAnalysis::degraded();
        assert_eq!(analysis.summary, DEGRADED_SUMMARY);
        assert!(analysis.action_items.is_empty());
        assert!(analysis.key_entities.is_empty());
        assert!(analysis.is_degraded());
        // Structurally valid: it must survive the synthesis path
        assert!(analysis.validate().is_ok());
    }

    #[test]
    fn test_empty_summary_rejected() {
        let analysis = ChunkAnalysis::new("", Vec::new(), Vec::new());
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_invalid_item_rejects_analysis() {
        let analysis = ChunkAnalysis::new(
            "Fine summary.",
            vec![ActionItem::new("", "High", None)],
            Vec::new(),
        );
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_real_summary_matching_sentinel_text_needs_empty_fields() {
        // A genuine analysis that happens to carry items is not degraded
        let analysis = ChunkAnalysis::new(
            DEGRADED_SUMMARY,
            vec![ActionItem::new("Investigate", "High", None)],
            Vec::new(),
        );
        assert!(!analysis.is_degraded());
    }
}
