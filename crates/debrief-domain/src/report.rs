//! Final report module - the synthesized, document-level result

use crate::ActionItem;

/// Executive summary text carried by a degraded report
pub const DEGRADED_EXECUTIVE_SUMMARY: &str = "Synthesis failed";

/// The consolidated report for a whole document
///
/// Produced by the synthesis call from the ordered per-window analyses.
/// Action items arrive in whatever order synthesis returned them; the
/// renderer owns presentation ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    /// Cohesive summary of the entire document (non-empty)
    pub executive_summary: String,

    /// Deduplicated action items, in synthesis order (may be empty)
    pub consolidated_action_items: Vec<ActionItem>,
}

impl FinalReport {
    /// Create a new report
    pub fn new(
        executive_summary: impl Into<String>,
        consolidated_action_items: Vec<ActionItem>,
    ) -> Self {
        Self {
            executive_summary: executive_summary.into(),
            consolidated_action_items,
        }
    }

    /// The placeholder substituted when the synthesis call fails
    pub fn degraded() -> Self {
        Self {
            executive_summary: DEGRADED_EXECUTIVE_SUMMARY.to_string(),
            consolidated_action_items: Vec::new(),
        }
    }

    /// Whether this report is the failure placeholder
    pub fn is_degraded(&self) -> bool {
        self.executive_summary == DEGRADED_EXECUTIVE_SUMMARY
            && self.consolidated_action_items.is_empty()
    }

    /// Validate that the report has the required fields
    pub fn validate(&self) -> Result<(), String> {
        if self.executive_summary.trim().is_empty() {
            return Err("executive_summary is empty".to_string());
        }
        for item in &self.consolidated_action_items {
            item.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_report() {
        let report = FinalReport::new(
            "The document describes the migration plan and its risks.",
            vec![ActionItem::new("Schedule the cutover window", "High", None)],
        );
        assert!(report.validate().is_ok());
        assert!(!report.is_degraded());
    }

    #[test]
    fn test_degraded_sentinel() {
        let report = FinalReport::degraded();
        assert_eq!(report.executive_summary, DEGRADED_EXECUTIVE_SUMMARY);
        assert!(report.consolidated_action_items.is_empty());
        assert!(report.is_degraded());
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_empty_summary_rejected() {
        let report = FinalReport::new("  ", Vec::new());
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_empty_items_are_valid() {
        let report = FinalReport::new("Nothing actionable in this document.", Vec::new());
        assert!(report.validate().is_ok());
    }
}
