//! Action item module - tasks surfaced by document analysis

/// A task surfaced by analyzing a document segment
///
/// The priority is kept as the raw label the extraction returned;
/// [`crate::priority_rank`] maps it to a sort order at render time.
/// Two items are duplicates only when structurally equal; semantic
/// deduplication happens in the synthesis call, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    /// What needs to be done
    pub description: String,

    /// Urgency label as extracted (expected: High, Medium, or Low)
    pub priority: String,

    /// Person or department responsible, if the document names one
    pub owner: Option<String>,
}

impl ActionItem {
    /// Create a new action item
    pub fn new(
        description: impl Into<String>,
        priority: impl Into<String>,
        owner: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            priority: priority.into(),
            owner,
        }
    }

    /// Validate that the item has the required fields
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("description is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_action_item() {
        let item = ActionItem::new(
            "Rotate the staging API keys",
            "High",
            Some("Platform Team".to_string()),
        );
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_missing_owner_is_valid() {
        let item = ActionItem::new("Review the backup schedule", "Low", None);
        assert!(item.validate().is_ok());
        assert_eq!(item.owner, None);
    }

    #[test]
    fn test_empty_description_rejected() {
        let item = ActionItem::new("", "High", None);
        assert!(item.validate().is_err());

        let blank = ActionItem::new("   ", "High", None);
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_unrecognized_priority_kept_verbatim() {
        let item = ActionItem::new("Check the logs", "Urgent", None);
        assert!(item.validate().is_ok());
        assert_eq!(item.priority, "Urgent");
    }

    #[test]
    fn test_structural_equality() {
        let a = ActionItem::new("Patch the bastion host", "High", None);
        let b = ActionItem::new("Patch the bastion host", "High", None);
        let c = ActionItem::new("Patch the bastion host", "Medium", None);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
