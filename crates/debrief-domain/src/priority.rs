//! Priority module - urgency levels for action items

/// Urgency level of an action item
///
/// Extraction returns priorities as free-form labels; this enum covers
/// the labels the analysis asks for. Anything else sorts after `Low`
/// via [`priority_rank`] rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Needs attention immediately
    High,

    /// Needs attention soon
    Medium,

    /// Can wait
    Low,
}

impl Priority {
    /// Get the priority name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a priority from a label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Sort rank for report ordering (High sorts first)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid priority: {}", s))
    }
}

/// Sort rank for a raw priority label
///
/// Unrecognized labels rank after `Low` so a sloppy extraction still
/// renders, just at the bottom of the table.
pub fn priority_rank(label: &str) -> u8 {
    match Priority::parse(label) {
        Some(priority) => priority.rank(),
        None => 3,
    }
}
