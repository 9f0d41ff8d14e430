//! Prompt assembly for the analysis and synthesis calls

use debrief_domain::ChunkAnalysis;

/// System and user halves of one LLM request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Role and output-format instructions
    pub system: String,
    /// The document content or accumulated points to work on
    pub user: String,
}

const ANALYSIS_INSTRUCTION: &str = "You are an expert AI Ops Analyst. \
Extract a concise summary and actionable tasks from the provided internal document segment.";

const ANALYSIS_FORMAT: &str = r#"Respond with a JSON object in exactly this shape:
{
  "summary": "3-5 sentence summary of this specific section",
  "action_items": [
    {
      "description": "Concise description of the task",
      "priority": "High, Medium, or Low based on urgency",
      "owner": "Person or department responsible, if mentioned"
    }
  ],
  "key_entities": ["Important names, dates, or systems mentioned"]
}

Omit "owner" when the segment names nobody. Return ONLY valid JSON, no markdown code blocks, no explanations."#;

const SYNTHESIS_INSTRUCTION: &str = "You are a Technical Writer. \
Consolidate the provided points into a cohesive executive summary and deduplicate the action items.";

const SYNTHESIS_FORMAT: &str = r#"Respond with a JSON object in exactly this shape:
{
  "executive_summary": "A cohesive summary of the entire document",
  "consolidated_action_items": [
    {
      "description": "Concise description of the task",
      "priority": "High, Medium, or Low based on urgency",
      "owner": "Person or department responsible, if mentioned"
    }
  ]
}

Return ONLY valid JSON, no markdown code blocks, no explanations."#;

/// Build the per-window extraction prompt
pub fn analysis_prompt(window_text: &str) -> Prompt {
    Prompt {
        system: format!("{}\n\n{}", ANALYSIS_INSTRUCTION, ANALYSIS_FORMAT),
        user: format!("Analyze this text:\n\n{}", window_text),
    }
}

/// Build the consolidation prompt from the per-window analyses
///
/// Summaries are listed in window order, degraded placeholders included,
/// followed by every raw action item flattened in the same order.
/// Duplicates are kept; deduplication is the model's job.
pub fn synthesis_prompt(analyses: &[ChunkAnalysis]) -> Prompt {
    let mut user = String::from("Summaries:\n");
    for analysis in analyses {
        user.push_str(&format!("- {}\n", analysis.summary));
    }

    user.push_str("\nRaw Actions:\n");
    for analysis in analyses {
        for item in &analysis.action_items {
            let owner = item.owner.as_deref().unwrap_or("Unassigned");
            user.push_str(&format!(
                "- {} (priority: {}, owner: {})\n",
                item.description, item.priority, owner
            ));
        }
    }

    Prompt {
        system: format!("{}\n\n{}", SYNTHESIS_INSTRUCTION, SYNTHESIS_FORMAT),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debrief_domain::ActionItem;

    #[test]
    fn test_analysis_prompt_includes_window_text() {
        let prompt = analysis_prompt("The migration starts Tuesday.");

        assert!(prompt.system.contains("AI Ops Analyst"));
        assert!(prompt.system.contains("\"summary\""));
        assert!(prompt
            .user
            .starts_with("Analyze this text:\n\nThe migration starts Tuesday."));
    }

    #[test]
    fn test_synthesis_prompt_lists_summaries_in_order() {
        let analyses = vec![
            ChunkAnalysis::new("First segment summary.", Vec::new(), Vec::new()),
            ChunkAnalysis::new("Second segment summary.", Vec::new(), Vec::new()),
        ];
        let prompt = synthesis_prompt(&analyses);

        assert!(prompt.system.contains("Technical Writer"));
        assert!(prompt.user.contains(
            "Summaries:\n- First segment summary.\n- Second segment summary.\n\nRaw Actions:\n"
        ));
    }

    #[test]
    fn test_synthesis_prompt_flattens_actions_in_window_order() {
        let analyses = vec![
            ChunkAnalysis::new(
                "First.",
                vec![ActionItem::new(
                    "Rotate the keys",
                    "High",
                    Some("Alice".to_string()),
                )],
                Vec::new(),
            ),
            ChunkAnalysis::new(
                "Second.",
                vec![ActionItem::new("Audit the backups", "Low", None)],
                Vec::new(),
            ),
        ];
        let prompt = synthesis_prompt(&analyses);

        assert!(prompt.user.contains(
            "- Rotate the keys (priority: High, owner: Alice)\n\
             - Audit the backups (priority: Low, owner: Unassigned)\n"
        ));
    }

    #[test]
    fn test_synthesis_prompt_keeps_degraded_placeholders() {
        let analyses = vec![
            ChunkAnalysis::new("Healthy summary.", Vec::new(), Vec::new()),
            ChunkAnalysis::degraded(),
        ];
        let prompt = synthesis_prompt(&analyses);

        assert!(prompt
            .user
            .contains("- Healthy summary.\n- Error processing chunk\n"));
    }

    #[test]
    fn test_synthesis_prompt_keeps_duplicate_actions() {
        let item = ActionItem::new("Patch the bastion host", "High", None);
        let analyses = vec![
            ChunkAnalysis::new("One.", vec![item.clone()], Vec::new()),
            ChunkAnalysis::new("Two.", vec![item], Vec::new()),
        ];
        let prompt = synthesis_prompt(&analyses);

        let occurrences = prompt.user.matches("Patch the bastion host").count();
        assert_eq!(occurrences, 2);
    }
}
