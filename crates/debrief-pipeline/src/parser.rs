//! Parse LLM output into analysis and report structures
//!
//! Responses are untrusted input. Parsing is strict: a payload that
//! deviates from the expected shape fails as a whole rather than
//! salvaging the valid parts, and the caller substitutes the degraded
//! placeholder for that call.

use crate::error::PipelineError;
use debrief_domain::{ActionItem, ChunkAnalysis, FinalReport};
use serde_json::Value;

/// Parse an extraction response into a chunk analysis
///
/// `summary` is required; `action_items` and `key_entities` default to
/// empty when the field is missing entirely.
pub fn parse_chunk_analysis(response: &str) -> Result<ChunkAnalysis, PipelineError> {
    let json = parse_object(response)?;
    let obj = json
        .as_object()
        .ok_or_else(|| PipelineError::InvalidFormat("Expected JSON object".to_string()))?;

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PipelineError::InvalidFormat("Missing or invalid 'summary'".to_string()))?
        .to_string();

    let action_items = match obj.get("action_items") {
        Some(value) => {
            parse_item_array(value, "action_items").map_err(PipelineError::InvalidFormat)?
        }
        None => Vec::new(),
    };

    let key_entities = match obj.get("key_entities") {
        Some(value) => parse_string_array(value, "key_entities")
            .map_err(PipelineError::InvalidFormat)?,
        None => Vec::new(),
    };

    let analysis = ChunkAnalysis::new(summary, action_items, key_entities);
    analysis.validate().map_err(PipelineError::InvalidFormat)?;
    Ok(analysis)
}

/// Parse a synthesis response into the final report
///
/// Both `executive_summary` and `consolidated_action_items` are required.
pub fn parse_final_report(response: &str) -> Result<FinalReport, PipelineError> {
    let json = parse_object(response)?;
    let obj = json
        .as_object()
        .ok_or_else(|| PipelineError::InvalidFormat("Expected JSON object".to_string()))?;

    let executive_summary = obj
        .get("executive_summary")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            PipelineError::InvalidFormat("Missing or invalid 'executive_summary'".to_string())
        })?
        .to_string();

    let consolidated_action_items = obj
        .get("consolidated_action_items")
        .ok_or_else(|| {
            PipelineError::InvalidFormat("Missing 'consolidated_action_items'".to_string())
        })
        .and_then(|value| {
            parse_item_array(value, "consolidated_action_items")
                .map_err(PipelineError::InvalidFormat)
        })?;

    let report = FinalReport::new(executive_summary, consolidated_action_items);
    report.validate().map_err(PipelineError::InvalidFormat)?;
    Ok(report)
}

/// Strip a markdown fence if present and parse the payload as JSON
fn parse_object(response: &str) -> Result<Value, PipelineError> {
    let json_str = extract_json(response)?;
    serde_json::from_str(&json_str)
        .map_err(|e| PipelineError::InvalidFormat(format!("JSON parse error: {}", e)))
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, PipelineError> {
    let trimmed = response.trim();

    // LLMs sometimes wrap JSON in markdown code blocks
    if trimmed.starts_with("```json") || trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(PipelineError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse an array of action items; any malformed entry fails the array
fn parse_item_array(value: &Value, field: &str) -> Result<Vec<ActionItem>, String> {
    let array = value
        .as_array()
        .ok_or_else(|| format!("'{}' is not an array", field))?;

    let mut items = Vec::with_capacity(array.len());
    for (idx, item_json) in array.iter().enumerate() {
        let item =
            parse_action_item(item_json).map_err(|e| format!("Action item {}: {}", idx, e))?;
        items.push(item);
    }
    Ok(items)
}

/// Parse a single action item from JSON
fn parse_action_item(json: &Value) -> Result<ActionItem, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "not a JSON object".to_string())?;

    let description = obj
        .get("description")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'description'".to_string())?
        .to_string();

    // Any label is accepted here; unrecognized ones rank last at render time
    let priority = obj
        .get("priority")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'priority'".to_string())?
        .to_string();

    let owner = match obj.get("owner") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(_) => return Err("Invalid 'owner'".to_string()),
    };

    Ok(ActionItem {
        description,
        priority,
        owner,
    })
}

/// Parse an array of plain strings
fn parse_string_array(value: &Value, field: &str) -> Result<Vec<String>, String> {
    let array = value
        .as_array()
        .ok_or_else(|| format!("'{}' is not an array", field))?;

    array
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("'{}' contains a non-string entry", field))
        })
        .collect()
}
