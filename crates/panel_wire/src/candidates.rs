use panel_logging::{panel_debug, panel_warn};
use serde_json::{Map, Value};

use crate::types::WireError;

/// One usable record out of a heterogeneous candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub value: String,
    pub label: String,
}

/// Parse a JSON candidate list into records.
///
/// Some host serialization layers deliver the list double-stringified; when
/// the first parse yields a JSON string the parser retries exactly once on
/// the inner payload, so nothing downstream ever sees the double encoding.
/// Records that carry no usable key/label are skipped with a warning.
pub fn parse_candidate_list(raw: &str) -> Result<Vec<CandidateRecord>, WireError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| WireError::MalformedJson(e.to_string()))?;
    let value = match value {
        Value::String(inner) => {
            panel_debug!("candidate list was double-encoded; parsing inner payload");
            serde_json::from_str(&inner).map_err(|e| WireError::MalformedJson(e.to_string()))?
        }
        other => other,
    };
    let Value::Array(items) = value else {
        return Err(WireError::NotAnArray);
    };

    let mut records = Vec::with_capacity(items.len());
    for item in &items {
        match candidate_from_value(item) {
            Some(record) => records.push(record),
            None => panel_warn!("skipping unusable candidate record: {item}"),
        }
    }
    Ok(records)
}

/// Key probing order: `scriptId`/`scriptName` pair, then `id`/`name`, then a
/// bare `name`, then a scalar that serves as both value and label.
fn candidate_from_value(item: &Value) -> Option<CandidateRecord> {
    match item {
        Value::Object(map) => {
            if let (Some(value), Some(label)) = (field_str(map, "scriptId"), field_str(map, "scriptName"))
            {
                return Some(CandidateRecord { value, label });
            }
            if let (Some(value), Some(label)) = (field_str(map, "id"), field_str(map, "name")) {
                return Some(CandidateRecord { value, label });
            }
            let name = field_str(map, "name")?;
            Some(CandidateRecord {
                value: name.clone(),
                label: name,
            })
        }
        Value::String(s) => Some(CandidateRecord {
            value: s.clone(),
            label: s.clone(),
        }),
        Value::Number(n) => {
            let text = n.to_string();
            Some(CandidateRecord {
                value: text.clone(),
                label: text,
            })
        }
        _ => None,
    }
}

fn field_str(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
