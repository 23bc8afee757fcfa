use serde_json::Value;

use crate::types::WireError;

/// A message pushed from the extension host into the page, dispatched by its
/// `command` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Replace the editor content.
    UpdateContent {
        content_type: String,
        content: String,
    },
    /// Replace one control's candidate list.
    UpdateCandidates {
        control: String,
        list_json: String,
        selected: Option<String>,
    },
    /// Anything outside the known vocabulary; callers must treat this as a
    /// no-op, never as an error.
    Unknown,
}

/// Parse an inbound host message. Only a frame that is not JSON at all is an
/// error; an unknown `command` parses to [`HostCommand::Unknown`].
pub fn parse_host_message(json: &str) -> Result<HostCommand, WireError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| WireError::MalformedJson(e.to_string()))?;
    let command = value.get("command").and_then(Value::as_str).unwrap_or("");
    match command {
        "updateContent" => Ok(HostCommand::UpdateContent {
            content_type: str_field(&value, "contentType"),
            content: str_field(&value, "content"),
        }),
        "updateCandidates" => Ok(HostCommand::UpdateCandidates {
            control: str_field(&value, "control"),
            list_json: list_field(&value),
            selected: value
                .get("selected")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned),
        }),
        _ => Ok(HostCommand::Unknown),
    }
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// The `list` field may be an embedded array or an already-stringified list;
/// both are handed on as a JSON string for the candidate parser.
fn list_field(value: &Value) -> String {
    match value.get("list") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
