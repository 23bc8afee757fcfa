use serde_json::{Map, Value};

/// Flattened result fields of an outbound message. The error and canceled
/// shapes are distinct variants, so a serialized message can never carry
/// both flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundPayload {
    Success { result: Option<Value> },
    Error { message: String },
    Canceled { reason: String },
}

/// Serialize `{ "command": ..., ...flattened payload }` for posting across
/// the page/host boundary.
pub fn result_message(command: &str, payload: &OutboundPayload) -> String {
    let mut fields = Map::new();
    fields.insert("command".to_string(), Value::String(command.to_string()));
    match payload {
        OutboundPayload::Success { result } => {
            if let Some(result) = result {
                fields.insert("result".to_string(), result.clone());
            }
        }
        OutboundPayload::Error { message } => {
            fields.insert("error".to_string(), Value::Bool(true));
            fields.insert("message".to_string(), Value::String(message.clone()));
        }
        OutboundPayload::Canceled { reason } => {
            fields.insert("canceled".to_string(), Value::Bool(true));
            fields.insert("reason".to_string(), Value::String(reason.clone()));
        }
    }
    Value::Object(fields).to_string()
}

/// Serialize a notification request; the host resolves `key` against its
/// localization table before rendering.
pub fn notify_message(key: &str) -> String {
    let mut fields = Map::new();
    fields.insert("command".to_string(), Value::String("notify".to_string()));
    fields.insert("key".to_string(), Value::String(key.to_string()));
    Value::Object(fields).to_string()
}
