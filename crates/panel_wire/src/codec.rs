use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::types::{ContentEnvelope, ContentKind, ContentType};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("incorrect content type")]
    UnrecognizedContentType,
    #[error("malformed structured content: {0}")]
    MalformedStructuredContent(String),
    #[error("malformed plain content: {0}")]
    MalformedPlainContent(String),
}

/// Decode transport content into its editable in-memory form.
///
/// Structured content is base64 + JSON and comes back pretty-printed with
/// tab indentation for editing; plain scripts are percent-decoded with no
/// structural reinterpretation. An unrecognized tag fails before the payload
/// is touched.
pub fn decode(envelope: &ContentEnvelope) -> Result<String, CodecError> {
    match envelope.content_type.kind() {
        None => Err(CodecError::UnrecognizedContentType),
        Some(ContentKind::StructuredJson) => decode_structured(&envelope.raw_content),
        Some(ContentKind::PlainScript) => decode_plain(&envelope.raw_content),
    }
}

/// Encode edited text back into its transport form.
///
/// Structured content is parsed (structural validation), compacted, and
/// base64-encoded; plain scripts pass through unchanged.
pub fn encode(text: &str, kind: ContentKind) -> Result<String, CodecError> {
    match kind {
        ContentKind::StructuredJson => encode_structured(text),
        ContentKind::PlainScript => Ok(text.to_string()),
    }
}

/// [`encode`] dispatched from a raw content type, rejecting unrecognized
/// tags the same way [`decode`] does.
pub fn encode_for(text: &str, content_type: ContentType) -> Result<String, CodecError> {
    match content_type.kind() {
        None => Err(CodecError::UnrecognizedContentType),
        Some(kind) => encode(text, kind),
    }
}

fn decode_structured(raw: &str) -> Result<String, CodecError> {
    let bytes = BASE64
        .decode(raw.trim())
        .map_err(|e| CodecError::MalformedStructuredContent(e.to_string()))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| CodecError::MalformedStructuredContent(e.to_string()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| CodecError::MalformedStructuredContent(e.to_string()))?;
    pretty_with_tabs(&value)
}

fn encode_structured(text: &str) -> Result<String, CodecError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| CodecError::MalformedStructuredContent(e.to_string()))?;
    let compact = serde_json::to_string(&value)
        .map_err(|e| CodecError::MalformedStructuredContent(e.to_string()))?;
    Ok(BASE64.encode(compact))
}

fn decode_plain(raw: &str) -> Result<String, CodecError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|text| text.into_owned())
        .map_err(|e| CodecError::MalformedPlainContent(e.to_string()))
}

fn pretty_with_tabs(value: &serde_json::Value) -> Result<String, CodecError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| CodecError::MalformedStructuredContent(e.to_string()))?;
    String::from_utf8(out).map_err(|e| CodecError::MalformedStructuredContent(e.to_string()))
}
