/// Content-type tag delivered with the page bootstrap data.
///
/// Tag parsing is total: any tag outside the known vocabulary maps to
/// `Unrecognized`, which every codec operation rejects before touching the
/// payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    StructuredJson,
    PlainScript,
    Unrecognized,
}

/// The decodable subset of [`ContentType`]. Once a tag has been dispatched
/// to a kind, decode and encode are total over that kind's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    StructuredJson,
    PlainScript,
}

impl ContentType {
    pub const STRUCTURED_TAG: &'static str = "SIDE";
    pub const PLAIN_TAG: &'static str = "PLAYWRIGHT_TS";

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::STRUCTURED_TAG => ContentType::StructuredJson,
            Self::PLAIN_TAG => ContentType::PlainScript,
            _ => ContentType::Unrecognized,
        }
    }

    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            ContentType::StructuredJson => Some(ContentKind::StructuredJson),
            ContentType::PlainScript => Some(ContentKind::PlainScript),
            ContentType::Unrecognized => None,
        }
    }
}

/// Opaque transport-safe content plus its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEnvelope {
    pub content_type: ContentType,
    pub raw_content: String,
}

/// Errors from envelope and candidate-list parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    #[error("malformed json: {0}")]
    MalformedJson(String),
    #[error("candidate list is not an array")]
    NotAnArray,
}
