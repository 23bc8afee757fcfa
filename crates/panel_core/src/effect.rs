use crate::result::{ActionResult, Command};
use crate::state::ContentKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post a finished result to the extension host.
    PostResult {
        command: Command,
        result: ActionResult,
    },
    /// Encode the edited content at the boundary and post the outcome.
    EncodeAndSubmit {
        kind: ContentKind,
        text: String,
        command: Command,
    },
    /// Ask the host to show a notification; the host localizes the key.
    Notify { key: NotifyKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKey {
    IncorrectContentType,
    MalformedContent,
}

impl NotifyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyKey::IncorrectContentType => "incorrectContentType",
            NotifyKey::MalformedContent => "malformedContent",
        }
    }
}
