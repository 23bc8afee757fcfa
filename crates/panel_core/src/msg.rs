use crate::effect::NotifyKey;
use crate::options::{Candidate, PriorSelection};
use crate::state::{ContentKind, ControlId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Bootstrap content decoded at the boundary.
    ContentDecoded { kind: ContentKind, text: String },
    /// Bootstrap content could not be decoded. `notify` names the cause for
    /// the user-visible notification: an unknown tag and a bad payload are
    /// reported differently.
    ContentRejected { message: String, notify: NotifyKey },
    /// A candidate list arrived for one of the page controls.
    CandidatesLoaded {
        control: ControlId,
        candidates: Vec<Candidate>,
        prior: PriorSelection,
    },
    /// User edited the script text.
    EditorChanged(String),
    /// User picked a value in a single-select control.
    SelectionChanged { control: ControlId, value: String },
    /// User toggled a value in a multi-select control.
    MultiSelectionToggled { control: ControlId, value: String },
    /// User edited the timeout field (raw text, validated on submit).
    TimeoutChanged(String),
    /// User submitted the edited content.
    SubmitClicked,
    /// User requested a download of the current content.
    DownloadClicked,
    /// User submitted the function settings form.
    SettingsSubmitted,
    /// Fallback for ignored host commands.
    NoOp,
}
