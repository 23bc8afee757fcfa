//! Panel core: pure state machine and selection reconciliation for the
//! webview control panels.
mod effect;
mod msg;
mod options;
mod result;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, NotifyKey};
pub use msg::Msg;
pub use options::{
    apply_single_selection, reconcile, toggle_multi_selection, Candidate, PlaceholderPolicy,
    PriorSelection, SelectOption, PLACEHOLDER_VALUE,
};
pub use result::{ActionResult, Command, ResultPayload};
pub use state::{
    ContentBuffer, ContentKind, ControlId, PanelState, DEFAULT_PLACEHOLDER_LABEL,
    TIMEOUT_MAX_SECS, TIMEOUT_MIN_SECS,
};
pub use update::update;
pub use view_model::PanelViewModel;
